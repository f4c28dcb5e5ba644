//! View rendering for the payment request form.
//!
//! Two panels alternate: the form (address and amount inputs, with the
//! optional memo fields behind an "advanced" disclosure) and the result
//! panel showing the shareable link with copy and share affordances. Panel
//! changes fade in when the `fade` prop is set.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{RequestFormComponent, Stage};

/// Main view function for the request form component.
pub fn view(component: &RequestFormComponent, ctx: &Context<RequestFormComponent>) -> Html {
    let link = ctx.link();
    let fade = ctx.props().fade;

    html! {
        <div class="request-form-root">
            {
                match &component.stage {
                    Stage::Form | Stage::Submitting => build_form(component, link, fade),
                    Stage::Result { uri } => build_result(uri, link, fade),
                }
            }
        </div>
    }
}

/// Builds the editable form panel. While a request is in flight the inputs
/// stay visible but the submit button is disabled and relabeled.
fn build_form(component: &RequestFormComponent, link: &Scope<RequestFormComponent>, fade: bool) -> Html {
    let submitting = component.stage == Stage::Submitting;

    html! {
        <form
            id="form"
            class={panel_class(fade)}
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            { text_input("address", "Bitcoin address", &component.address, link.callback(Msg::UpdateAddress)) }
            { text_input("amount", "Amount (BTC)", &component.amount, link.callback(Msg::UpdateAmount)) }
            <button
                type="button"
                class="link-btn"
                onclick={link.callback(|_| Msg::ToggleAdvanced)}
            >
                { if component.advanced_open { "Hide advanced options" } else { "Advanced options" } }
            </button>
            {
                if component.advanced_open {
                    html! {
                        <>
                            { text_input("memo", "Memo", &component.memo, link.callback(Msg::UpdateMemo)) }
                            { text_input("ackMemo", "Thank-you note shown after payment", &component.ack_memo, link.callback(Msg::UpdateAckMemo)) }
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <button id="submitButton" type="submit" class="primary-btn" disabled={submitting}>
                { if submitting { "Creating..." } else { "Create payment request" } }
            </button>
        </form>
    }
}

/// Builds the result panel: the shareable link plus copy and reset actions.
fn build_result(uri: &str, link: &Scope<RequestFormComponent>, fade: bool) -> Html {
    html! {
        <div id="response" class={classes!(panel_class(fade), "response")}>
            <p class="response-lead">{ "Your payment request is ready to share:" }</p>
            <p id="responseURI" class="response-uri">
                <a href={uri.to_string()} target="_blank" rel="noopener">{ uri }</a>
            </p>
            <div class="response-actions">
                <button id="copyButton" type="button" class="primary-btn" onclick={link.callback(|_| Msg::CopyUri)}>
                    { "Copy link" }
                </button>
                <button id="goBack" type="button" class="link-btn" onclick={link.callback(|_| Msg::GoBack)}>
                    { "Create another" }
                </button>
            </div>
        </div>
    }
}

/// Renders one labeled text input bound to `value`; `on_change` receives
/// the new field text on every keystroke.
fn text_input(id: &'static str, label: &str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });
    html! {
        <label class="field" for={id}>
            <span class="field-label">{ label }</span>
            <input id={id} type="text" value={value.to_string()} {oninput} autocomplete="off" />
        </label>
    }
}

fn panel_class(fade: bool) -> &'static str {
    if fade { "panel fade-in" } else { "panel" }
}
