//! Update function for the payment request form.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//!
//! A submission runs in three steps: validate the field snapshot, build the
//! wire payload, dispatch it through `crate::api`. The async round trip
//! re-enters the component through `Msg::SubmitFinished`, which routes the
//! outcome: the URI to the result panel, a failure to a toast plus the
//! restored form. Validation failures surface the first message of each
//! failing field, address before amount, and never touch the network.

use common::requests::CreatePaymentRequest;
use common::validate::{plausible_bitcoin_address, validate, ValidationResult};
use gloo_console::{debug, error};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::helpers::{copy_uri_to_clipboard, notify_field, show_toast, ToastKind};
use super::messages::Msg;
use super::state::{RequestFormComponent, Stage};

/// Toast shown when the round trip fails; the detail goes to the console.
const SUBMIT_FAILED: &str = "Could not create the payment request. Please try again.";

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async completion).
/// - Returns `true` to re-render the view.
pub fn update(
    component: &mut RequestFormComponent,
    ctx: &Context<RequestFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateAddress(value) => {
            component.address = value;
            true
        }
        Msg::UpdateAmount(value) => {
            component.amount = value;
            true
        }
        Msg::UpdateMemo(value) => {
            component.memo = value;
            true
        }
        Msg::UpdateAckMemo(value) => {
            component.ack_memo = value;
            true
        }
        Msg::ToggleAdvanced => {
            component.advanced_open = !component.advanced_open;
            true
        }
        Msg::Submit => {
            // One request in flight per click; the button is disabled too,
            // but Enter in a field still lands here.
            if component.stage == Stage::Submitting {
                return false;
            }
            let input = component.form_input();
            match validate(&input, plausible_bitcoin_address) {
                ValidationResult::Invalid(errors) => {
                    for (label, message) in errors.banner_messages() {
                        notify_field(label, message);
                    }
                    true
                }
                ValidationResult::Valid => {
                    let payload = CreatePaymentRequest::from_form(&input, &ctx.props().defaults);
                    component.stage = Stage::Submitting;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = api::create_payment_request(&payload).await;
                        link.send_message(Msg::SubmitFinished(outcome));
                    });
                    true
                }
            }
        }
        Msg::SubmitFinished(outcome) => {
            match outcome {
                Ok(uri) => {
                    debug!(format!("payment request created: {uri}"));
                    component.stage = Stage::Result { uri };
                }
                Err(err) => {
                    error!(format!("payment request failed: {err}"));
                    show_toast(ToastKind::Error, SUBMIT_FAILED);
                    // Back to an editable form, never stuck in Submitting.
                    component.stage = Stage::Form;
                }
            }
            true
        }
        Msg::CopyUri => {
            if let Stage::Result { uri } = &component.stage {
                copy_uri_to_clipboard(uri.clone());
            }
            false
        }
        Msg::GoBack => {
            component.clear_fields();
            component.advanced_open = false;
            component.stage = Stage::Form;
            true
        }
    }
}
