//! Payment request form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and DOM helpers.
//!
//! Responsibilities
//! - Re-export the component's public surface (`Msg`, `RequestFormProps`,
//!   `RequestFormComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//!
//! The flow itself is: validate the fields, build the wire payload, POST it
//! to the creation endpoint, then show the returned link or the per-field
//! errors. All business rules live in the `common` crate; this component
//! owns only the UI state machine and the browser glue.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RequestFormProps;
pub use state::RequestFormComponent;

impl Component for RequestFormComponent {
    type Message = Msg;
    type Properties = RequestFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RequestFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
