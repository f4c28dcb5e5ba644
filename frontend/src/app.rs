use crate::components::request_form::RequestFormComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <header class="page-header">
                    <h1>{ "Payment request links" }</h1>
                    <p class="tagline">{ "Turn an address and an amount into a link anyone can pay." }</p>
                </header>
                <RequestFormComponent />
            </div>
        }
    }
}
