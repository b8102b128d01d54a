//! Lead capture modal: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and validation helpers.
//!
//! The form mirrors the server-side intake rules so most rejections are
//! caught locally; the server stays the authority and its rejection message
//! is surfaced on the form when it disagrees. After a successful submission
//! the modal shows a confirmation panel and closes itself shortly after.

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use helpers::FieldErrors;
pub use messages::Msg;
pub use props::LeadFormProps;
pub use state::LeadFormModal;

use yew::prelude::*;

impl Component for LeadFormModal {
    type Message = Msg;
    type Properties = LeadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LeadFormModal::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
