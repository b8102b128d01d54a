//! Download trigger: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! One button per syllabus paper. A click consults the local consent marker
//! to choose between asking the issuer directly and opening the capture
//! modal first, but the marker never decides authorization: a 403 from the
//! issuer always reopens the modal, no matter what the marker claimed.

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DownloadProps;
pub use state::DownloadButton;

use yew::prelude::*;

impl Component for DownloadButton {
    type Message = Msg;
    type Properties = DownloadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DownloadButton::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
