use yew::prelude::*;

use crate::components::lead_form::LeadFormModal;

use super::messages::Msg;
use super::state::DownloadButton;

pub fn view(component: &DownloadButton, ctx: &Context<DownloadButton>) -> Html {
    let link = ctx.link();
    let label = if component.downloading {
        "Preparing download...".to_string()
    } else {
        format!("Download {}", ctx.props().title)
    };

    html! {
        <>
            <button
                class="download-btn"
                disabled={component.downloading}
                onclick={link.callback(|_| Msg::Clicked)}
            >
                { label }
            </button>

            <LeadFormModal
                open={component.show_capture}
                on_close={link.callback(|_| Msg::CaptureDismissed)}
                on_success={link.callback(|_| Msg::LeadCaptured)}
            />
        </>
    }
}
