//! Update function for the download trigger.
//!
//! Drives the two-step gate flow: direct attempt when the local marker says
//! the form was already submitted, capture modal otherwise, and a single
//! delayed retry once the modal reports success. A 403 from the issuer
//! overrides the marker and reopens the modal.

use gloo_console::error;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::responses::{DownloadGrant, ErrorBody};

use crate::tracking;

use super::helpers::{open_in_new_tab, show_toast};
use super::messages::Msg;
use super::state::DownloadButton;

/// Delay before the automatic re-attempt after a successful capture, giving
/// the fresh gate cookie time to settle before the issuer re-checks it.
const RETRY_DELAY_MS: u32 = 500;

pub fn update(component: &mut DownloadButton, ctx: &Context<DownloadButton>, msg: Msg) -> bool {
    match msg {
        Msg::Clicked => {
            if component.downloading {
                return false;
            }
            if tracking::has_submitted_lead() {
                begin_attempt(component, ctx)
            } else {
                component.show_capture = true;
                true
            }
        }
        Msg::GrantReady(grant) => {
            component.downloading = false;
            open_in_new_tab(&grant.url);
            true
        }
        Msg::LeadRequired => {
            // The marker was stale; the cookie is what counts. Drop the
            // marker so the flow goes back through the form.
            tracking::clear_tracking_data();
            component.downloading = false;
            component.show_capture = true;
            true
        }
        Msg::AttemptFailed(reason) => {
            component.downloading = false;
            error!("download attempt failed:", reason);
            show_toast("Something went wrong. Please try again.");
            true
        }
        Msg::LeadCaptured => {
            component.show_capture = false;
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(RETRY_DELAY_MS).await;
                link.send_message(Msg::Retry);
            });
            true
        }
        Msg::CaptureDismissed => {
            component.show_capture = false;
            true
        }
        Msg::Retry => begin_attempt(component, ctx),
    }
}

/// Fires a request at the download issuer and maps its answer to a message.
fn begin_attempt(component: &mut DownloadButton, ctx: &Context<DownloadButton>) -> bool {
    component.downloading = true;

    let link = ctx.link().clone();
    let level = ctx.props().level;
    spawn_local(async move {
        let response = Request::get(&format!("/api/download?level={level}")).send().await;
        let msg = match response {
            Ok(resp) if resp.status() == 200 => match resp.json::<DownloadGrant>().await {
                Ok(grant) if grant.success => Msg::GrantReady(grant),
                Ok(_) => Msg::AttemptFailed("issuer reported failure".to_string()),
                Err(err) => Msg::AttemptFailed(err.to_string()),
            },
            Ok(resp) if resp.status() == 403 => match resp.json::<ErrorBody>().await {
                Ok(body) if body.requires_lead.unwrap_or(false) => Msg::LeadRequired,
                _ => Msg::AttemptFailed("download refused".to_string()),
            },
            Ok(resp) => Msg::AttemptFailed(format!("server answered {}", resp.status())),
            Err(err) => Msg::AttemptFailed(err.to_string()),
        };
        link.send_message(msg);
    });

    true
}
