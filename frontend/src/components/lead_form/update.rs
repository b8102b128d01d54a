//! Update function for the lead capture modal.
//!
//! Field edits clear that field's error, submit validates locally before
//! POSTing, and a server rejection lands back on the form. On acceptance
//! the local consent marker is written, the parent is notified, and the
//! modal closes itself after a short confirmation pause.

use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::lead::Lead;
use common::responses::{ErrorBody, LeadSubmitted};

use crate::tracking;

use super::helpers::validate;
use super::messages::Msg;
use super::state::LeadFormModal;

/// How long the success panel stays up before the modal closes itself.
const AUTO_CLOSE_MS: u32 = 1_500;
/// Attribution recorded on every lead captured through this modal.
const LEAD_SOURCE: &str = "syllabus-download";

pub fn update(component: &mut LeadFormModal, ctx: &Context<LeadFormModal>, msg: Msg) -> bool {
    match msg {
        Msg::EmailChanged(value) => {
            component.email = value;
            component.errors.email = None;
            true
        }
        Msg::NameChanged(value) => {
            component.name = value;
            component.errors.name = None;
            true
        }
        Msg::PhoneChanged(value) => {
            component.phone = value;
            true
        }
        Msg::ConsentToggled(value) => {
            component.consent = value;
            component.errors.consent = None;
            true
        }
        Msg::Submit => {
            let errors = validate(&component.email, &component.name, component.consent);
            if !errors.is_empty() {
                component.errors = errors;
                return true;
            }
            component.loading = true;

            let phone = component.phone.trim();
            let lead = Lead {
                email: component.email.trim().to_string(),
                name: component.name.trim().to_string(),
                phone: (!phone.is_empty()).then(|| phone.to_string()),
                consent: component.consent,
                source: Some(LEAD_SOURCE.to_string()),
            };
            submit_lead(ctx.link().clone(), lead);
            true
        }
        Msg::Accepted => {
            component.loading = false;
            component.submitted = true;
            tracking::mark_lead_submitted(component.email.trim(), component.name.trim());
            ctx.props().on_success.emit(());

            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(AUTO_CLOSE_MS).await;
                link.send_message(Msg::AutoClose);
            });
            true
        }
        Msg::Rejected(reason) => {
            component.loading = false;
            // Server rejections land on the email field, the one the server
            // actually validates beyond presence.
            component.errors.email = Some(reason);
            true
        }
        Msg::Dismiss => {
            // No cancelling a submission already on the wire.
            if !component.loading {
                component.submitted = false;
                ctx.props().on_close.emit(());
            }
            false
        }
        Msg::AutoClose => {
            component.submitted = false;
            ctx.props().on_close.emit(());
            false
        }
    }
}

fn submit_lead(link: yew::html::Scope<LeadFormModal>, lead: Lead) {
    spawn_local(async move {
        let request = match Request::post("/api/leads").json(&lead) {
            Ok(request) => request,
            Err(err) => {
                link.send_message(Msg::Rejected(err.to_string()));
                return;
            }
        };

        let msg = match request.send().await {
            Ok(resp) if resp.status() == 200 => match resp.json::<LeadSubmitted>().await {
                Ok(body) if body.success => {
                    if let Some(platform) = body.platform {
                        log!("lead accepted, forwarded to", platform);
                    }
                    Msg::Accepted
                }
                _ => Msg::Rejected("Submission failed. Please try again.".to_string()),
            },
            Ok(resp) => match resp.json::<ErrorBody>().await {
                Ok(body) => Msg::Rejected(body.error),
                Err(_) => Msg::Rejected(format!("Submission failed ({})", resp.status())),
            },
            Err(err) => Msg::Rejected(err.to_string()),
        };
        link.send_message(msg);
    });
}
