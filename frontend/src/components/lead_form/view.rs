//! View rendering for the lead capture modal.

use web_sys::{Event, HtmlInputElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LeadFormModal;

pub fn view(component: &LeadFormModal, ctx: &Context<LeadFormModal>) -> Html {
    if !ctx.props().open {
        return Html::default();
    }
    let link = ctx.link();

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>{ "Download ACCA Syllabus" }</h2>
                    <button class="modal-close" onclick={link.callback(|_| Msg::Dismiss)}>
                        { "\u{00d7}" }
                    </button>
                </div>
                {
                    if component.submitted {
                        build_success_panel()
                    } else {
                        build_form(component, link)
                    }
                }
            </div>
        </div>
    }
}

fn build_form(component: &LeadFormModal, link: &Scope<LeadFormModal>) -> Html {
    let on_submit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });

    html! {
        <form onsubmit={on_submit}>
            <input
                type="email"
                placeholder="your.email@example.com"
                value={component.email.clone()}
                disabled={component.loading}
                oninput={link.callback(|event: InputEvent| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    Msg::EmailChanged(input.value())
                })}
            />
            { build_field_error(&component.errors.email) }

            <input
                type="text"
                placeholder="Full name"
                value={component.name.clone()}
                disabled={component.loading}
                oninput={link.callback(|event: InputEvent| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    Msg::NameChanged(input.value())
                })}
            />
            { build_field_error(&component.errors.name) }

            <input
                type="tel"
                placeholder="Phone (optional)"
                value={component.phone.clone()}
                disabled={component.loading}
                oninput={link.callback(|event: InputEvent| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    Msg::PhoneChanged(input.value())
                })}
            />

            <label class="consent-row">
                <input
                    type="checkbox"
                    checked={component.consent}
                    disabled={component.loading}
                    onchange={link.callback(|event: Event| {
                        let input: HtmlInputElement = event.target_unchecked_into();
                        Msg::ConsentToggled(input.checked())
                    })}
                />
                <span>
                    { "I agree to receive study resources and updates by email. \
                       Unsubscribe at any time." }
                </span>
            </label>
            { build_field_error(&component.errors.consent) }

            <div class="modal-actions">
                <button
                    type="button"
                    class="ghost-btn"
                    disabled={component.loading}
                    onclick={link.callback(|_| Msg::Dismiss)}
                >
                    { "Cancel" }
                </button>
                <button type="submit" class="download-btn" disabled={component.loading}>
                    { if component.loading { "Submitting..." } else { "Download now" } }
                </button>
            </div>
        </form>
    }
}

fn build_field_error(message: &Option<String>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => Html::default(),
    }
}

fn build_success_panel() -> Html {
    html! {
        <div class="modal-success">
            <h3>{ "Success!" }</h3>
            <p>{ "Your download will start shortly. Check your inbox for more study resources." }</p>
        </div>
    }
}
