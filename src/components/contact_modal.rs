//! Contact modal: form, EmailJS submission, and result message.
//!
//! DESIGN
//! ======
//! `ContactState` owns every transition (open, close, begin/finish send);
//! this component only renders it and schedules the timers around a send.
//! While the modal is open the body `scroll-disabled` class is set by the
//! effect in `App`.
//!
//! ERROR HANDLING
//! ==============
//! Delivery failures are logged with their typed cause and shown to the
//! visitor as one generic message. The modal stays open so they can retry.

use leptos::prelude::*;

use crate::state::contact::{ContactForm, ContactState, FormMessage};
use crate::state::ui::AppContext;
#[cfg(feature = "csr")]
use crate::{
    config::ContactConfig,
    net::contact::send_contact,
    util::browser::{self, DomError},
};

const FIRST_FIELD: &str = "#contact-form input";

/// Open the modal and focus its first field once it has rendered.
pub fn open_contact(ctx: AppContext) {
    ctx.contact.update(ContactState::open);
    #[cfg(feature = "csr")]
    {
        let delay = ctx.config.with_value(|c| c.contact.focus_delay_ms);
        browser::after(delay, || browser::focus_first(FIRST_FIELD));
    }
}

/// Escape closes the modal from anywhere on the page.
///
/// # Errors
///
/// Returns [`DomError`] when the keydown listener cannot be attached.
#[cfg(feature = "csr")]
pub fn wire(ctx: AppContext) -> Result<(), DomError> {
    use wasm_bindgen::JsCast;

    let contact = ctx.contact;
    browser::document_listener("keydown", move |ev| {
        let is_escape = ev
            .dyn_ref::<web_sys::KeyboardEvent>()
            .is_some_and(|k| k.key() == "Escape");
        if is_escape && contact.with_untracked(|c| c.open) {
            contact.update(ContactState::close);
        }
    })
}

fn submit(ctx: AppContext) {
    let Some(form) = ctx.contact.try_update(ContactState::begin_send).flatten() else {
        log::debug!("contact: send already in flight");
        return;
    };
    let config = ctx.config.with_value(|c| c.contact.clone());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(deliver(ctx, config, form));
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, form);
        ctx.contact.update(|c| c.finish_send(false));
    }
}

#[cfg(feature = "csr")]
async fn deliver(ctx: AppContext, config: ContactConfig, form: ContactForm) {
    let delivered = match send_contact(&config, &form).await {
        Ok(()) => {
            log::info!("contact: message delivered");
            true
        }
        Err(err) => {
            log::error!("contact: delivery failed: {err}");
            false
        }
    };
    let Some(session) = ctx.contact.try_update(|c| {
        c.finish_send(delivered);
        c.session()
    }) else {
        return;
    };

    if delivered {
        let contact = ctx.contact;
        browser::after(config.close_delay_ms, move || {
            contact.maybe_update(|c| c.close_if_session(session));
        });
        browser::after(config.success_hide_ms, move || {
            contact.maybe_update(|c| c.hide_message_if_session(session));
        });
    }
}

fn field_setter(
    contact: RwSignal<ContactState>,
    set: fn(&mut ContactForm, String),
) -> impl Fn(leptos::ev::Event) + Copy + Send + Sync + 'static {
    move |ev| {
        let value = event_target_value(&ev);
        contact.update(|c| set(&mut c.form, value));
    }
}

/// Modal dialog with the contact form. Rendered only while open.
#[component]
pub fn ContactModal() -> impl IntoView {
    let ctx = AppContext::expect();
    let contact = ctx.contact;

    let close = move || contact.update(ContactState::close);
    let sending = move || contact.with(|c| c.sending);
    let message = move || contact.with(|c| c.message);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(ctx);
    };

    view! {
        <Show when=move || contact.with(|c| c.open)>
            <div id="contact-modal" class="modal active" on:click=move |_| close()>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-modal-title"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h2 id="contact-modal-title">"Get In Touch"</h2>
                        <button
                            id="modal-close"
                            type="button"
                            class="modal-close"
                            aria-label="Close"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                    </div>
                    <form id="contact-form" class="contact-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="contact-name">"Name"</label>
                            <input
                                id="contact-name"
                                name="name"
                                type="text"
                                autocomplete="name"
                                prop:value=move || contact.with(|c| c.form.name.clone())
                                on:input=field_setter(contact, |f, v| f.name = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-email">"Email"</label>
                            <input
                                id="contact-email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required
                                prop:value=move || contact.with(|c| c.form.email.clone())
                                on:input=field_setter(contact, |f, v| f.email = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-subject">"Subject"</label>
                            <input
                                id="contact-subject"
                                name="subject"
                                type="text"
                                prop:value=move || contact.with(|c| c.form.subject.clone())
                                on:input=field_setter(contact, |f, v| f.subject = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-message">"Message"</label>
                            <textarea
                                id="contact-message"
                                name="message"
                                rows="5"
                                required
                                prop:value=move || contact.with(|c| c.form.message.clone())
                                on:input=field_setter(contact, |f, v| f.message = v)
                            ></textarea>
                        </div>
                        <Show when=move || message().is_some()>
                            <div
                                id="form-message"
                                class=move || message().map_or("form-message", FormMessage::class)
                                role="status"
                            >
                                {move || message().map(FormMessage::text)}
                            </div>
                        </Show>
                        <div class="form-actions">
                            <button
                                id="cancel-btn"
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| close()
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=sending>
                                <Show
                                    when=sending
                                    fallback=|| view! { <span class="btn-text">"Send Message"</span> }
                                >
                                    <span class="btn-loading">"Sending..."</span>
                                </Show>
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
