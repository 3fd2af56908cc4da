//! Contact form delivery through EmailJS.
//!
//! Client-side (csr): real send via the `emailjs` crate.
//! Native builds: returns [`ContactError::Unavailable`] since there is no
//! browser fetch to call.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into one generic message for the visitor; the
//! typed error is only logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::config::ContactConfig;
use crate::state::contact::ContactForm;

const ANONYMOUS_SENDER: &str = "Anonymous";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Delivery(#[from] emailjs::SendError),
    #[error("email delivery is only available in the browser")]
    Unavailable,
}

/// Variables handed to the EmailJS template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    #[must_use]
    pub fn from_form(form: &ContactForm, recipient: &str) -> Self {
        let name = form.name.trim();
        Self {
            from_name: if name.is_empty() { ANONYMOUS_SENDER.to_owned() } else { name.to_owned() },
            from_email: form.email.trim().to_owned(),
            subject: form.subject.trim().to_owned(),
            message: form.message.clone(),
            to_email: recipient.to_owned(),
        }
    }
}

/// Send the form. Resolves once EmailJS answers; there is no timeout and no
/// way to cancel.
///
/// # Errors
///
/// Returns [`ContactError`] for missing credentials, transport failures and
/// any non-200 answer.
pub async fn send_contact(config: &ContactConfig, form: &ContactForm) -> Result<(), ContactError> {
    let params = TemplateParams::from_form(form, &config.recipient);
    #[cfg(feature = "csr")]
    {
        emailjs::send(&config.credentials, &params).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = params;
        Err(ContactError::Unavailable)
    }
}
