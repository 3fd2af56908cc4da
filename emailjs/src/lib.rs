//! Minimal EmailJS REST client for browser builds.
//!
//! This crate owns the wire representation of an EmailJS "send" call: the
//! credentials that select a service/template pair, the JSON request body, and
//! the rule for interpreting the response. The actual HTTP call lives behind
//! the `browser` feature because it uses `gloo-net` (the browser fetch API);
//! native builds only get the types, which keeps them unit-testable.
//!
//! EmailJS treats a request as delivered only when it answers `200`. Anything
//! else, including other 2xx codes, is reported as [`SendError::Rejected`].

use serde::{Deserialize, Serialize};

/// Public REST endpoint for sending a templated email.
pub const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The only status EmailJS uses to signal a delivered message.
pub const STATUS_DELIVERED: u16 = 200;

/// Error returned by [`send`] and [`check_status`].
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// One or more credentials are blank, so no request was attempted.
    #[error("emailjs credentials are not configured")]
    NotConfigured,
    /// The request body could not be encoded as JSON.
    #[error("failed to encode emailjs request: {0}")]
    Encode(#[from] serde_json::Error),
    /// The request never produced a response (network failure, CORS, ...).
    #[error("emailjs request failed: {0}")]
    Transport(String),
    /// EmailJS answered with something other than `200`.
    #[error("emailjs rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Service/template selection plus the account's public key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Credentials {
    /// True when every field carries a non-blank value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// JSON body of `POST /api/v1.0/email/send`.
///
/// `template_params` is whatever the configured template expects; callers
/// pass their own serializable struct.
#[derive(Clone, Debug, Serialize)]
pub struct SendRequest<'a, P: Serialize> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS still calls the public key `user_id` on the wire.
    pub user_id: &'a str,
    pub template_params: &'a P,
}

impl<'a, P: Serialize> SendRequest<'a, P> {
    #[must_use]
    pub fn new(credentials: &'a Credentials, template_params: &'a P) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params,
        }
    }

    /// Encode the request body.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Encode`] if the template params fail to serialize.
    pub fn to_json(&self) -> Result<String, SendError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Map an HTTP status and response body onto the delivery result.
///
/// # Errors
///
/// Returns [`SendError::Rejected`] for every status except `200`.
pub fn check_status(status: u16, body: String) -> Result<(), SendError> {
    if status == STATUS_DELIVERED {
        Ok(())
    } else {
        Err(SendError::Rejected { status, body })
    }
}

/// Send a templated email through EmailJS.
///
/// No timeout is applied beyond whatever the browser's fetch enforces, and
/// the call cannot be cancelled once started.
///
/// # Errors
///
/// Returns [`SendError::NotConfigured`] for incomplete credentials, and the
/// transport/rejection variants when the request does not come back `200`.
#[cfg(feature = "browser")]
pub async fn send<P: Serialize>(credentials: &Credentials, template_params: &P) -> Result<(), SendError> {
    if !credentials.is_complete() {
        return Err(SendError::NotConfigured);
    }
    let body = SendRequest::new(credentials, template_params).to_json()?;
    let resp = gloo_net::http::Request::post(SEND_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| SendError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SendError::Transport(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    check_status(status, text)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
