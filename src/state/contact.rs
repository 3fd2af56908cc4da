#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or contact me directly.";

/// Fields of the contact form, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Status line shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Success,
    Failure,
}

impl FormMessage {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Failure => FAILURE_MESSAGE,
        }
    }

    /// CSS modifier (`form-message success` / `form-message error`).
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "form-message success",
            Self::Failure => "form-message error",
        }
    }
}

/// Contact modal state: visibility, fields, in-flight send, status line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub open: bool,
    pub form: ContactForm,
    pub sending: bool,
    pub message: Option<FormMessage>,
    /// Bumped on every open and close so timers scheduled for one showing
    /// of the modal do not act on the next.
    session: u32,
}

impl ContactState {
    pub fn open(&mut self) {
        self.open = true;
        self.session = self.session.wrapping_add(1);
    }

    #[must_use]
    pub fn session(&self) -> u32 {
        self.session
    }

    /// Hide the modal, clear fields and the status line. An in-flight send
    /// is not aborted; its result still lands in `message`.
    pub fn close(&mut self) {
        self.open = false;
        self.form = ContactForm::default();
        self.message = None;
        self.session = self.session.wrapping_add(1);
    }

    /// Delayed close after a successful send. Ignored once the modal has
    /// been closed or reopened since `session` was taken.
    pub fn close_if_session(&mut self, session: u32) -> bool {
        if !self.open || self.session != session {
            return false;
        }
        self.close();
        true
    }

    /// Delayed hide of the status line, scoped like [`Self::close_if_session`].
    pub fn hide_message_if_session(&mut self, session: u32) -> bool {
        if self.session != session || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    /// Enter the sending state and snapshot the fields to send. Returns
    /// `None` while a previous send is still in flight.
    pub fn begin_send(&mut self) -> Option<ContactForm> {
        if self.sending {
            return None;
        }
        self.sending = true;
        self.message = None;
        Some(self.form.clone())
    }

    /// Record the result of a send. Success clears the fields; failure keeps
    /// them so the visitor can retry.
    pub fn finish_send(&mut self, delivered: bool) {
        self.sending = false;
        if delivered {
            self.form = ContactForm::default();
            self.message = Some(FormMessage::Success);
        } else {
            self.message = Some(FormMessage::Failure);
        }
    }
}
