//! Debounce as "cancel the pending call, schedule a new one".
//!
//! A [`Debouncer`] owns at most one pending call. Scheduling a new call
//! cancels the one it replaces, so scroll/resize bursts only run the last
//! handler once the burst settles. In the browser the pending call is a
//! `gloo_timers::callback::Timeout`.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// A scheduled call that can be withdrawn before it fires.
pub trait Cancel {
    fn cancel(self);
}

#[cfg(feature = "csr")]
impl Cancel for gloo_timers::callback::Timeout {
    fn cancel(self) {
        // Returns the closure that never ran; nothing to do with it.
        let _ = gloo_timers::callback::Timeout::cancel(self);
    }
}

#[derive(Debug)]
pub struct Debouncer<T: Cancel> {
    pending: Option<T>,
}

impl<T: Cancel> Default for Debouncer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T: Cancel> Debouncer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending call with `call`, cancelling the previous one.
    pub fn schedule(&mut self, call: T) {
        if let Some(previous) = self.pending.replace(call) {
            previous.cancel();
        }
    }

    /// Withdraw the pending call, if any.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
    }

    /// True while a scheduled call is held. A call that already fired stays
    /// held until it is replaced or cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
