//! Typewriter text effect.
//!
//! Types a phrase one character at a time, pauses, deletes it, then moves on
//! to the next phrase and loops. [`Typewriter::step`] advances one tick and
//! says how long to wait before the next; the hero component drives it with
//! `gloo_timers::future::sleep`.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingOptions {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Hold on a fully typed phrase.
    pub pause_ms: u32,
    /// Gap between a deleted phrase and the next one.
    pub next_ms: u32,
    pub start_delay_ms: u32,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self { type_ms: 100, delete_ms: 50, pause_ms: 2000, next_ms: 500, start_delay_ms: 1500 }
    }
}

/// Text to show and the delay before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    options: TypingOptions,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    /// `None` when there is nothing to type.
    #[must_use]
    pub fn new(phrases: Vec<String>, options: TypingOptions) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, options, phrase_index: 0, char_index: 0, deleting: false })
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn step(&mut self) -> Frame {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = phrase.chars().take(self.char_index).collect();

        let mut delay_ms = if self.deleting { self.options.delete_ms } else { self.options.type_ms };
        if !self.deleting && self.char_index == len {
            delay_ms = self.options.pause_ms;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = self.options.next_ms;
        }

        Frame { text, delay_ms }
    }
}
