//! Utility helpers shared across the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each behavior keeps its rules in a pure module here (testable with plain
//! `cargo test`); `browser` holds the csr-only adapters that feed those rules
//! from the live document.

#[cfg(feature = "csr")]
pub mod browser;
pub mod debounce;
pub mod lazy_images;
pub mod nav;
pub mod parallax;
pub mod sections;
pub mod theme;
pub mod typewriter;
