//! # folio
//!
//! Leptos + WASM client for a single-page portfolio site: theme selection
//! that follows the OS, scroll-tracked navigation, a typewriter hero, and an
//! EmailJS-backed contact form.
//!
//! Browser code sits behind the `csr` feature. Without it the crate builds
//! natively, so the behavior rules in `util` and `state` are tested with a
//! plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    leptos::mount::mount_to_body(app::App);
}
