//! Browser adapters (csr builds only).
//!
//! Thin `web-sys` glue that feeds the pure modules in `util` from the live
//! document: localStorage and `matchMedia` for the theme resolver, section
//! geometry for the tracker, listeners and timers for everything else.
//!
//! ERROR HANDLING
//! ==============
//! Reads degrade to defaults (no window → scroll offset 0, no header →
//! fallback height, missing element → `None`). Only listener/observer
//! registration returns [`DomError`], so the app can report which behavior
//! failed to start and carry on with the rest.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::util::debounce::Debouncer;
use crate::util::lazy_images::{LAZY_CLASS, LAZY_SELECTOR, lazy_source};
use crate::util::sections::SectionBox;
use crate::util::theme::{AppliedTheme, ColorScheme, PreferenceStore, StorageError};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{0} is not supported by this browser")]
    Unsupported(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// The browser window.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] outside a window context (workers, tests).
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// The page document.
///
/// # Errors
///
/// Returns [`DomError`] when there is no window or no document.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

// =============================================================================
// THEME
// =============================================================================

/// `localStorage`, when the browser lets us have it.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(DomError::from(e).to_string()))
    }
}

/// The OS color-scheme media query.
pub struct MediaScheme;

impl ColorScheme for MediaScheme {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
}

/// Call `f` whenever the OS color scheme flips. Lives for the page.
///
/// # Errors
///
/// Returns [`DomError`] when `matchMedia` is missing or rejects the listener.
pub fn on_color_scheme_change(f: impl FnMut() + 'static) -> Result<(), DomError> {
    let mq = window()?
        .match_media(DARK_SCHEME_QUERY)?
        .ok_or(DomError::Unsupported("matchMedia"))?;
    let cb = Closure::<dyn FnMut()>::new(f);
    mq.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Write `data-theme` on `<html>`.
pub fn set_root_theme(theme: AppliedTheme) {
    if let Ok(doc) = document()
        && let Some(root) = doc.document_element()
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = document().ok().and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Rendered height of the page `<header>`, or `fallback` when it is missing
/// or collapsed.
pub fn header_height(fallback: f64) -> f64 {
    document()
        .ok()
        .and_then(|d| d.query_selector("header").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .filter(|h| *h > 0.0)
        .unwrap_or(fallback)
}

/// Geometry of every `section[id]`, in document order.
pub fn measure_sections() -> Vec<SectionBox> {
    let Some(nodes) = document()
        .ok()
        .and_then(|d| d.query_selector_all("section[id]").ok())
    else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBox::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
        .collect()
}

pub fn element_offset_top(id: &str) -> Option<f64> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|el| f64::from(el.offset_top()))
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(w) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn focus_first(selector: &str) {
    if let Some(el) = document()
        .ok()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// True when `target` sits inside any `<nav>`.
pub fn is_inside_nav(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("nav").ok().flatten())
        .is_some()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

// =============================================================================
// EVENTS / TIMERS
// =============================================================================

/// Run `f` once after `ms`. Not cancellable.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// Run `f` on the next animation frame.
///
/// # Errors
///
/// Returns [`DomError`] when the frame could not be requested.
pub fn request_frame(f: impl FnOnce() + 'static) -> Result<(), DomError> {
    let cb = Closure::once_into_js(move |_ts: f64| f());
    window()?.request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}

/// Passive page-lifetime listener on `window`.
///
/// # Errors
///
/// Returns [`DomError`] when the listener cannot be registered.
pub fn window_listener(event: &str, f: impl FnMut() + 'static) -> Result<(), DomError> {
    let cb = Closure::<dyn FnMut()>::new(f);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    window()?.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

/// Like [`window_listener`], but `f` runs `delay_ms` after the last event of
/// a burst. Each event cancels the pending run before scheduling a new one.
///
/// # Errors
///
/// Returns [`DomError`] when the listener cannot be registered.
pub fn debounced_window_listener(event: &str, delay_ms: u32, f: impl Fn() + 'static) -> Result<(), DomError> {
    let f = Rc::new(f);
    let pending = Rc::new(RefCell::new(Debouncer::<Timeout>::new()));
    window_listener(event, move || {
        let f = Rc::clone(&f);
        pending.borrow_mut().schedule(Timeout::new(delay_ms, move || f()));
    })
}

/// Page-lifetime listener on `document`.
///
/// # Errors
///
/// Returns [`DomError`] when the listener cannot be registered.
pub fn document_listener(event: &str, f: impl FnMut(web_sys::Event) + 'static) -> Result<(), DomError> {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(f);
    document()?.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

// =============================================================================
// LAZY IMAGES
// =============================================================================

fn reveal_image(img: &Element) {
    let src = img.get_attribute("src").unwrap_or_default();
    let data_src = img.get_attribute("data-src");
    let next = lazy_source(data_src.as_deref(), &src);
    if next != src {
        let _ = img.set_attribute("src", next);
    }
    let _ = img.class_list().remove_1(LAZY_CLASS);
}

/// Swap in `data-src` for lazy images as they scroll into view. Returns how
/// many images are being observed; 0 when `IntersectionObserver` is missing.
///
/// # Errors
///
/// Returns [`DomError`] when the observer cannot be created.
pub fn observe_lazy_images() -> Result<u32, DomError> {
    let win = window()?;
    if !js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        log::debug!("IntersectionObserver missing, lazy images left to the browser");
        return Ok(0);
    }
    let images = document()?.query_selector_all(LAZY_SELECTOR)?;
    if images.length() == 0 {
        return Ok(0);
    }

    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let img = entry.target();
                reveal_image(&img);
                observer.unobserve(&img);
            }
        },
    );
    let observer = web_sys::IntersectionObserver::new(cb.as_ref().unchecked_ref())?;
    cb.forget();

    let mut observed = 0;
    for i in 0..images.length() {
        if let Some(node) = images.item(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            observer.observe(&el);
            observed += 1;
        }
    }
    Ok(observed)
}
