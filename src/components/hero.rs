//! Hero banner with the typewriter tagline and parallax background.

use leptos::prelude::*;

use crate::components::contact_modal::open_contact;
use crate::state::ui::AppContext;
use crate::util::parallax::translate_y;
#[cfg(feature = "csr")]
use crate::util::{
    browser::{self, DomError},
    parallax::{FrameGate, parallax_enabled, parallax_offset},
    typewriter::Typewriter,
};

/// Start the typewriter loop. No phrases means no loop.
///
/// # Errors
///
/// Never fails today; returns `Result` to match the other wiring hooks.
#[cfg(feature = "csr")]
pub fn wire_typewriter(ctx: AppContext) -> Result<(), DomError> {
    use std::time::Duration;

    use gloo_timers::future::sleep;

    let (phrases, options) = ctx.config.with_value(|c| (c.phrases.clone(), c.typing));
    let Some(mut typewriter) = Typewriter::new(phrases, options) else {
        log::debug!("typewriter: no phrases configured");
        return Ok(());
    };
    let ui = ctx.ui;
    leptos::task::spawn_local(async move {
        sleep(Duration::from_millis(u64::from(options.start_delay_ms))).await;
        loop {
            let frame = typewriter.step();
            ui.update(|u| u.typed_text = frame.text);
            sleep(Duration::from_millis(u64::from(frame.delay_ms))).await;
        }
    });
    Ok(())
}

/// Shift the hero background while the first screen is in view. Desktop
/// widths only; the decision is made once at startup.
///
/// # Errors
///
/// Returns [`DomError`] when the scroll listener cannot be attached.
#[cfg(feature = "csr")]
pub fn wire_parallax(ctx: AppContext) -> Result<(), DomError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    let (breakpoint, rate) = ctx.config.with_value(|c| (c.mobile_breakpoint, c.parallax_rate));
    if !parallax_enabled(browser::viewport_width(), breakpoint) {
        log::debug!("parallax: disabled below {breakpoint}px");
        return Ok(());
    }

    let ui = ctx.ui;
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    browser::window_listener("scroll", move || {
        if !gate.borrow_mut().request() {
            return;
        }
        let frame_gate = Rc::clone(&gate);
        let requested = browser::request_frame(move || {
            if let Some(offset) = parallax_offset(browser::scroll_y(), browser::viewport_height(), rate) {
                ui.update(|u| u.hero_offset = Some(offset));
            }
            frame_gate.borrow_mut().complete();
        });
        if let Err(err) = requested {
            log::warn!("parallax: frame request failed: {err}");
            gate.borrow_mut().complete();
        }
    })
}

/// First screen of the page.
#[component]
pub fn Hero() -> impl IntoView {
    let ctx = AppContext::expect();
    let ui = ctx.ui;
    let (home_id, title) = ctx.config.with_value(|c| (c.tracker.home_id.clone(), c.title.clone()));

    let typed = move || ui.with(|u| u.typed_text.clone());
    let transform = move || ui.with(|u| u.hero_offset.map(translate_y).unwrap_or_default());

    view! {
        <section id=home_id class="hero">
            <div class="hero-content">
                <p class="hero-greeting">"Hi, welcome to"</p>
                <h1 class="hero-title">{title}</h1>
                <p class="hero-subtitle">
                    <span class="typing-text">{typed}</span>
                    <span class="typing-cursor" aria-hidden="true">"|"</span>
                </p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"View My Work"</a>
                    <button
                        id="contact-btn"
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| open_contact(ctx)
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
            <div class="hero-image" style:transform=transform>
                <img src="assets/images/hero-bg.jpg" alt="" loading="lazy" class="lazy"/>
            </div>
        </section>
    }
}
