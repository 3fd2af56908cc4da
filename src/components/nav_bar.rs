//! Fixed page header: logo, section links, theme selector, mobile toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Link highlighting reads `UiState::active_section`, which the section
//! tracker (wired here) keeps current from scroll position. The mobile menu
//! collapses on link click, on a click outside the `<nav>`, and when a
//! settled resize widens the viewport past the breakpoint.

use leptos::prelude::*;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::state::ui::AppContext;
#[cfg(feature = "csr")]
use crate::util::{
    browser::{self, DomError},
    nav::{anchor_target, scroll_target},
    sections::SectionTracker,
};

/// Collapse the mobile menu on outside clicks and on widening resizes.
///
/// # Errors
///
/// Returns [`DomError`] when a listener cannot be attached.
#[cfg(feature = "csr")]
pub fn wire(ctx: AppContext) -> Result<(), DomError> {
    let ui = ctx.ui;
    let (breakpoint, resize_ms) = ctx.config.with_value(|c| (c.mobile_breakpoint, c.resize_debounce_ms));

    browser::document_listener("click", move |ev| {
        if !ui.with_untracked(|u| u.menu.open) || browser::is_inside_nav(ev.target()) {
            return;
        }
        ui.maybe_update(|u| u.menu.close_for_width(browser::viewport_width(), breakpoint));
    })?;

    browser::debounced_window_listener("resize", resize_ms, move || {
        ui.maybe_update(|u| u.menu.close_if_widened(browser::viewport_width(), breakpoint));
    })
}

/// Keep the active nav link in step with scroll position.
///
/// Runs the top-of-page guard immediately and again after 100ms, then a full
/// selection at 200ms once layout has settled.
///
/// # Errors
///
/// Returns [`DomError`] when the scroll listener cannot be attached.
#[cfg(feature = "csr")]
pub fn wire_section_tracker(ctx: AppContext) -> Result<(), DomError> {
    let ui = ctx.ui;
    let (tracker, fallback_header, debounce_ms) = ctx.config.with_value(|c| {
        (SectionTracker::new(c.tracker.clone()), c.fallback_header_height, c.scroll_debounce_ms)
    });

    let track = {
        let tracker = tracker.clone();
        move || {
            let sections = browser::measure_sections();
            let header = browser::header_height(fallback_header);
            let scroll = browser::scroll_y();
            ui.maybe_update(|u| tracker.update(scroll, header, &sections, u).is_some());
        }
    };
    browser::debounced_window_listener("scroll", debounce_ms, track.clone())?;

    let ensure_home = move || {
        ui.maybe_update(|u| tracker.ensure_home_active(browser::scroll_y(), u));
    };
    ensure_home();
    browser::after(100, ensure_home);
    browser::after(200, track);
    Ok(())
}

/// Site header with section navigation.
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = AppContext::expect();
    let ui = ctx.ui;
    let (title, entries, home_href) = ctx.config.with_value(|c| {
        let home = c.nav.first().map_or_else(|| format!("#{}", c.tracker.home_id), |e| e.href());
        (c.title.clone(), c.nav.clone(), home)
    });

    let menu_open = move || ui.with(|u| u.menu.open);

    // In-page links: close the mobile menu, then smooth-scroll below the
    // fixed header. Targets that do not exist are left to the browser.
    let on_link = move |ev: leptos::ev::MouseEvent, href: String| {
        #[cfg(feature = "csr")]
        {
            let (breakpoint, fallback_header) = ctx.config.with_value(|c| (c.mobile_breakpoint, c.fallback_header_height));
            ui.maybe_update(|u| u.menu.close_for_width(browser::viewport_width(), breakpoint));
            let Some(top) = anchor_target(&href).and_then(browser::element_offset_top) else {
                return;
            };
            ev.prevent_default();
            browser::smooth_scroll_to(scroll_target(top, browser::header_height(fallback_header)));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, href, ctx);
        }
    };

    view! {
        <header class="header">
            <nav class="nav-container">
                <a
                    href=home_href.clone()
                    class="logo"
                    on:click=move |ev| on_link(ev, home_href.clone())
                >
                    {title}
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=menu_open>
                    {entries
                        .into_iter()
                        .map(|entry| {
                            let href = entry.href();
                            let id = entry.id;
                            let on_click_href = href.clone();
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-link"
                                        class:active=move || ui.with(|u| u.is_active_section(&id))
                                        on:click=move |ev| on_link(ev, on_click_href.clone())
                                    >
                                        {entry.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <ThemeSwitcher/>
                <button
                    id="mobile-menu-toggle"
                    type="button"
                    class="mobile-menu-toggle"
                    class:active=menu_open
                    aria-controls="nav-menu"
                    aria-expanded=move || menu_open().to_string()
                    aria-label="Toggle navigation"
                    on:click=move |_| ui.update(|u| u.menu.toggle())
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </nav>
        </header>
    }
}
