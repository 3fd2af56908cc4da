//! Light / dark / system theme selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! The buttons only reflect `UiState::theme`; resolving, persisting, and
//! following the OS scheme all go through `ThemeResolver` so the page-load
//! path and the click path cannot drift apart.

use leptos::prelude::*;

use crate::state::ui::AppContext;
use crate::util::theme::ThemePreference;
#[cfg(feature = "csr")]
use crate::util::{
    browser::{self, DomError, LocalStore, MediaScheme},
    theme::ThemeResolver,
};

#[cfg(feature = "csr")]
fn resolver(ctx: AppContext) -> ThemeResolver {
    ThemeResolver::new(ctx.config.with_value(|c| c.theme_storage_key.clone()))
}

/// Apply the saved preference and follow OS scheme changes while it is
/// `system`.
///
/// # Errors
///
/// Returns [`DomError`] when the color-scheme listener cannot be attached.
/// The saved theme is applied before that, so the page is themed either way.
#[cfg(feature = "csr")]
pub fn wire(ctx: AppContext) -> Result<(), DomError> {
    let resolver = resolver(ctx);
    let pref = ctx.ui.try_update(|ui| resolver.load_saved_theme(&LocalStore, &MediaScheme, ui));
    log::debug!("theme: loaded preference {pref:?}");

    let ui = ctx.ui;
    browser::on_color_scheme_change(move || {
        ui.update(|state| {
            if let Some(applied) = resolver.system_scheme_changed(&LocalStore, &MediaScheme, state) {
                log::debug!("theme: system scheme now {}", applied.as_str());
            }
        });
    })
}

/// Three-button theme selector.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ctx = AppContext::expect();
    let ui = ctx.ui;

    let select = move |pref: ThemePreference| {
        #[cfg(feature = "csr")]
        {
            let resolver = resolver(ctx);
            ui.update(|state| {
                resolver.select_theme(pref, &mut LocalStore, &MediaScheme, state);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, pref);
        }
    };

    view! {
        <div class="theme-switcher" role="group" aria-label="Color theme">
            {ThemePreference::ALL
                .into_iter()
                .map(|pref| {
                    let is_active = move || ui.with(|u| u.theme == pref);
                    view! {
                        <button
                            type="button"
                            class="theme-btn"
                            class:active=is_active
                            data-theme=pref.as_str()
                            aria-pressed=move || is_active().to_string()
                            title=pref.label()
                            on:click=move |_| select(pref)
                        >
                            {pref.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
