#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::contact::ContactState;
use crate::util::nav::MenuState;
use crate::util::sections::SectionView;
use crate::util::theme::{AppliedTheme, ThemePreference, ThemeView};

/// Page-level UI state: theme selection, active nav entry, menu, effects.
///
/// This is also the view the theme resolver and section tracker write to;
/// the components render from it and an effect mirrors `applied_theme`
/// onto `<html data-theme>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: ThemePreference,
    pub applied_theme: Option<AppliedTheme>,
    pub active_section: Option<String>,
    pub menu: MenuState,
    pub typed_text: String,
    pub hero_offset: Option<f64>,
    pub loaded: bool,
}

impl UiState {
    /// Body scrolling is disabled while the mobile menu or a modal is open.
    #[must_use]
    pub fn scroll_locked(&self, modal_open: bool) -> bool {
        self.menu.open || modal_open
    }

    #[must_use]
    pub fn is_active_section(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}

impl ThemeView for UiState {
    fn set_applied_theme(&mut self, theme: AppliedTheme) {
        self.applied_theme = Some(theme);
    }

    fn set_active_theme(&mut self, pref: ThemePreference) {
        self.theme = pref;
    }
}

impl SectionView for UiState {
    fn set_active_section(&mut self, id: &str) {
        if self.active_section.as_deref() != Some(id) {
            self.active_section = Some(id.to_owned());
        }
    }

    fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }
}

/// Application context built once at startup and shared through Leptos
/// context for the lifetime of the page.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<SiteConfig>,
    pub ui: RwSignal<UiState>,
    pub contact: RwSignal<ContactState>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            ui: RwSignal::new(UiState::default()),
            contact: RwSignal::new(ContactState::default()),
        }
    }

    /// Fetch the context provided by `App`.
    ///
    /// # Panics
    ///
    /// Panics when called outside the `App` component tree.
    #[must_use]
    pub fn expect() -> Self {
        expect_context::<Self>()
    }
}
