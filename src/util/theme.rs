//! Theme preference persistence and resolution.
//!
//! A preference is `light`, `dark` or `system`. It is stored as a raw string
//! under one storage key and resolved to an applied theme (`light`/`dark`,
//! never `system`) using the OS color-scheme signal. The resolver only talks
//! to three seams so it can run against fakes in tests:
//!
//! - [`PreferenceStore`]: string key/value storage (`localStorage` in the browser)
//! - [`ColorScheme`]: the `prefers-color-scheme: dark` media query
//! - [`ThemeView`]: where the applied theme and the active selector land
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort. Unreadable storage reads as "no preference" and a
//! failed write is logged and dropped; private browsing keeps working with
//! per-page themes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme preference: {0:?}")]
pub struct ThemeParseError(pub String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// User-selected theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Selector order in the theme switcher.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// Theme actually applied to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppliedTheme {
    Light,
    Dark,
}

impl AppliedTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolve a preference against the OS dark-mode signal.
#[must_use]
pub fn resolve(pref: ThemePreference, prefers_dark: bool) -> AppliedTheme {
    match pref {
        ThemePreference::Light => AppliedTheme::Light,
        ThemePreference::Dark => AppliedTheme::Dark,
        ThemePreference::System if prefers_dark => AppliedTheme::Dark,
        ThemePreference::System => AppliedTheme::Light,
    }
}

pub trait PreferenceStore {
    /// Read the raw value for `key`; `None` when unset or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is missing or refuses the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub trait ColorScheme {
    /// True when the OS asks for a dark color scheme. Absent signal is `false`.
    fn prefers_dark(&self) -> bool;
}

pub trait ThemeView {
    /// Publish the applied theme (the `data-theme` attribute in the browser).
    fn set_applied_theme(&mut self, theme: AppliedTheme);

    /// Mark exactly one selector control active.
    fn set_active_theme(&mut self, pref: ThemePreference);
}

/// Theme resolver bound to one storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeResolver {
    storage_key: String,
}

impl ThemeResolver {
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self { storage_key: storage_key.into() }
    }

    /// Resolve `pref` and push the result to the view.
    pub fn apply_theme(&self, pref: ThemePreference, scheme: &impl ColorScheme, view: &mut impl ThemeView) -> AppliedTheme {
        let applied = resolve(pref, pref == ThemePreference::System && scheme.prefers_dark());
        view.set_applied_theme(applied);
        applied
    }

    /// Persist `pref`, logging (not propagating) storage failures.
    pub fn save_theme(&self, pref: ThemePreference, store: &mut impl PreferenceStore) {
        if let Err(err) = store.save(&self.storage_key, pref.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
    }

    /// Stored preference, or `System` when unset or unrecognized.
    pub fn saved_preference(&self, store: &impl PreferenceStore) -> ThemePreference {
        let Some(raw) = store.load(&self.storage_key) else {
            return ThemePreference::System;
        };
        raw.parse().unwrap_or_else(|err: ThemeParseError| {
            log::warn!("ignoring stored theme: {err}");
            ThemePreference::System
        })
    }

    /// Page-load path: apply the saved preference and mark its selector.
    pub fn load_saved_theme(
        &self,
        store: &impl PreferenceStore,
        scheme: &impl ColorScheme,
        view: &mut impl ThemeView,
    ) -> ThemePreference {
        let pref = self.saved_preference(store);
        self.apply_theme(pref, scheme, view);
        view.set_active_theme(pref);
        pref
    }

    /// Selector click: apply, persist, mark active.
    pub fn select_theme(
        &self,
        pref: ThemePreference,
        store: &mut impl PreferenceStore,
        scheme: &impl ColorScheme,
        view: &mut impl ThemeView,
    ) -> AppliedTheme {
        let applied = self.apply_theme(pref, scheme, view);
        self.save_theme(pref, store);
        view.set_active_theme(pref);
        applied
    }

    /// OS color-scheme change. Re-applies only when the stored preference
    /// follows the system; an explicit light/dark choice is left alone.
    pub fn system_scheme_changed(
        &self,
        store: &impl PreferenceStore,
        scheme: &impl ColorScheme,
        view: &mut impl ThemeView,
    ) -> Option<AppliedTheme> {
        if self.saved_preference(store) != ThemePreference::System {
            return None;
        }
        Some(self.apply_theme(ThemePreference::System, scheme, view))
    }
}
