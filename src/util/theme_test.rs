use std::collections::HashMap;

use super::*;

// =============================================================
// Fakes
// =============================================================

#[derive(Default)]
struct MemoryStore {
    values: HashMap<String, String>,
    unavailable: bool,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

struct Scheme(bool);

impl ColorScheme for Scheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[derive(Default)]
struct RecordingView {
    applied: Vec<AppliedTheme>,
    active: Option<ThemePreference>,
}

impl ThemeView for RecordingView {
    fn set_applied_theme(&mut self, theme: AppliedTheme) {
        self.applied.push(theme);
    }

    fn set_active_theme(&mut self, pref: ThemePreference) {
        self.active = Some(pref);
    }
}

fn resolver() -> ThemeResolver {
    ThemeResolver::new("portfolio-theme")
}

// =============================================================
// Parsing / resolution
// =============================================================

#[test]
fn preference_round_trips_through_str() {
    for pref in ThemePreference::ALL {
        assert_eq!(pref.as_str().parse::<ThemePreference>(), Ok(pref));
        assert_eq!(pref.to_string(), pref.as_str());
    }
}

#[test]
fn unknown_preference_fails_to_parse() {
    assert_eq!("sepia".parse::<ThemePreference>(), Err(ThemeParseError("sepia".to_owned())));
    assert!("Dark".parse::<ThemePreference>().is_err());
}

#[test]
fn applied_theme_is_never_system() {
    for pref in ThemePreference::ALL {
        for dark in [false, true] {
            let applied = resolve(pref, dark);
            assert!(matches!(applied.as_str(), "light" | "dark"));
        }
    }
}

#[test]
fn explicit_preference_ignores_os_signal() {
    assert_eq!(resolve(ThemePreference::Light, true), AppliedTheme::Light);
    assert_eq!(resolve(ThemePreference::Dark, false), AppliedTheme::Dark);
}

#[test]
fn system_preference_follows_os_signal() {
    assert_eq!(resolve(ThemePreference::System, true), AppliedTheme::Dark);
    assert_eq!(resolve(ThemePreference::System, false), AppliedTheme::Light);
}

// =============================================================
// apply_theme
// =============================================================

#[test]
fn apply_theme_is_idempotent() {
    let mut view = RecordingView::default();
    let scheme = Scheme(true);
    let first = resolver().apply_theme(ThemePreference::System, &scheme, &mut view);
    let second = resolver().apply_theme(ThemePreference::System, &scheme, &mut view);
    assert_eq!(first, second);
    assert_eq!(view.applied, vec![AppliedTheme::Dark, AppliedTheme::Dark]);
}

#[test]
fn apply_theme_does_not_touch_active_selector() {
    let mut view = RecordingView::default();
    resolver().apply_theme(ThemePreference::Dark, &Scheme(false), &mut view);
    assert_eq!(view.active, None);
}

// =============================================================
// save / load
// =============================================================

#[test]
fn save_then_load_matches_apply() {
    for pref in ThemePreference::ALL {
        let mut store = MemoryStore::default();
        let scheme = Scheme(true);
        resolver().save_theme(pref, &mut store);

        let mut loaded = RecordingView::default();
        let got = resolver().load_saved_theme(&store, &scheme, &mut loaded);

        let mut direct = RecordingView::default();
        let expected = resolver().apply_theme(pref, &scheme, &mut direct);

        assert_eq!(got, pref);
        assert_eq!(loaded.applied, vec![expected]);
        assert_eq!(loaded.active, Some(pref));
    }
}

#[test]
fn save_stores_raw_string_under_key() {
    let mut store = MemoryStore::default();
    resolver().save_theme(ThemePreference::Dark, &mut store);
    assert_eq!(store.values.get("portfolio-theme").map(String::as_str), Some("dark"));
}

#[test]
fn save_overwrites_previous_value() {
    let mut store = MemoryStore::default();
    resolver().save_theme(ThemePreference::Dark, &mut store);
    resolver().save_theme(ThemePreference::Light, &mut store);
    assert_eq!(store.values.len(), 1);
    assert_eq!(resolver().saved_preference(&store), ThemePreference::Light);
}

#[test]
fn load_without_saved_value_behaves_like_system() {
    let store = MemoryStore::default();
    for dark in [false, true] {
        let mut loaded = RecordingView::default();
        let pref = resolver().load_saved_theme(&store, &Scheme(dark), &mut loaded);

        let mut direct = RecordingView::default();
        resolver().apply_theme(ThemePreference::System, &Scheme(dark), &mut direct);

        assert_eq!(pref, ThemePreference::System);
        assert_eq!(loaded.applied, direct.applied);
        assert_eq!(loaded.active, Some(ThemePreference::System));
    }
}

#[test]
fn garbage_in_storage_falls_back_to_system() {
    let mut store = MemoryStore::default();
    store.values.insert("portfolio-theme".to_owned(), "neon".to_owned());
    assert_eq!(resolver().saved_preference(&store), ThemePreference::System);
}

#[test]
fn unavailable_storage_degrades_silently() {
    let mut store = MemoryStore { unavailable: true, ..MemoryStore::default() };
    let mut view = RecordingView::default();
    let applied = resolver().select_theme(ThemePreference::Dark, &mut store, &Scheme(false), &mut view);

    assert_eq!(applied, AppliedTheme::Dark);
    assert_eq!(view.active, Some(ThemePreference::Dark));
    assert_eq!(resolver().saved_preference(&store), ThemePreference::System);
}

#[test]
fn select_theme_applies_saves_and_marks_active() {
    let mut store = MemoryStore::default();
    let mut view = RecordingView::default();
    resolver().select_theme(ThemePreference::Light, &mut store, &Scheme(true), &mut view);

    assert_eq!(view.applied, vec![AppliedTheme::Light]);
    assert_eq!(view.active, Some(ThemePreference::Light));
    assert_eq!(resolver().saved_preference(&store), ThemePreference::Light);
}

// =============================================================
// System scheme changes
// =============================================================

#[test]
fn os_change_reapplies_when_following_system() {
    let mut store = MemoryStore::default();
    resolver().save_theme(ThemePreference::System, &mut store);
    let mut view = RecordingView::default();

    let applied = resolver().system_scheme_changed(&store, &Scheme(true), &mut view);
    assert_eq!(applied, Some(AppliedTheme::Dark));

    let applied = resolver().system_scheme_changed(&store, &Scheme(false), &mut view);
    assert_eq!(applied, Some(AppliedTheme::Light));
}

#[test]
fn os_change_reapplies_when_unset() {
    let store = MemoryStore::default();
    let mut view = RecordingView::default();
    assert_eq!(
        resolver().system_scheme_changed(&store, &Scheme(true), &mut view),
        Some(AppliedTheme::Dark)
    );
}

#[test]
fn os_change_ignored_for_explicit_choice() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        let mut store = MemoryStore::default();
        resolver().save_theme(pref, &mut store);
        let mut view = RecordingView::default();

        assert_eq!(resolver().system_scheme_changed(&store, &Scheme(true), &mut view), None);
        assert!(view.applied.is_empty());
    }
}
