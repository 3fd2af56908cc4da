use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_published_site() {
    let cfg = SiteConfig::from_lookup(|_| None).0;
    assert_eq!(cfg.theme_storage_key, "portfolio-theme");
    assert!((cfg.tracker.top_threshold - 100.0).abs() < f64::EPSILON);
    assert!((cfg.tracker.margin - 50.0).abs() < f64::EPSILON);
    assert_eq!(cfg.tracker.home_id, "hero");
    assert!((cfg.fallback_header_height - 80.0).abs() < f64::EPSILON);
    assert_eq!(cfg.scroll_debounce_ms, 10);
    assert_eq!(cfg.resize_debounce_ms, 250);
    assert_eq!(cfg.phrases.len(), 4);
    assert_eq!(cfg.contact.close_delay_ms, 2000);
    assert_eq!(cfg.contact.success_hide_ms, 5000);
    assert!(!cfg.contact.credentials.is_complete());
}

#[test]
fn first_nav_entry_is_home_section() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.nav[0].id, cfg.tracker.home_id);
    assert_eq!(cfg.nav[0].href(), "#hero");
}

#[test]
fn overrides_replace_defaults() {
    let (cfg, errors) = SiteConfig::from_lookup(lookup_from(&[
        ("FOLIO_EMAILJS_SERVICE_ID", "svc"),
        ("FOLIO_EMAILJS_TEMPLATE_ID", "tpl"),
        ("FOLIO_EMAILJS_PUBLIC_KEY", "pk"),
        ("FOLIO_CONTACT_RECIPIENT", "me@example.test"),
        ("FOLIO_THEME_STORAGE_KEY", "site-theme"),
        ("FOLIO_SCROLL_DEBOUNCE_MS", "25"),
        ("FOLIO_SECTION_MARGIN", "20.5"),
        ("FOLIO_TOP_THRESHOLD", " 60 "),
    ]));
    assert!(errors.is_empty());

    assert!(cfg.contact.credentials.is_complete());
    assert_eq!(cfg.contact.recipient, "me@example.test");
    assert_eq!(cfg.theme_storage_key, "site-theme");
    assert_eq!(cfg.scroll_debounce_ms, 25);
    assert!((cfg.tracker.margin - 20.5).abs() < f64::EPSILON);
    assert!((cfg.tracker.top_threshold - 60.0).abs() < f64::EPSILON);
}

#[test]
fn blank_override_is_ignored() {
    let (cfg, errors) = SiteConfig::from_lookup(lookup_from(&[("FOLIO_THEME_STORAGE_KEY", "  ")]));
    assert!(errors.is_empty());
    assert_eq!(cfg.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
}

#[test]
fn bad_number_reports_key_and_keeps_default() {
    let (cfg, errors) = SiteConfig::from_lookup(lookup_from(&[("FOLIO_SCROLL_DEBOUNCE_MS", "soon")]));
    assert_eq!(
        errors,
        vec![ConfigError::Invalid { key: "FOLIO_SCROLL_DEBOUNCE_MS", value: "soon".to_owned() }]
    );
    assert!(errors[0].to_string().contains("FOLIO_SCROLL_DEBOUNCE_MS"));
    assert_eq!(cfg.scroll_debounce_ms, DEFAULT_SCROLL_DEBOUNCE_MS);
}

#[test]
fn negative_margin_is_rejected() {
    let (cfg, errors) = SiteConfig::from_lookup(lookup_from(&[("FOLIO_SECTION_MARGIN", "-5")]));
    assert!(matches!(errors.as_slice(), [ConfigError::Invalid { key: "FOLIO_SECTION_MARGIN", .. }]));
    assert!((cfg.tracker.margin - DEFAULT_SECTION_MARGIN).abs() < f64::EPSILON);
}

#[test]
fn bad_setting_does_not_discard_valid_credentials() {
    let (cfg, errors) = SiteConfig::from_lookup(lookup_from(&[
        ("FOLIO_EMAILJS_SERVICE_ID", "svc"),
        ("FOLIO_EMAILJS_TEMPLATE_ID", "tpl"),
        ("FOLIO_EMAILJS_PUBLIC_KEY", "pk"),
        ("FOLIO_CONTACT_RECIPIENT", "me@example.test"),
        ("FOLIO_SECTION_MARGIN", "50px"),
        ("FOLIO_TOP_THRESHOLD", "75"),
    ]));

    assert_eq!(errors.len(), 1);
    assert!(cfg.contact.credentials.is_complete());
    assert_eq!(cfg.contact.recipient, "me@example.test");
    assert!((cfg.tracker.margin - DEFAULT_SECTION_MARGIN).abs() < f64::EPSILON);
    assert!((cfg.tracker.top_threshold - 75.0).abs() < f64::EPSILON);
}
