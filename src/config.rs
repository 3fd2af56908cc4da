//! Site configuration baked in at build time.
//!
//! Defaults reproduce the published site's behavior. Deployments override the
//! EmailJS account and a few tuning knobs through environment variables read
//! by the compiler (`option_env!`), since a static WASM bundle has no runtime
//! environment to consult.
//!
//! Optional build-time variables:
//! - `FOLIO_EMAILJS_SERVICE_ID`, `FOLIO_EMAILJS_TEMPLATE_ID`, `FOLIO_EMAILJS_PUBLIC_KEY`
//! - `FOLIO_CONTACT_RECIPIENT`
//! - `FOLIO_THEME_STORAGE_KEY`: default `portfolio-theme`
//! - `FOLIO_SCROLL_DEBOUNCE_MS`: default 10
//! - `FOLIO_SECTION_MARGIN`: default 50
//! - `FOLIO_TOP_THRESHOLD`: default 100

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use emailjs::Credentials;

use crate::util::sections::TrackerSettings;
use crate::util::typewriter::TypingOptions;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "portfolio-theme";
pub const DEFAULT_HOME_SECTION: &str = "hero";
pub const DEFAULT_TOP_THRESHOLD: f64 = 100.0;
pub const DEFAULT_SECTION_MARGIN: f64 = 50.0;
pub const DEFAULT_HEADER_HEIGHT: f64 = 80.0;
pub const DEFAULT_SCROLL_DEBOUNCE_MS: u32 = 10;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_PARALLAX_RATE: f64 = -0.5;

pub const DEFAULT_PHRASES: &[&str] = &["Front-end Developer", "React Enthusiast", "Problem Solver", "Lifelong Learner"];
pub const DEFAULT_PRELOAD_ASSETS: &[&str] = &["assets/images/hero-bg.jpg"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// One entry of the top navigation, pointing at a `section[id]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

impl NavEntry {
    fn new(id: &str, label: &str) -> Self {
        Self { id: id.to_owned(), label: label.to_owned() }
    }

    /// In-page anchor for this entry.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Contact modal settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    pub credentials: Credentials,
    pub recipient: String,
    pub focus_delay_ms: u32,
    pub close_delay_ms: u32,
    pub success_hide_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            recipient: String::new(),
            focus_delay_ms: 100,
            close_delay_ms: 2000,
            success_hide_ms: 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub title: String,
    pub theme_storage_key: String,
    pub nav: Vec<NavEntry>,
    pub tracker: TrackerSettings,
    pub fallback_header_height: f64,
    pub scroll_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub mobile_breakpoint: f64,
    pub parallax_rate: f64,
    pub phrases: Vec<String>,
    pub typing: TypingOptions,
    pub contact: ContactConfig,
    pub preload_assets: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            nav: vec![
                NavEntry::new(DEFAULT_HOME_SECTION, "Home"),
                NavEntry::new("about", "About"),
                NavEntry::new("skills", "Skills"),
                NavEntry::new("projects", "Projects"),
                NavEntry::new("contact", "Contact"),
            ],
            tracker: TrackerSettings {
                top_threshold: DEFAULT_TOP_THRESHOLD,
                margin: DEFAULT_SECTION_MARGIN,
                home_id: DEFAULT_HOME_SECTION.to_owned(),
            },
            fallback_header_height: DEFAULT_HEADER_HEIGHT,
            scroll_debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            parallax_rate: DEFAULT_PARALLAX_RATE,
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            typing: TypingOptions::default(),
            contact: ContactConfig::default(),
            preload_assets: DEFAULT_PRELOAD_ASSETS.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

impl SiteConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Overrides that fail to parse are returned beside the config; each one
    /// keeps its default and every other override still applies.
    pub fn from_build_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| {
            let raw = match key {
                "FOLIO_EMAILJS_SERVICE_ID" => option_env!("FOLIO_EMAILJS_SERVICE_ID"),
                "FOLIO_EMAILJS_TEMPLATE_ID" => option_env!("FOLIO_EMAILJS_TEMPLATE_ID"),
                "FOLIO_EMAILJS_PUBLIC_KEY" => option_env!("FOLIO_EMAILJS_PUBLIC_KEY"),
                "FOLIO_CONTACT_RECIPIENT" => option_env!("FOLIO_CONTACT_RECIPIENT"),
                "FOLIO_THEME_STORAGE_KEY" => option_env!("FOLIO_THEME_STORAGE_KEY"),
                "FOLIO_SCROLL_DEBOUNCE_MS" => option_env!("FOLIO_SCROLL_DEBOUNCE_MS"),
                "FOLIO_SECTION_MARGIN" => option_env!("FOLIO_SECTION_MARGIN"),
                "FOLIO_TOP_THRESHOLD" => option_env!("FOLIO_TOP_THRESHOLD"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }

    /// Build config by asking `lookup` for each known variable.
    ///
    /// Blank values count as unset. A numeric override that does not parse
    /// leaves that one setting at its default and is reported in the
    /// returned list.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let mut cfg = Self::default();
        let mut errors = Vec::new();

        if let Some(v) = get("FOLIO_EMAILJS_SERVICE_ID") {
            cfg.contact.credentials.service_id = v;
        }
        if let Some(v) = get("FOLIO_EMAILJS_TEMPLATE_ID") {
            cfg.contact.credentials.template_id = v;
        }
        if let Some(v) = get("FOLIO_EMAILJS_PUBLIC_KEY") {
            cfg.contact.credentials.public_key = v;
        }
        if let Some(v) = get("FOLIO_CONTACT_RECIPIENT") {
            cfg.contact.recipient = v;
        }
        if let Some(v) = get("FOLIO_THEME_STORAGE_KEY") {
            cfg.theme_storage_key = v;
        }
        if let Some(v) = get("FOLIO_SCROLL_DEBOUNCE_MS") {
            apply(&mut cfg.scroll_debounce_ms, parse_u32("FOLIO_SCROLL_DEBOUNCE_MS", v), &mut errors);
        }
        if let Some(v) = get("FOLIO_SECTION_MARGIN") {
            apply(&mut cfg.tracker.margin, parse_f64("FOLIO_SECTION_MARGIN", v), &mut errors);
        }
        if let Some(v) = get("FOLIO_TOP_THRESHOLD") {
            apply(&mut cfg.tracker.top_threshold, parse_f64("FOLIO_TOP_THRESHOLD", v), &mut errors);
        }

        (cfg, errors)
    }
}

fn apply<T>(slot: &mut T, parsed: Result<T, ConfigError>, errors: &mut Vec<ConfigError>) {
    match parsed {
        Ok(v) => *slot = v,
        Err(err) => errors.push(err),
    }
}

fn parse_u32(key: &'static str, value: String) -> Result<u32, ConfigError> {
    value.parse::<u32>().map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_f64(key: &'static str, value: String) -> Result<f64, ConfigError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
