//! Lazy image sources and critical-asset preloads.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

pub const LAZY_SELECTOR: &str = "img[loading=\"lazy\"]";
pub const LAZY_CLASS: &str = "lazy";

/// Source to load once an image scrolls into view: a non-empty `data-src`
/// wins, otherwise the current `src` stays.
#[must_use]
pub fn lazy_source<'a>(data_src: Option<&'a str>, src: &'a str) -> &'a str {
    data_src.filter(|s| !s.is_empty()).unwrap_or(src)
}

/// Deduplicated, non-blank preload hrefs in their configured order.
#[must_use]
pub fn preload_hrefs(assets: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(assets.len());
    for asset in assets.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
        if !out.iter().any(|seen| seen == asset) {
            out.push(asset.to_owned());
        }
    }
    out
}
