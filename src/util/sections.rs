//! Active-section tracking for the top navigation.
//!
//! Maps the vertical scroll offset onto the `section[id]` whose band contains
//! it. A section's band starts `header_height + margin` above its top edge
//! and is as tall as the section:
//!
//! ```text
//! [top - header - margin, top - header - margin + height)
//! ```
//!
//! Near the top of the page the home entry wins regardless of geometry, since
//! the hero section usually starts at 0 and would never match on its own.
//! When nothing matches, the previously active entry stays active.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Live geometry of one labeled section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let start = self.top - offset;
        scroll_y >= start && scroll_y < start + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerSettings {
    /// Scroll offsets below this force the home entry.
    pub top_threshold: f64,
    /// Extra lead, on top of the header height, before a section activates.
    pub margin: f64,
    /// Section id of the home/hero entry.
    pub home_id: String,
}

/// Outcome of one tracker run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    Home,
    Section(&'a str),
    Unchanged,
}

pub trait SectionView {
    /// Clear the marker from every entry, then set it on `id`.
    fn set_active_section(&mut self, id: &str);

    fn active_section(&self) -> Option<&str>;
}

/// Pick the section for `scroll_y`. The last matching section in document
/// order wins when bands overlap.
#[must_use]
pub fn select_section<'a>(
    scroll_y: f64,
    header_height: f64,
    sections: &'a [SectionBox],
    settings: &TrackerSettings,
) -> Selection<'a> {
    if scroll_y < settings.top_threshold {
        return Selection::Home;
    }
    let offset = header_height + settings.margin;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y, offset))
        .map_or(Selection::Unchanged, |s| Selection::Section(&s.id))
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    settings: TrackerSettings,
}

impl SectionTracker {
    #[must_use]
    pub fn new(settings: TrackerSettings) -> Self {
        Self { settings }
    }

    /// Run one selection and push it to the view. Returns the id that was
    /// marked, or `None` when the previous entry was left in place.
    pub fn update(
        &self,
        scroll_y: f64,
        header_height: f64,
        sections: &[SectionBox],
        view: &mut impl SectionView,
    ) -> Option<String> {
        let id = match select_section(scroll_y, header_height, sections, &self.settings) {
            Selection::Home => self.settings.home_id.as_str(),
            Selection::Section(id) => id,
            Selection::Unchanged => return None,
        };
        view.set_active_section(id);
        Some(id.to_owned())
    }

    /// Page-load guard: mark home when nothing is active yet or the page is
    /// still near the top.
    pub fn ensure_home_active(&self, scroll_y: f64, view: &mut impl SectionView) -> bool {
        if view.active_section().is_some() && scroll_y >= self.settings.top_threshold {
            return false;
        }
        view.set_active_section(&self.settings.home_id);
        true
    }
}
