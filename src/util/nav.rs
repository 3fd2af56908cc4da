//! Mobile menu rules and in-page scroll targets.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Collapsible navigation menu used on narrow viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Link click or outside click. Only narrow viewports collapse; on wide
    /// layouts the menu is inline and has nothing to close.
    pub fn close_for_width(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        if !self.open || !is_mobile(viewport_width, breakpoint) {
            return false;
        }
        self.open = false;
        true
    }

    /// Settled resize. Growing past the breakpoint always closes the menu.
    pub fn close_if_widened(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        if !self.open || is_mobile(viewport_width, breakpoint) {
            return false;
        }
        self.open = false;
        true
    }
}

#[must_use]
pub fn is_mobile(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

/// Section id for an in-page anchor (`#about` → `about`).
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that puts a section's top edge right under the header.
#[must_use]
pub fn scroll_target(offset_top: f64, header_height: f64) -> f64 {
    (offset_top - header_height).max(0.0)
}
