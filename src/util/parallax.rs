//! Hero parallax: translate the hero image against the scroll direction.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Parallax is a desktop-only effect, decided once at startup.
#[must_use]
pub fn parallax_enabled(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width > breakpoint
}

/// Vertical translation for the hero image, or `None` once the hero has
/// scrolled out of view (the last transform is left in place).
#[must_use]
pub fn parallax_offset(scroll_y: f64, viewport_height: f64, rate: f64) -> Option<f64> {
    (scroll_y < viewport_height).then_some(scroll_y * rate)
}

#[must_use]
pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Allows one animation-frame update in flight at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// True when the caller should request a frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn complete(&mut self) {
        self.ticking = false;
    }
}
