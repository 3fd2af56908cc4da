//! Page component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the single-page layout from [`crate::state::ui::AppContext`].
//! Modules that own a browser behavior also expose a csr-only `wire` function,
//! which `App` calls once after mount.

pub mod contact_modal;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod sections;
pub mod theme_switcher;
