//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `contact`) and held in `RwSignal`s inside
//! one [`ui::AppContext`], provided once at startup.

pub mod contact;
pub mod ui;
