//! HuePick demo application.
//!
//! Shows two independently configured color pickers bound to the same
//! selection value, plus a preview of the current selection.

pub mod app;
pub mod ui;

pub use app::{App, AppConfig, AppError};
