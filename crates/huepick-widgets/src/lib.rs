//! Reusable egui widgets for color selection.
//!
//! The main entry point is [`ColorPicker`]: a titled horizontal row of
//! clickable color swatches bound to a caller-owned selection value.
//!
//! - **Picker**: [`ColorPicker`], [`PickerConfig`], [`PickerResponse`]
//! - **Shapes**: the [`SwatchShape`] capability with circle, rectangle,
//!   and rounded-rectangle implementations
//! - **Palette**: named color constants and lookup helpers

pub mod palette;
pub mod picker;
pub mod shape;

pub use palette::{hex, DEFAULT_COLORS, NAMED_COLORS};
pub use picker::{highlighted_indices, ColorPicker, PickerConfig, PickerResponse};
pub use shape::{Circle, Rectangle, RoundedRect, SwatchShape};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default swatch width and height
    pub const SWATCH: f32 = 20.0;
    /// Scale factor applied to the swatch shape for the selection ring
    pub const HIGHLIGHT_SCALE: f32 = 1.3;
    /// Stroke width of the selection ring
    pub const HIGHLIGHT_STROKE: f32 = 2.0;
    /// Standard corner radius for rounded-rect swatches
    pub const CORNER_RADIUS: u8 = 4;
}
