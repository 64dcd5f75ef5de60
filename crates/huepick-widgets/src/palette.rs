//! Named color constants for pickers.
//!
//! Values are the 500-level Tailwind CSS colors, which read well as swatches
//! on both light and dark backgrounds.

use egui::Color32;

pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
pub const AMBER: Color32 = Color32::from_rgb(245, 158, 11);
pub const YELLOW: Color32 = Color32::from_rgb(234, 179, 8);
pub const LIME: Color32 = Color32::from_rgb(132, 204, 22);
pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const EMERALD: Color32 = Color32::from_rgb(16, 185, 129);
pub const TEAL: Color32 = Color32::from_rgb(20, 184, 166);
pub const CYAN: Color32 = Color32::from_rgb(6, 182, 212);
pub const SKY: Color32 = Color32::from_rgb(14, 165, 233);
pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub const INDIGO: Color32 = Color32::from_rgb(99, 102, 241);
pub const VIOLET: Color32 = Color32::from_rgb(139, 92, 246);
pub const PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
pub const FUCHSIA: Color32 = Color32::from_rgb(217, 70, 239);
pub const PINK: Color32 = Color32::from_rgb(236, 72, 153);
pub const ROSE: Color32 = Color32::from_rgb(244, 63, 94);
pub const SLATE: Color32 = Color32::from_rgb(100, 116, 139);
/// Amber 800, the closest Tailwind shade to a true brown.
pub const BROWN: Color32 = Color32::from_rgb(146, 64, 14);

/// Default color sequence for a new picker.
pub const DEFAULT_COLORS: [Color32; 3] = [RED, BLUE, GREEN];

/// All named colors, for lookup and tooltips.
pub const NAMED_COLORS: &[(&str, Color32)] = &[
    ("Red", RED),
    ("Orange", ORANGE),
    ("Amber", AMBER),
    ("Yellow", YELLOW),
    ("Lime", LIME),
    ("Green", GREEN),
    ("Emerald", EMERALD),
    ("Teal", TEAL),
    ("Cyan", CYAN),
    ("Sky", SKY),
    ("Blue", BLUE),
    ("Indigo", INDIGO),
    ("Violet", VIOLET),
    ("Purple", PURPLE),
    ("Fuchsia", FUCHSIA),
    ("Pink", PINK),
    ("Rose", ROSE),
    ("Slate", SLATE),
    ("Brown", BROWN),
];

/// Get a named color by name.
pub fn by_name(name: &str) -> Option<Color32> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}

/// Format a color as a CSS hex string (e.g. "#ef4444").
pub fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
