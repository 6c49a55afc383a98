// DietView - ui/theme.rs
//
// Colour scheme and layout constants for both themes.
// No dependencies on app state or business logic.

use crate::core::view::Theme;
use egui::Color32;

/// Base egui visuals for a theme.
pub fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    }
}

/// Accent colour for active tabs and the protein badge.
pub fn accent(theme: Theme) -> Color32 {
    match theme {
        Theme::Dark => Color32::from_rgb(74, 222, 128),  // Green 400
        Theme::Light => Color32::from_rgb(22, 163, 74),  // Green 600
    }
}

/// Muted colour for secondary macro text.
pub fn muted(theme: Theme) -> Color32 {
    match theme {
        Theme::Dark => Color32::from_rgb(156, 163, 175),  // Gray 400
        Theme::Light => Color32::from_rgb(107, 114, 128), // Gray 500
    }
}

/// Subtle background for total summary rows.
pub fn total_row_fill(theme: Theme) -> Color32 {
    match theme {
        Theme::Dark => Color32::from_rgba_premultiplied(74, 222, 128, 18),
        Theme::Light => Color32::from_rgba_premultiplied(22, 163, 74, 14),
    }
}

/// Layout constants.
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const FLOATING_OFFSET: f32 = 16.0;
pub const ITEM_INDENT: f32 = 12.0;
