// DietView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "DietView";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "DietView";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Plan limits
// =============================================================================

/// Maximum size of a plan TOML file in bytes.
pub const MAX_PLAN_FILE_SIZE: u64 = 256 * 1024; // 256 KB

/// Maximum number of meal sections in a plan.
pub const MAX_MEALS: usize = 50;

/// Maximum number of options per meal section.
pub const MAX_OPTIONS_PER_MEAL: usize = 10;

/// Maximum number of food items per option panel.
pub const MAX_ITEMS_PER_OPTION: usize = 100;

// =============================================================================
// Export
// =============================================================================

/// Fixed output file name for the exported plan.
pub const EXPORT_FILE_NAME: &str = "Minha-Dieta-Personalizada.pdf";

/// A4 portrait page width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;

/// A4 portrait page height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Page margin in millimetres (applied on all four sides).
pub const PAGE_MARGIN_MM: f32 = 10.0;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Preferences file name (stored in the platform data directory).
pub const PREFS_FILE_NAME: &str = "prefs.json";
