// DietView - app/state.rs
//
// Application state management. Holds the loaded plan, the UI view state,
// and the flags panels use to request actions from the update loop.
// Owned by the eframe::App implementation.

use crate::core::model::DietPlan;
use crate::core::view::{Theme, ViewState};
use std::path::PathBuf;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The loaded (and protein-sorted) plan.
    pub plan: DietPlan,

    /// UI state: theme, active panels, selected tabs, floating controls.
    pub view: ViewState,

    /// Theme read from the preferences file, if any. Consumed on the first
    /// frame when the effective theme is resolved against the system signal.
    pub stored_theme: Option<Theme>,

    /// UI body font size in points (from config.toml, validated).
    pub ui_font_size: f32,

    /// Starting directory for the export save dialog (from config.toml).
    pub export_default_dir: Option<PathBuf>,

    /// Platform data directory (preferences live here).
    pub data_dir: PathBuf,

    /// Status message for the status bar.
    pub status_message: String,

    /// User-facing alert shown after a failed export.
    pub export_alert: Option<String>,

    /// Set by panels to request a theme toggle; handled by the update loop.
    pub request_toggle_theme: bool,

    /// Set by panels to request a PDF export; handled by the update loop.
    pub request_export: bool,

    /// Non-fatal warnings accumulated during startup (config validation).
    pub warnings: Vec<String>,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state for a loaded plan.
    ///
    /// The view starts on the light theme; the effective theme is resolved
    /// on the first frame, once the system preference signal is available.
    pub fn new(
        plan: DietPlan,
        stored_theme: Option<Theme>,
        data_dir: PathBuf,
        debug_mode: bool,
    ) -> Self {
        let view = ViewState::from_plan(&plan, Theme::Light);
        Self {
            plan,
            view,
            stored_theme,
            ui_font_size: crate::util::constants::DEFAULT_FONT_SIZE,
            export_default_dir: None,
            data_dir,
            status_message: "Ready.".to_string(),
            export_alert: None,
            request_toggle_theme: false,
            request_export: false,
            warnings: Vec::new(),
            debug_mode,
        }
    }

    /// Flip the theme and persist the new choice.
    pub fn toggle_theme(&mut self) {
        self.view.toggle_theme();
        crate::app::prefs::persist_theme(self.view.theme, &self.data_dir);
        tracing::debug!(theme = self.view.theme.as_str(), "Theme toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_theme_persists_choice() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new(
            plan::builtin_plan(),
            None,
            dir.path().to_path_buf(),
            false,
        );

        assert_eq!(state.view.theme, Theme::Light);
        state.toggle_theme();
        assert_eq!(state.view.theme, Theme::Dark);

        let prefs = crate::app::prefs::load(&crate::app::prefs::prefs_path(dir.path()))
            .expect("toggle should have written the prefs file");
        assert_eq!(prefs.stored_theme(), Some(Theme::Dark));

        // Toggling twice returns both the view and the stored value.
        state.toggle_theme();
        assert_eq!(state.view.theme, Theme::Light);
        let prefs = crate::app::prefs::load(&crate::app::prefs::prefs_path(dir.path())).unwrap();
        assert_eq!(prefs.stored_theme(), Some(Theme::Light));
    }
}
