// DietView - core/view.rs
//
// Explicit UI-state object: active theme, active panels, selected tabs,
// floating-controls visibility. All updates are plain functions of
// (state, plan, group, option) so the tab-group invariant and the export
// snapshot/restore cycle are testable without a rendering backend.

use crate::core::model::{panel_id, DietPlan};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// Theme
// =============================================================================

/// Colour theme. The only durable UI preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve the effective theme at startup.
    ///
    /// `stored` wins if present; otherwise the environment's dark-preference
    /// signal; light when both are absent. An absent signal degrades
    /// silently to light.
    pub fn resolve(stored: Option<Theme>, system_dark: Option<bool>) -> Theme {
        match (stored, system_dark) {
            (Some(theme), _) => theme,
            (None, Some(true)) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stable string form used by the preferences file.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse the preferences string form. Unknown values are rejected so a
    /// corrupt preference falls back to the resolution chain.
    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

// =============================================================================
// ViewState
// =============================================================================

/// Transient UI state applied to the rendered view each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Active colour theme.
    pub theme: Theme,

    /// Ids of currently visible panels. Outside of export, at most one
    /// per group; during export every panel is forced active.
    active_panels: BTreeSet<String>,

    /// Selected tab (option key) per group. Updates even when the selected
    /// option has no panel in the plan.
    selected_tabs: BTreeMap<String, String>,

    /// Whether the floating quick-action controls are shown.
    pub floating_visible: bool,
}

/// Full snapshot of a `ViewState`, captured before export mutates it.
#[derive(Debug, Clone)]
pub struct ViewSnapshot(ViewState);

impl ViewState {
    /// Initial state: the first option of every group is active, theme as
    /// resolved by the caller, floating controls visible.
    pub fn from_plan(plan: &DietPlan, theme: Theme) -> Self {
        let mut state = Self {
            theme,
            active_panels: BTreeSet::new(),
            selected_tabs: BTreeMap::new(),
            floating_visible: true,
        };
        for meal in &plan.meals {
            if let Some(first) = meal.options.first() {
                state
                    .active_panels
                    .insert(panel_id(&meal.key, &first.key));
                state
                    .selected_tabs
                    .insert(meal.key.clone(), first.key.clone());
            }
        }
        state
    }

    /// Switch group `group` to option `option`.
    ///
    /// Deactivates every panel of the group and records the tab selection.
    /// The target panel is activated only if the plan defines it; selecting
    /// a non-existent option leaves the group with no active panel but the
    /// tab selection still updates.
    pub fn select_option(&mut self, plan: &DietPlan, group: &str, option: &str) {
        let prefix = format!("{group}-");
        self.active_panels.retain(|id| !id.starts_with(&prefix));
        self.selected_tabs
            .insert(group.to_string(), option.to_string());
        if plan.has_panel(group, option) {
            self.active_panels.insert(panel_id(group, option));
        }
    }

    /// Flip the theme. Persistence is the caller's concern.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Whether panel `id` is currently visible.
    pub fn is_panel_active(&self, id: &str) -> bool {
        self.active_panels.contains(id)
    }

    /// The selected tab for `group`, if any.
    pub fn selected_tab(&self, group: &str) -> Option<&str> {
        self.selected_tabs.get(group).map(String::as_str)
    }

    /// Ids of all active panels, in sorted order.
    pub fn active_panel_ids(&self) -> Vec<String> {
        self.active_panels.iter().cloned().collect()
    }

    /// Capture the complete state for later restoration.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot(self.clone())
    }

    /// Restore a previously captured snapshot exactly: active panel ids,
    /// selected tabs, theme, and floating-control visibility.
    pub fn restore(&mut self, snapshot: ViewSnapshot) {
        *self = snapshot.0;
    }

    /// Prepare for export: hide floating controls, force light theme, and
    /// force every plan panel active so the document captures full content.
    pub fn begin_export(&mut self, plan: &DietPlan) {
        self.floating_visible = false;
        self.theme = Theme::Light;
        for id in plan.panel_ids() {
            self.active_panels.insert(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{MealOption, MealSection};

    fn plan() -> DietPlan {
        let option = |key: &str| MealOption {
            key: key.to_string(),
            label: format!("Opção {}", key.to_uppercase()),
            items: Vec::new(),
        };
        DietPlan {
            title: "t".to_string(),
            meals: vec![
                MealSection {
                    key: "breakfast".to_string(),
                    title: "Café da Manhã".to_string(),
                    sortable: true,
                    options: vec![option("a"), option("b"), option("c")],
                },
                MealSection {
                    key: "lunch".to_string(),
                    title: "Almoço".to_string(),
                    sortable: true,
                    options: vec![option("a"), option("b")],
                },
            ],
        }
    }

    // -- Theme resolution ----------------------------------------------------

    #[test]
    fn test_resolve_stored_wins_over_system() {
        assert_eq!(Theme::resolve(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), Some(false)), Theme::Dark);
    }

    #[test]
    fn test_resolve_system_signal_when_no_stored_value() {
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
    }

    #[test]
    fn test_resolve_defaults_to_light() {
        assert_eq!(Theme::resolve(None, None), Theme::Light);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        for start in [Theme::Light, Theme::Dark] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn test_theme_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("sepia"), None);
    }

    // -- Tab switching -------------------------------------------------------

    #[test]
    fn test_initial_state_activates_first_option_per_group() {
        let plan = plan();
        let view = ViewState::from_plan(&plan, Theme::Light);
        assert!(view.is_panel_active("breakfast-a"));
        assert!(view.is_panel_active("lunch-a"));
        assert_eq!(view.active_panel_ids().len(), 2);
        assert_eq!(view.selected_tab("breakfast"), Some("a"));
    }

    /// Activating B deactivates A and C and activates only B.
    #[test]
    fn test_select_option_deactivates_siblings() {
        let plan = plan();
        let mut view = ViewState::from_plan(&plan, Theme::Light);
        view.select_option(&plan, "breakfast", "b");

        assert!(view.is_panel_active("breakfast-b"));
        assert!(!view.is_panel_active("breakfast-a"));
        assert!(!view.is_panel_active("breakfast-c"));
        // Other groups are unaffected.
        assert!(view.is_panel_active("lunch-a"));
        assert_eq!(view.selected_tab("breakfast"), Some("b"));
    }

    /// Selecting a non-existent option clears the group's panels but still
    /// updates the tab selection.
    #[test]
    fn test_select_nonexistent_option_updates_tab_only() {
        let plan = plan();
        let mut view = ViewState::from_plan(&plan, Theme::Light);
        view.select_option(&plan, "breakfast", "z");

        assert!(!view.is_panel_active("breakfast-a"));
        assert!(!view.is_panel_active("breakfast-b"));
        assert!(!view.is_panel_active("breakfast-c"));
        assert_eq!(view.selected_tab("breakfast"), Some("z"));
        // The other group still has its active panel.
        assert!(view.is_panel_active("lunch-a"));
    }

    // -- Export snapshot/restore ---------------------------------------------

    #[test]
    fn test_begin_export_forces_all_panels_active_and_light_theme() {
        let plan = plan();
        let mut view = ViewState::from_plan(&plan, Theme::Dark);
        view.select_option(&plan, "lunch", "b");

        view.begin_export(&plan);
        assert_eq!(view.theme, Theme::Light);
        assert!(!view.floating_visible);
        for id in plan.panel_ids() {
            assert!(view.is_panel_active(&id), "panel {id} should be active");
        }
    }

    #[test]
    fn test_restore_returns_exact_prior_state() {
        let plan = plan();
        let mut view = ViewState::from_plan(&plan, Theme::Dark);
        view.select_option(&plan, "lunch", "b");
        let before = view.clone();

        let snapshot = view.snapshot();
        view.begin_export(&plan);
        view.restore(snapshot);

        assert_eq!(view, before);
        assert_eq!(view.theme, Theme::Dark);
        assert!(view.floating_visible);
        assert_eq!(view.active_panel_ids(), vec!["breakfast-a", "lunch-b"]);
    }
}
