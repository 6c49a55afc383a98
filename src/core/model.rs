// DietView - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Diet plan (content rendered by the UI and the PDF exporter)
// =============================================================================

/// A complete diet plan: an ordered list of meal sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlan {
    /// Plan title, shown in the header and as the PDF document title.
    pub title: String,

    /// Meal sections in display order.
    pub meals: Vec<MealSection>,
}

impl DietPlan {
    /// Returns true if the plan defines panel `{group}-{option}`.
    pub fn has_panel(&self, group: &str, option: &str) -> bool {
        self.meals
            .iter()
            .find(|m| m.key == group)
            .is_some_and(|m| m.options.iter().any(|o| o.key == option))
    }

    /// All panel ids defined by the plan, in display order.
    pub fn panel_ids(&self) -> Vec<String> {
        self.meals
            .iter()
            .flat_map(|m| m.options.iter().map(|o| panel_id(&m.key, &o.key)))
            .collect()
    }
}

/// A tab group: a meal with mutually exclusive option panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSection {
    /// Group key, used as the panel id prefix. Must not contain '-'.
    pub key: String,

    /// Human-readable section title.
    pub title: String,

    /// Whether this section participates in the protein sort.
    /// The supplements section sets this to false.
    #[serde(default = "default_sortable")]
    pub sortable: bool,

    /// Option panels; exactly one is active at a time.
    pub options: Vec<MealOption>,
}

fn default_sortable() -> bool {
    true
}

/// One option panel within a meal section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealOption {
    /// Option key within the group. Must not contain '-'.
    pub key: String,

    /// Tab label (e.g. "Opção A").
    pub label: String,

    /// Food items in display order. A trailing `total` row, if present,
    /// stays at the end regardless of sort order.
    #[serde(default)]
    pub items: Vec<FoodItem>,
}

/// A single food item (or total summary row) within an option panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Item name (e.g. "Frango grelhado").
    pub name: String,

    /// Portion description (e.g. "150g").
    #[serde(default)]
    pub portion: Option<String>,

    /// Protein macro text (e.g. "25g Proteína"). The leading `<number>g`
    /// is what the protein sorter parses; anything else counts as 0.
    #[serde(default)]
    pub protein: Option<String>,

    /// Carbohydrate macro text.
    #[serde(default)]
    pub carbs: Option<String>,

    /// Fat macro text.
    #[serde(default)]
    pub fat: Option<String>,

    /// Calorie text (e.g. "220 kcal").
    #[serde(default)]
    pub calories: Option<String>,

    /// Marks the sentinel summary row excluded from sorting.
    #[serde(default)]
    pub total: bool,
}

/// Panel id for an option within a group: `{group}-{option}`.
pub fn panel_id(group: &str, option: &str) -> String {
    format!("{group}-{option}")
}

// =============================================================================
// Export progress (background thread -> UI channel messages)
// =============================================================================

/// Progress messages sent by the export thread to the UI.
#[derive(Debug)]
pub enum ExportProgress {
    /// The PDF was written successfully.
    Completed { path: PathBuf, bytes: usize },

    /// The export failed; state must still be restored.
    Failed { error: String },
}
