// DietView - core/plan.rs
//
// Plan loading and validation.
// Core layer: accepts TOML strings, never touches the filesystem.
// File I/O is handled by app::plan_mgr which feeds content here.

use crate::core::model::{DietPlan, FoodItem, MealOption, MealSection};
use crate::util::constants;
use crate::util::error::PlanError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Built-in plan shipped inside the binary, used when no plan file is given.
const BUILTIN_PLAN: &str = include_str!("../../plans/default.toml");

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw TOML plan document as deserialized from a .toml file.
/// This is validated and converted into a `DietPlan` for runtime use.
#[derive(Debug, Deserialize)]
struct PlanDocument {
    title: String,
    #[serde(default, rename = "meal")]
    meals: Vec<MealDef>,
}

#[derive(Debug, Deserialize)]
struct MealDef {
    key: String,
    title: String,
    #[serde(default = "default_sortable")]
    sortable: bool,
    #[serde(default, rename = "option")]
    options: Vec<OptionDef>,
}

fn default_sortable() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct OptionDef {
    key: String,
    label: String,
    #[serde(default, rename = "item")]
    items: Vec<FoodItem>,
}

// =============================================================================
// Parsing and validation
// =============================================================================

/// Parse and validate a plan TOML string. `origin` is used for error context.
pub fn parse_str(content: &str, origin: &Path) -> Result<DietPlan, PlanError> {
    let doc: PlanDocument = toml::from_str(content).map_err(|e| PlanError::TomlParse {
        path: origin.to_path_buf(),
        source: e,
    })?;

    if doc.title.trim().is_empty() {
        return Err(PlanError::Validation {
            reason: "plan title must not be empty".to_string(),
        });
    }
    if doc.meals.is_empty() {
        return Err(PlanError::Validation {
            reason: "plan must define at least one [[meal]] section".to_string(),
        });
    }
    if doc.meals.len() > constants::MAX_MEALS {
        return Err(PlanError::LimitExceeded {
            what: "meal sections",
            count: doc.meals.len(),
            max: constants::MAX_MEALS,
        });
    }

    let mut meal_keys: HashSet<&str> = HashSet::new();
    for meal in &doc.meals {
        validate_key(&meal.key, "meal")?;
        if !meal_keys.insert(&meal.key) {
            return Err(PlanError::DuplicateKey {
                key: meal.key.clone(),
                context: "plan meals".to_string(),
            });
        }
        if meal.options.is_empty() {
            return Err(PlanError::Validation {
                reason: format!("meal '{}' must define at least one option", meal.key),
            });
        }
        if meal.options.len() > constants::MAX_OPTIONS_PER_MEAL {
            return Err(PlanError::LimitExceeded {
                what: "options per meal",
                count: meal.options.len(),
                max: constants::MAX_OPTIONS_PER_MEAL,
            });
        }

        let mut option_keys: HashSet<&str> = HashSet::new();
        for option in &meal.options {
            validate_key(&option.key, "option")?;
            if !option_keys.insert(&option.key) {
                return Err(PlanError::DuplicateKey {
                    key: option.key.clone(),
                    context: format!("meal '{}'", meal.key),
                });
            }
            if option.items.len() > constants::MAX_ITEMS_PER_OPTION {
                return Err(PlanError::LimitExceeded {
                    what: "items per option",
                    count: option.items.len(),
                    max: constants::MAX_ITEMS_PER_OPTION,
                });
            }
        }
    }

    Ok(DietPlan {
        title: doc.title,
        meals: doc
            .meals
            .into_iter()
            .map(|m| MealSection {
                key: m.key,
                title: m.title,
                sortable: m.sortable,
                options: m
                    .options
                    .into_iter()
                    .map(|o| MealOption {
                        key: o.key,
                        label: o.label,
                        items: o.items,
                    })
                    .collect(),
            })
            .collect(),
    })
}

/// Keys become panel-id segments joined with '-', so the separator is
/// reserved and keys must be non-empty.
fn validate_key(key: &str, what: &str) -> Result<(), PlanError> {
    if key.is_empty() {
        return Err(PlanError::Validation {
            reason: format!("{what} key must not be empty"),
        });
    }
    if key.contains('-') {
        return Err(PlanError::Validation {
            reason: format!("{what} key '{key}' must not contain '-'"),
        });
    }
    Ok(())
}

/// The built-in plan embedded in the binary.
///
/// The source is compile-time data, so a parse failure here is a packaging
/// defect, not a runtime condition.
pub fn builtin_plan() -> DietPlan {
    parse_str(BUILTIN_PLAN, &PathBuf::from("<builtin>"))
        .expect("builtin_plan: embedded plan must parse and validate")
}
