// DietView - app/plan_mgr.rs
//
// Plan loading orchestration: reads plan files from disk (with a size
// limit check) and feeds their content to the core parser. The built-in
// plan is used when no file is given.

use crate::core::model::DietPlan;
use crate::core::plan;
use crate::util::constants;
use crate::util::error::PlanError;
use std::path::Path;

/// Load the plan: from `path` if given, otherwise the built-in plan.
pub fn load(path: Option<&Path>) -> Result<DietPlan, PlanError> {
    match path {
        Some(path) => load_file(path),
        None => {
            tracing::info!("Using built-in plan");
            Ok(plan::builtin_plan())
        }
    }
}

/// Load and validate a plan TOML file.
fn load_file(path: &Path) -> Result<DietPlan, PlanError> {
    let meta = std::fs::metadata(path).map_err(|e| PlanError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if meta.len() > constants::MAX_PLAN_FILE_SIZE {
        return Err(PlanError::FileTooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            max_size: constants::MAX_PLAN_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| PlanError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let plan = plan::parse_str(&content, path)?;
    tracing::info!(
        path = %path.display(),
        meals = plan.meals.len(),
        "Plan file loaded"
    );
    Ok(plan)
}
