// DietView - app/mod.rs
//
// Application layer: orchestration, state management, plan loading.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod export;
pub mod plan_mgr;
pub mod prefs;
pub mod state;
