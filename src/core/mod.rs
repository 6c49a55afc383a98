// DietView - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod model;
pub mod nutrition;
pub mod pdf;
pub mod plan;
pub mod sort;
pub mod view;
