// DietView - ui/panels/mod.rs

pub mod alert;
pub mod floating;
pub mod header;
pub mod meals;
