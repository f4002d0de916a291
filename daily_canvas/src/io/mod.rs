//! I/O helpers for the daily canvas update.

pub mod canvas_store;
pub mod config;
pub mod vault;
