//! Domain - Records and Table Presets
//!
//! These types don't depend on the console and describe the back-office data.

pub mod activity_log;
pub mod config;
pub mod record;
pub mod staff;
pub mod summary;
pub mod tables;
