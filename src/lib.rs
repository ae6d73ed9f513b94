//! Lotto Admin Library
//!
//! Table engine for the lottery back office: filters, sorts and paginates
//! staff, activity log and draw summary tables, plus the console that shows them.

pub mod app;
pub mod constants;
pub mod data_table;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;
