//! State - Table Screens and Saved Views
//!
//! View state per table, kept separate from the rows it is applied to.

pub mod saved_views;
pub mod table_state;
