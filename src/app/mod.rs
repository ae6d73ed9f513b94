//! Application Layer
//!
//! Command-line parsing and the commands it runs.

pub mod cli;

pub use cli::{Cli, run};
