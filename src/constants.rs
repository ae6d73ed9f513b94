//! Table Constants
//!
//! Centralized defaults shared by the table engine, the config layer and the CLI.

/// Field every back-office entity carries; the initial sort key
pub const DEFAULT_SORT_KEY: &str = "id";

/// Rows shown per page before the user picks another size
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Page sizes offered by the pagination control
pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Text cells wider than this are truncated by the text renderer
pub const MAX_CELL_WIDTH: usize = 32;

/// Message shown when a page has no rows
pub const EMPTY_TABLE_MESSAGE: &str = "No data";

/// HTTP timeout for row fetches
pub const API_TIMEOUT_SECS: u64 = 30;

/// Saved table views file (inside the app data directory)
pub const SAVED_VIEWS_FILE: &str = "views.json";

/// Application config file (inside the app config directory)
pub const CONFIG_FILE: &str = "config.toml";
