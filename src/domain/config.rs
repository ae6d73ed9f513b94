//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{
    API_TIMEOUT_SECS, DEFAULT_ROWS_PER_PAGE, MAX_CELL_WIDTH, ROWS_PER_PAGE_OPTIONS,
};
use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Back-office API connection
    pub api: ApiConfig,
    /// Table defaults
    pub table: TableConfig,
}

/// Back-office REST API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, endpoints are appended (e.g. "https://admin.example/api")
    pub base_url: String,
    /// Bearer token (optional)
    pub token: Option<String>,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            token: None,
            timeout_secs: API_TIMEOUT_SECS,
        }
    }
}

/// Table defaults applied to views that were never saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Initial page size
    pub rows_per_page: usize,
    /// Page sizes offered by the pagination control
    pub rows_per_page_options: Vec<usize>,
    /// Widest a flexible text column may grow in the text renderer
    pub max_cell_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: ROWS_PER_PAGE_OPTIONS.to_vec(),
            max_cell_width: MAX_CELL_WIDTH,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; missing sections and keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the table layer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.table.rows_per_page == 0 {
            return Err(Error::Config {
                message: "table.rows_per_page must be positive".to_string(),
            });
        }
        if self.table.rows_per_page_options.contains(&0) {
            return Err(Error::Config {
                message: "table.rows_per_page_options must all be positive".to_string(),
            });
        }
        if self.table.max_cell_width < 4 {
            return Err(Error::Config {
                message: "table.max_cell_width must be at least 4".to_string(),
            });
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config {
                message: "api.base_url must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = AppConfig::from_toml_str("").expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.table.rows_per_page, 10);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://admin.lotto.example/api"
            token = "abc"

            [table]
            rows_per_page = 25
            "#,
        )
        .expect("config");

        assert_eq!(config.api.base_url, "https://admin.lotto.example/api");
        assert_eq!(config.api.token.as_deref(), Some("abc"));
        assert_eq!(config.api.timeout_secs, API_TIMEOUT_SECS);
        assert_eq!(config.table.rows_per_page, 25);
        assert_eq!(config.table.rows_per_page_options, ROWS_PER_PAGE_OPTIONS.to_vec());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let zero = AppConfig::from_toml_str("[table]\nrows_per_page = 0\n");
        assert!(matches!(zero, Err(Error::Config { .. })));

        let bad_type = AppConfig::from_toml_str("[table]\nrows_per_page = \"ten\"\n");
        assert!(matches!(bad_type, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn toml_round_trip() {
        let mut config = AppConfig::default();
        config.api.token = Some("t0k".into());
        let text = config.to_toml_string().expect("serialize");
        assert_eq!(AppConfig::from_toml_str(&text).expect("parse"), config);
    }
}
