//! Row Sources
//!
//! Where table rows come from: memory, a JSON export on disk, or the
//! back-office REST API. All of them resolve to `Vec<Row>`; the table engine
//! never does I/O itself.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::config::ApiConfig;
use crate::domain::record::Row;
use crate::error::{Error, Result};

/// Trait for providing rows to a table
pub trait RowSource {
    /// Fetch the full row set
    fn fetch(&self) -> Result<Vec<Row>>;

    /// Short description for logs and error messages
    fn describe(&self) -> String;
}

/// API responses are either a bare array or an envelope with a `data` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Bare(Vec<T>),
    Envelope { data: Vec<T> },
}

/// Parse a list payload into records
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let payload: Payload<T> = serde_json::from_str(text)?;
    Ok(match payload {
        Payload::Bare(rows) | Payload::Envelope { data: rows } => rows,
    })
}

/// Simple in-memory row source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Arc<Vec<Row>>,
}

impl MemorySource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    /// Create from a shared reference
    pub fn from_arc(rows: Arc<Vec<Row>>) -> Self {
        Self { rows }
    }

    pub fn all(&self) -> &[Row] {
        &self.rows
    }
}

impl RowSource for MemorySource {
    fn fetch(&self) -> Result<Vec<Row>> {
        Ok(self.rows.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} rows)", self.rows.len())
    }
}

/// Rows exported to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Row>> {
        let text = std::fs::read_to_string(&self.path)?;
        let rows = parse_payload(&text)?;
        tracing::info!(path = %self.path.display(), rows = rows.len(), "Loaded rows from file");
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Rows from the back-office REST API
#[derive(Debug, Clone)]
pub struct HttpRowSource {
    client: reqwest::blocking::Client,
    url: String,
    token: Option<String>,
}

impl HttpRowSource {
    pub fn new(api: &ApiConfig, endpoint: &str) -> Result<Self> {
        let url = join_url(&api.base_url, endpoint);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|source| Error::Http {
                url: url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            url,
            token: api.token.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RowSource for HttpRowSource {
    fn fetch(&self) -> Result<Vec<Row>> {
        let mut request = self.client.get(&self.url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let body = request
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|source| Error::Http {
                url: self.url.clone(),
                source,
            })?;

        let rows = parse_payload(&body)?;
        tracing::info!(url = %self.url, rows = rows.len(), "Fetched rows from API");
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
