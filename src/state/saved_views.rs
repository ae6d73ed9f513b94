//! Saved table views
//!
//! Remembers each table's sort, filters and page between runs.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SAVED_VIEWS_FILE;
use crate::domain::tables::TableKind;
use crate::state::table_state::TableViewState;
use crate::utils::config_store;

/// A stored view and when it was saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedView {
    pub state: TableViewState,
    pub saved_at: DateTime<Utc>,
}

/// Saved views keyed by table name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedViews {
    views: BTreeMap<String, SavedView>,
}

impl SavedViews {
    /// Load from the app data directory
    pub fn load() -> Result<Self> {
        config_store::load_config(SAVED_VIEWS_FILE)
    }

    /// Save to the app data directory
    pub fn save(&self) -> Result<()> {
        config_store::save_config(SAVED_VIEWS_FILE, self)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        config_store::load_json(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        config_store::save_json(path, self)
    }

    /// Remove every saved view from disk
    pub fn clear_all() -> Result<()> {
        config_store::delete_config(SAVED_VIEWS_FILE)
    }

    pub fn get(&self, kind: TableKind) -> Option<&SavedView> {
        self.views.get(kind.name())
    }

    pub fn insert(&mut self, kind: TableKind, state: TableViewState) {
        tracing::debug!(table = %kind, "Saving table view");
        self.views.insert(
            kind.name().to_string(),
            SavedView {
                state,
                saved_at: Utc::now(),
            },
        );
    }

    pub fn remove(&mut self, kind: TableKind) -> Option<SavedView> {
        self.views.remove(kind.name())
    }

    /// Saved views for known tables, in table order. Entries for tables that
    /// no longer exist are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (TableKind, &SavedView)> {
        TableKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|view| (kind, view)))
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
