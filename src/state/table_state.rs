//! Table view state
//!
//! Holds the rows of one back-office table and the user's view state (sort,
//! filters, page). Every interaction replaces part of the state; rendering
//! recomputes the page through the dataset view engine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data_table::data_provider::RowSource;
use crate::data_table::engine::{ViewResult, view_rows};
use crate::data_table::filter::FilterState;
use crate::data_table::pagination::{PageInfo, PageState};
use crate::data_table::sort::SortConfig;
use crate::domain::config::TableConfig;
use crate::domain::record::{Row, TableRecord};
use crate::domain::tables::TableKind;

/// Sort, filters and page for one table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableViewState {
    pub sort: SortConfig,
    pub filters: FilterState,
    pub page: PageState,
}

impl TableViewState {
    pub fn new(sort: SortConfig, rows_per_page: usize) -> Self {
        Self {
            sort,
            filters: FilterState::default(),
            page: PageState::new(0, rows_per_page),
        }
    }

    /// Initial state for a table preset
    pub fn for_table(kind: TableKind, config: &TableConfig) -> Self {
        Self::new(kind.default_sort(), config.rows_per_page)
    }

    /// Column header clicked
    pub fn request_sort(&mut self, key: &str) {
        self.sort.toggle(key);
        tracing::debug!(key, direction = %self.sort.direction, "Sort changed");
    }

    /// Column filter edited; an empty value clears it
    pub fn set_filter(&mut self, key: &str, value: &str) {
        self.filters.set_column(key, value);
        tracing::debug!(key, value, "Filter changed");
    }

    /// Search box edited
    pub fn set_search(&mut self, query: &str) {
        self.filters.set_search_query(query);
        tracing::debug!(query, "Search changed");
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn on_change_page(&mut self, page: usize) {
        self.page.on_change_page(page);
        tracing::debug!(page, "Page changed");
    }

    pub fn on_change_rows_per_page(&mut self, rows_per_page: usize) {
        self.page.on_change_rows_per_page(rows_per_page);
        tracing::debug!(rows_per_page, page = self.page.page, "Rows per page changed");
    }

    /// Compute the visible page of `rows`
    pub fn view<'a, R: TableRecord, S: AsRef<str>>(
        &self,
        rows: &'a [R],
        search_keys: &[S],
    ) -> ViewResult<'a, R> {
        view_rows(rows, &self.filters, search_keys, &self.sort, self.page)
    }

    pub fn page_info(&self, total_filtered_count: usize) -> PageInfo {
        PageInfo::new(self.page, total_filtered_count)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TableLoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(Arc<str>),
}

impl TableLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, TableLoadState::Loading)
    }
}

/// One table screen: its preset, fetched rows, load status and view state.
pub struct TableScreen {
    kind: TableKind,
    rows: Vec<Row>,
    load_state: TableLoadState,
    state: TableViewState,
}

impl TableScreen {
    pub fn new(kind: TableKind, state: TableViewState) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            load_state: TableLoadState::Idle,
            state,
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn load_state(&self) -> &TableLoadState {
        &self.load_state
    }

    pub fn state(&self) -> &TableViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TableViewState {
        &mut self.state
    }

    /// Fetch rows from a source. Failures are kept in the load state; rows
    /// from a previous successful load stay in place.
    pub fn load(&mut self, source: &dyn RowSource) {
        self.load_state = TableLoadState::Loading;
        tracing::info!(table = %self.kind, source = %source.describe(), "Loading rows");

        match source.fetch() {
            Ok(rows) => self.set_rows(rows),
            Err(err) => {
                tracing::warn!(table = %self.kind, error = %err, "Loading rows failed");
                self.load_state = TableLoadState::Error(err.to_string().into());
            }
        }
    }

    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.load_state = TableLoadState::Ready;
    }

    /// The current page using this table's search keys
    pub fn view(&self) -> ViewResult<'_, Row> {
        self.state.view(&self.rows, &self.kind.search_keys())
    }
}
