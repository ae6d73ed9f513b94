//! Filtering - Column Filters and Free-Text Search
//!
//! Every non-empty column filter must match (AND). A non-empty search query
//! must match at least one search key (OR). Both checks are case-insensitive
//! substring tests against text cells; non-text cells never match.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::record::{CellRef, TableRecord};

/// Filter key the web UI used for the free-text box
pub const SEARCH_QUERY_KEY: &str = "searchQuery";

/// Per-column substring filters plus one free-text search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    columns: BTreeMap<String, String>,
    #[serde(default)]
    pub search_query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column filter
    pub fn with_column(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_column(key, value);
        self
    }

    /// Builder-style search query
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Set a column filter. An empty value clears it; the `searchQuery` key
    /// sets the free-text search instead.
    pub fn set_column(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key == SEARCH_QUERY_KEY {
            self.search_query = value;
        } else if value.is_empty() {
            self.columns.remove(&key);
        } else {
            self.columns.insert(key, value);
        }
    }

    /// Current filter for a column, empty when absent
    pub fn column(&self, key: &str) -> &str {
        self.columns.get(key).map_or("", String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.search_query.clear();
    }

    /// Whether any filter would exclude rows
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty() || self.columns.values().any(|v| !v.is_empty())
    }
}

/// A [`FilterState`] with its needles lower-cased once, ready to test many rows.
#[derive(Debug, Clone)]
pub struct CompiledFilter<'a> {
    columns: Vec<(&'a str, String)>,
    search: Option<String>,
    search_keys: Vec<&'a str>,
}

impl<'a> CompiledFilter<'a> {
    pub fn new<S: AsRef<str>>(filters: &'a FilterState, search_keys: &'a [S]) -> Self {
        let columns = filters
            .columns()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key, value.to_lowercase()))
            .collect();
        let search = (!filters.search_query.is_empty()).then(|| filters.search_query.to_lowercase());

        Self {
            columns,
            search,
            search_keys: search_keys.iter().map(|key| key.as_ref()).collect(),
        }
    }

    pub fn matches<R: TableRecord + ?Sized>(&self, row: &R) -> bool {
        let columns_pass = self
            .columns
            .iter()
            .all(|(key, needle)| contains_ignore_case(row.cell(key), needle));
        if !columns_pass {
            return false;
        }

        match &self.search {
            None => true,
            Some(needle) => self
                .search_keys
                .iter()
                .any(|key| contains_ignore_case(row.cell(key), needle)),
        }
    }
}

/// Whether a single row survives the filters.
pub fn row_matches<R, S>(row: &R, filters: &FilterState, search_keys: &[S]) -> bool
where
    R: TableRecord + ?Sized,
    S: AsRef<str>,
{
    CompiledFilter::new(filters, search_keys).matches(row)
}

fn contains_ignore_case(cell: CellRef<'_>, needle_lower: &str) -> bool {
    cell.as_text()
        .is_some_and(|text| text.to_lowercase().contains(needle_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Row;

    fn person(name: &str, email: &str, region: &str, status: &str) -> Row {
        Row::new()
            .with("fullName", name)
            .with("Email", email)
            .with("Region", region)
            .with("Status", status)
    }

    #[test]
    fn column_filters_combine_with_and() {
        let filters = FilterState::new()
            .with_column("Region", "North")
            .with_column("Status", "Active");
        let keys: [&str; 0] = [];

        assert!(row_matches(&person("A", "a@x.com", "North", "Active"), &filters, &keys));
        assert!(!row_matches(&person("B", "b@x.com", "North", "Suspended"), &filters, &keys));
        assert!(!row_matches(&person("C", "c@x.com", "South", "Active"), &filters, &keys));
    }

    #[test]
    fn column_filter_is_a_substring_match() {
        let filters = FilterState::new().with_column("Status", "active");
        let keys: [&str; 0] = [];

        assert!(row_matches(&person("A", "a@x.com", "North", "Inactive"), &filters, &keys));
        assert!(row_matches(&person("B", "b@x.com", "North", "ACTIVE"), &filters, &keys));
        assert!(!row_matches(&person("C", "c@x.com", "North", "Suspended"), &filters, &keys));
    }

    #[test]
    fn search_matches_any_key() {
        let filters = FilterState::new().with_search("john");
        let keys = ["fullName", "Email"];

        assert!(row_matches(&person("Alice Smith", "john@x.com", "North", "Active"), &filters, &keys));
        assert!(!row_matches(&person("Alice Smith", "alice@x.com", "John", "Active"), &filters, &keys));
    }

    #[test]
    fn search_and_columns_must_both_pass() {
        let filters = FilterState::new().with_column("Region", "south").with_search("john");
        let keys = ["fullName"];

        assert!(row_matches(&person("John Doe", "", "South", "Active"), &filters, &keys));
        assert!(!row_matches(&person("John Doe", "", "North", "Active"), &filters, &keys));
        assert!(!row_matches(&person("Jane Doe", "", "South", "Active"), &filters, &keys));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let filters = FilterState::new().with_column("fullName", "JOHN");
        let keys: [&str; 0] = [];
        assert!(row_matches(&person("John Doe", "", "", ""), &filters, &keys));

        let filters = FilterState::new().with_search("john");
        assert!(row_matches(&person("John Doe", "", "", ""), &filters, &["fullName"]));
    }

    #[test]
    fn non_text_cells_never_match() {
        let row = Row::new().with("id", 42).with("fullName", "Answer");
        let keys = ["id", "fullName"];

        let by_number = FilterState::new().with_column("id", "42");
        assert!(!row_matches(&row, &by_number, &keys));

        let by_missing = FilterState::new().with_column("phone", "555");
        assert!(!row_matches(&row, &by_missing, &keys));

        // Another key can still satisfy the search
        let search = FilterState::new().with_search("ans");
        assert!(row_matches(&row, &search, &keys));
    }

    #[test]
    fn empty_filters_keep_every_row() {
        let filters = FilterState::new().with_column("Region", "").with_search("");
        assert!(!filters.is_active());
        assert!(row_matches(&Row::new(), &filters, &["fullName"]));
    }

    #[test]
    fn search_query_key_routes_to_search() {
        let mut filters = FilterState::new();
        filters.set_column(SEARCH_QUERY_KEY, "doe");
        assert_eq!(filters.search_query, "doe");
        assert_eq!(filters.column(SEARCH_QUERY_KEY), "");
    }

    #[test]
    fn clearing_a_column_removes_it() {
        let mut filters = FilterState::new().with_column("Region", "North");
        filters.set_column("Region", "");
        assert_eq!(filters.columns().count(), 0);
        assert_eq!(filters.column("Region"), "");
    }
}
