//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use crate::domain::record::{CellRef, TableRecord};

type CellRenderer<R> = Box<dyn Fn(&R) -> String + Send + Sync>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier, also the record field it reads
    pub id: String,
    /// Column header label
    pub label: String,
    /// Column width (in characters, or flexible)
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    /// Whether the free-text search looks at this column
    pub searchable: bool,
    render: CellRenderer<R>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in characters
    Fixed(usize),
    /// Fit to content with optional min/max
    Flex { min: Option<usize>, max: Option<usize> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl ColumnWidth {
    /// Resolve to a concrete width given the widest content and a global cap
    pub fn resolve(&self, content: usize, cap: usize) -> usize {
        match *self {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Flex { min, max } => {
                let upper = max.unwrap_or(cap).min(cap);
                content.min(upper).max(min.unwrap_or(0))
            }
        }
    }
}

impl<R: TableRecord + 'static> Column<R> {
    /// Create a new column that displays the raw cell value
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        let key = id.clone();
        Self {
            id,
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            searchable: false,
            render: Box::new(move |row: &R| row.cell(&key).display().into_owned()),
        }
    }

    /// Render cells with a custom function of the whole record
    pub fn render_with(mut self, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.render = Box::new(render);
        self
    }

    /// Render cells with a custom function of this column's value
    pub fn format_cell(
        mut self,
        format: impl Fn(CellRef<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        let key = self.id.clone();
        self.render = Box::new(move |row: &R| format(row.cell(&key)));
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: usize) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Include the column in free-text search
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> String {
        (self.render)(row)
    }
}

/// Ids of the searchable columns, in column order
pub fn search_keys<R>(columns: &[Column<R>]) -> Vec<&str> {
    columns
        .iter()
        .filter(|col| col.searchable)
        .map(|col| col.id.as_str())
        .collect()
}
