//! DataTable Text Renderer
//!
//! Renders a computed page as a plain text grid with a pagination footer.

use std::fmt::Write as _;

use crate::constants::{EMPTY_TABLE_MESSAGE, MAX_CELL_WIDTH};
use crate::data_table::column::Column;
use crate::data_table::engine::ViewResult;
use crate::data_table::pagination::{PageInfo, PageState};
use crate::data_table::sort::{SortConfig, SortDirection};
use crate::domain::record::TableRecord;
use crate::utils::format::{format_number, truncate};

/// DataTable component
pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    max_cell_width: usize,
    empty_message: String,
    items_label: String,
}

impl<R: TableRecord + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            max_cell_width: MAX_CELL_WIDTH,
            empty_message: EMPTY_TABLE_MESSAGE.to_string(),
            items_label: "items".to_string(),
        }
    }

    /// Cap for flexible column widths
    pub fn max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width;
        self
    }

    /// Set the empty message
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set the items label used by the footer
    pub fn items_label(mut self, label: impl Into<String>) -> Self {
        self.items_label = label.into();
        self
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Render header, rows (or the empty message) and the pagination footer
    pub fn render(&self, view: &ViewResult<'_, R>, page: PageState, sort: &SortConfig) -> String {
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|col| header_label(col, sort))
            .collect();
        let cells: Vec<Vec<String>> = view
            .visible_rows
            .iter()
            .map(|row| self.columns.iter().map(|col| col.render_cell(row)).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(headers[i].chars().count()))
                    .max()
                    .unwrap_or(0);
                col.width.resolve(content, self.max_cell_width)
            })
            .collect();

        let mut out = String::new();
        push_line(&mut out, &headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);

        if cells.is_empty() {
            let _ = writeln!(out, "{}", self.empty_message);
        } else {
            for row in &cells {
                push_line(&mut out, row, &widths);
            }
        }

        let footer = Pagination::new(PageInfo::new(page, view.total_filtered_count))
            .items_label(self.items_label.clone());
        let _ = writeln!(out, "{}", footer.render());
        out
    }
}

fn header_label<R>(col: &Column<R>, sort: &SortConfig) -> String {
    if col.sortable && col.id == sort.key {
        let arrow = match sort.direction {
            SortDirection::Asc => '^',
            SortDirection::Desc => 'v',
        };
        format!("{} {arrow}", col.label)
    } else {
        col.label.clone()
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", truncate(cell, *width), width = *width))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

/// Pagination footer
pub struct Pagination {
    info: PageInfo,
    items_label: String,
}

impl Pagination {
    /// Create a new pagination footer
    pub fn new(info: PageInfo) -> Self {
        Self {
            info,
            items_label: "items".to_string(),
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<String>) -> Self {
        self.items_label = label.into();
        self
    }

    pub fn render(&self) -> String {
        let info = &self.info;
        let prev = if info.can_prev() { "<" } else { " " };
        let next = if info.can_next() { ">" } else { " " };
        let rows = if info.is_empty() {
            "no rows".to_string()
        } else {
            format!("rows {}-{}", info.first_row, info.last_row)
        };
        format!(
            "{} {} | {rows} | {prev} {} / {} {next}",
            format_number(info.total as i64),
            self.items_label,
            info.page_number,
            info.page_count,
        )
        .trim_end()
        .to_string()
    }
}
