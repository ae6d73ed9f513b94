//! Pagination
//!
//! Page slicing for the DataTable plus the page-state handlers the pagination
//! control calls. Neither handler clamps: an out-of-range page simply renders
//! an empty slice.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROWS_PER_PAGE;

/// Current zero-based page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub page: usize,
    pub rows_per_page: usize,
}

impl PageState {
    pub fn new(page: usize, rows_per_page: usize) -> Self {
        Self {
            page,
            rows_per_page,
        }
    }

    /// Jump to a page. No bounds check.
    pub fn on_change_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size. The current page is kept, so it may now be past
    /// the end of the data.
    pub fn on_change_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page;
    }

    /// Half-open index range of this page within `len` rows
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.page.saturating_mul(self.rows_per_page);
        if start >= len {
            return len..len;
        }
        let end = start.saturating_add(self.rows_per_page).min(len);
        start..end
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(0, DEFAULT_ROWS_PER_PAGE)
    }
}

/// The rows of one page; empty when the page starts past the end.
pub fn paginate<T>(rows: &[T], page: PageState) -> &[T] {
    &rows[page.range(rows.len())]
}

/// Number of pages needed for `total` rows (at least one)
pub fn page_count(total: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 1;
    }
    total.div_ceil(rows_per_page).max(1)
}

/// What the pagination footer displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// One-based index of the first row on the page, 0 when the page is empty
    pub first_row: usize,
    /// One-based index of the last row on the page, 0 when the page is empty
    pub last_row: usize,
    pub total: usize,
    /// One-based page number
    pub page_number: usize,
    pub page_count: usize,
}

impl PageInfo {
    pub fn new(page: PageState, total: usize) -> Self {
        let range = page.range(total);
        let (first_row, last_row) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };

        Self {
            first_row,
            last_row,
            total,
            page_number: page.page.saturating_add(1),
            page_count: page_count(total, page.rows_per_page),
        }
    }

    /// No rows fall on this page
    pub fn is_empty(&self) -> bool {
        self.first_row == 0
    }

    pub fn can_prev(&self) -> bool {
        self.page_number > 1
    }

    pub fn can_next(&self) -> bool {
        self.page_number < self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_page_of_twenty_five() {
        let rows: Vec<usize> = (0..25).collect();
        let slice = paginate(&rows, PageState::new(2, 10));
        assert_eq!(slice, &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let rows: Vec<usize> = (0..5).collect();
        assert!(paginate(&rows, PageState::new(10, 10)).is_empty());
        assert!(paginate(&rows, PageState::new(usize::MAX, usize::MAX)).is_empty());
    }

    #[test]
    fn zero_page_size_is_empty() {
        let rows = [1, 2, 3];
        assert!(paginate(&rows, PageState::new(0, 0)).is_empty());
    }

    #[test]
    fn rows_per_page_change_keeps_page() {
        let mut page = PageState::new(4, 5);
        page.on_change_rows_per_page(25);
        assert_eq!(page, PageState::new(4, 25));

        let rows: Vec<usize> = (0..30).collect();
        assert!(paginate(&rows, page).is_empty());
    }

    #[test]
    fn page_change_is_unchecked() {
        let mut page = PageState::default();
        page.on_change_page(99);
        assert_eq!(page.page, 99);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn page_info_for_last_partial_page() {
        let info = PageInfo::new(PageState::new(2, 10), 25);
        assert_eq!(info.first_row, 21);
        assert_eq!(info.last_row, 25);
        assert_eq!(info.page_number, 3);
        assert_eq!(info.page_count, 3);
        assert!(info.can_prev());
        assert!(!info.can_next());
    }

    #[test]
    fn page_info_past_the_end_has_no_rows() {
        let info = PageInfo::new(PageState::new(3, 10), 1);
        assert_eq!((info.first_row, info.last_row), (0, 0));
        assert!(info.is_empty());
        assert_eq!(info.page_number, 4);
        assert_eq!(info.page_count, 1);
        assert!(info.can_prev());
        assert!(!info.can_next());
    }

    #[test]
    fn page_info_for_empty_table() {
        let info = PageInfo::new(PageState::default(), 0);
        assert_eq!(info.first_row, 0);
        assert_eq!(info.last_row, 0);
        assert!(info.is_empty());
        assert!(!info.can_prev());
        assert!(!info.can_next());
    }
}
