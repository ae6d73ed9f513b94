//! Dataset View Engine
//!
//! Turns the full row set plus view state into the rows of the current page:
//! filter, then stable sort, then paginate. Pure and synchronous; every table
//! screen calls it once per render.

use crate::data_table::filter::{CompiledFilter, FilterState};
use crate::data_table::pagination::{PageState, paginate};
use crate::data_table::sort::{SortConfig, SortKey, compare_keys, stable_sort_by};
use crate::domain::record::TableRecord;

/// The rows to render and the post-filter row count for the pagination control
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<'a, R> {
    pub visible_rows: Vec<&'a R>,
    pub total_filtered_count: usize,
}

impl<R> ViewResult<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.visible_rows.is_empty()
    }
}

/// Compute the visible page of `rows`.
pub fn view_rows<'a, R, S>(
    rows: &'a [R],
    filters: &FilterState,
    search_keys: &[S],
    sort: &SortConfig,
    page: PageState,
) -> ViewResult<'a, R>
where
    R: TableRecord,
    S: AsRef<str>,
{
    let filter = CompiledFilter::new(filters, search_keys);

    let mut keyed: Vec<(SortKey<'a>, &'a R)> = rows
        .iter()
        .filter(|row| filter.matches(*row))
        .map(|row| (SortKey::of(row.cell(&sort.key)), row))
        .collect();

    stable_sort_by(&mut keyed, |a, b| compare_keys(&a.0, &b.0, sort.direction));

    let total_filtered_count = keyed.len();
    let visible_rows: Vec<&'a R> = paginate(&keyed, page).iter().map(|(_, row)| *row).collect();

    tracing::trace!(
        input = rows.len(),
        filtered = total_filtered_count,
        visible = visible_rows.len(),
        sort_key = %sort.key,
        direction = %sort.direction,
        page = page.page,
        "table view computed"
    );

    ViewResult {
        visible_rows,
        total_filtered_count,
    }
}
