//! Sorting - Sort Configuration and Cell Comparator
//!
//! One active sort column at a time. Cells compare by type: numbers
//! numerically, date-like strings chronologically, other strings in
//! locale-style order. Anything else compares equal.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::constants::DEFAULT_SORT_KEY;
use crate::data_table::dates::parse_timestamp;
use crate::domain::record::CellRef;
use crate::error::Error;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(Error::Invalid {
                message: format!("unknown sort direction '{other}'"),
            }),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Header click: the active column flips direction, a new column starts ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key.to_string();
            self.direction = SortDirection::Asc;
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::asc(DEFAULT_SORT_KEY)
    }
}

/// A cell prepared for repeated comparison. Date detection runs once per cell
/// instead of once per comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Number(f64),
    Text {
        text: &'a str,
        timestamp: Option<i64>,
    },
    Unsupported,
}

impl<'a> SortKey<'a> {
    pub fn of(cell: CellRef<'a>) -> Self {
        match cell {
            CellRef::Number(n) => SortKey::Number(n),
            CellRef::Text(text) => SortKey::Text {
                text,
                timestamp: parse_timestamp(text),
            },
            CellRef::Null => SortKey::Unsupported,
        }
    }
}

/// Compare two prepared keys under a direction.
pub fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (
            SortKey::Text {
                timestamp: Some(x), ..
            },
            SortKey::Text {
                timestamp: Some(y), ..
            },
        ) => x.cmp(y),
        (SortKey::Text { text: x, .. }, SortKey::Text { text: y, .. }) => locale_cmp(x, y),
        _ => Ordering::Equal,
    };
    direction.apply(ordering)
}

/// Three-way comparison of two cells from the same column.
///
/// Mixed or null operands compare equal.
pub fn compare_cells(a: CellRef<'_>, b: CellRef<'_>, direction: SortDirection) -> Ordering {
    compare_keys(&SortKey::of(a), &SortKey::of(b), direction)
}

/// Locale-style text order in three levels: base letters ignoring case and
/// accents, then accents (unaccented first), then case (lower case first).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Stable bottom-up merge sort.
///
/// Unlike `slice::sort_by`, it tolerates comparators that are not total orders
/// (a column mixing numbers and text compares them as equal) and never panics.
pub fn stable_sort_by<T: Copy>(items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buf = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = start.saturating_add(width).min(len);
            let end = start.saturating_add(width.saturating_mul(2)).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);

            while i < mid && j < end {
                // Right side wins only when strictly smaller
                if compare(&items[j], &items[i]) == Ordering::Less {
                    buf[k] = items[j];
                    j += 1;
                } else {
                    buf[k] = items[i];
                    i += 1;
                }
                k += 1;
            }
            let rest_left = mid - i;
            buf[k..k + rest_left].copy_from_slice(&items[i..mid]);
            k += rest_left;
            buf[k..end].copy_from_slice(&items[j..end]);

            start = end;
        }
        items.copy_from_slice(&buf);
        width = width.saturating_mul(2);
    }
}
