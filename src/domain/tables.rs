//! Tables - Back-Office Table Presets
//!
//! One place that defines, per table, its API endpoint, columns, default sort
//! and the fields the free-text search covers.

use std::fmt;
use std::str::FromStr;

use crate::data_table::column::Column;
use crate::data_table::sort::SortConfig;
use crate::domain::record::TableRecord;
use crate::error::Error;
use crate::utils::format::{format_amount_cell, format_count_cell, format_date_cell};

/// How a column's cells are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Plain,
    Date,
    Count,
    Money,
}

/// Static description of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: CellKind,
    pub searchable: bool,
}

const fn col(id: &'static str, label: &'static str, kind: CellKind, searchable: bool) -> ColumnSpec {
    ColumnSpec {
        id,
        label,
        kind,
        searchable,
    }
}

use CellKind::{Count, Date, Money, Plain};

const MANAGER_COLUMNS: &[ColumnSpec] = &[
    col("id", "ID", Plain, false),
    col("fullName", "Name", Plain, true),
    col("Email", "Email", Plain, true),
    col("phone", "Phone", Plain, true),
    col("Region", "Region", Plain, false),
    col("Status", "Status", Plain, false),
    col("createdAt", "Registered", Date, false),
];

const EXECUTIVE_COLUMNS: &[ColumnSpec] = &[
    col("id", "ID", Plain, false),
    col("fullName", "Name", Plain, true),
    col("Email", "Email", Plain, true),
    col("Region", "Region", Plain, false),
    col("managerName", "Manager", Plain, true),
    col("Status", "Status", Plain, false),
    col("createdAt", "Registered", Date, false),
];

const OPERATOR_COLUMNS: &[ColumnSpec] = &[
    col("id", "ID", Plain, false),
    col("fullName", "Name", Plain, true),
    col("Email", "Email", Plain, true),
    col("terminalCode", "Terminal", Plain, true),
    col("Region", "Region", Plain, false),
    col("executiveName", "Executive", Plain, true),
    col("Status", "Status", Plain, false),
    col("createdAt", "Registered", Date, false),
];

const ACTIVITY_LOG_COLUMNS: &[ColumnSpec] = &[
    col("id", "ID", Plain, false),
    col("actor", "User", Plain, true),
    col("action", "Action", Plain, true),
    col("target", "Target", Plain, true),
    col("ipAddress", "IP", Plain, false),
    col("createdAt", "Time", Date, false),
];

const BETTING_SUMMARY_COLUMNS: &[ColumnSpec] = &[
    col("id", "ID", Plain, false),
    col("drawDate", "Draw", Date, false),
    col("game", "Game", Plain, true),
    col("Region", "Region", Plain, true),
    col("ticketsSold", "Tickets", Count, false),
    col("totalBets", "Total bets", Money, false),
];

const WINNING_SUMMARY_COLUMNS: &[ColumnSpec] = &[
    col("id", "ID", Plain, false),
    col("drawDate", "Draw", Date, false),
    col("game", "Game", Plain, true),
    col("Region", "Region", Plain, true),
    col("winners", "Winners", Count, false),
    col("totalWinnings", "Winnings", Money, false),
    col("totalClaimed", "Claimed", Money, false),
];

/// Every table the back office shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    Managers,
    Executives,
    Operators,
    ActivityLogs,
    BettingSummary,
    WinningSummary,
}

impl TableKind {
    pub const ALL: [TableKind; 6] = [
        TableKind::Managers,
        TableKind::Executives,
        TableKind::Operators,
        TableKind::ActivityLogs,
        TableKind::BettingSummary,
        TableKind::WinningSummary,
    ];

    /// Stable identifier used on the command line and in saved views
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Managers => "managers",
            TableKind::Executives => "executives",
            TableKind::Operators => "operators",
            TableKind::ActivityLogs => "activity-logs",
            TableKind::BettingSummary => "betting-summary",
            TableKind::WinningSummary => "winning-summary",
        }
    }

    /// Path below the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            TableKind::Managers => "managers",
            TableKind::Executives => "executives",
            TableKind::Operators => "operators",
            TableKind::ActivityLogs => "logs",
            TableKind::BettingSummary => "summary/betting",
            TableKind::WinningSummary => "summary/winning",
        }
    }

    /// Plural noun for the pagination footer
    pub fn items_label(&self) -> &'static str {
        match self {
            TableKind::Managers => "managers",
            TableKind::Executives => "executives",
            TableKind::Operators => "operators",
            TableKind::ActivityLogs => "entries",
            TableKind::BettingSummary | TableKind::WinningSummary => "draws",
        }
    }

    pub fn column_specs(&self) -> &'static [ColumnSpec] {
        match self {
            TableKind::Managers => MANAGER_COLUMNS,
            TableKind::Executives => EXECUTIVE_COLUMNS,
            TableKind::Operators => OPERATOR_COLUMNS,
            TableKind::ActivityLogs => ACTIVITY_LOG_COLUMNS,
            TableKind::BettingSummary => BETTING_SUMMARY_COLUMNS,
            TableKind::WinningSummary => WINNING_SUMMARY_COLUMNS,
        }
    }

    /// Fields the free-text search covers
    pub fn search_keys(&self) -> Vec<&'static str> {
        self.column_specs()
            .iter()
            .filter(|spec| spec.searchable)
            .map(|spec| spec.id)
            .collect()
    }

    /// Sort applied before the user clicks a header
    pub fn default_sort(&self) -> SortConfig {
        match self {
            TableKind::ActivityLogs => SortConfig::desc("createdAt"),
            TableKind::BettingSummary | TableKind::WinningSummary => SortConfig::desc("drawDate"),
            _ => SortConfig::default(),
        }
    }

    /// Whether `key` names one of this table's columns
    pub fn has_column(&self, key: &str) -> bool {
        self.column_specs().iter().any(|spec| spec.id == key)
    }

    /// Build display columns for any record type
    pub fn columns<R: TableRecord + 'static>(&self) -> Vec<Column<R>> {
        self.column_specs()
            .iter()
            .map(|spec| {
                let mut column = Column::new(spec.id, spec.label).sortable();
                if spec.searchable {
                    column = column.searchable();
                }
                match spec.kind {
                    Plain => column,
                    Date => column.format_cell(format_date_cell).fixed_width(16),
                    Count => column.format_cell(format_count_cell),
                    Money => column.format_cell(format_amount_cell),
                }
            })
            .collect()
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted || kind.endpoint() == wanted)
            .ok_or_else(|| Error::Invalid {
                message: format!(
                    "unknown table '{s}' (expected one of: {})",
                    TableKind::ALL.map(|k| k.name()).join(", ")
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_table::column::search_keys;
    use crate::domain::record::Row;

    #[test]
    fn names_round_trip() {
        for kind in TableKind::ALL {
            assert_eq!(kind.name().parse::<TableKind>().ok(), Some(kind));
        }
        assert_eq!("logs".parse::<TableKind>().ok(), Some(TableKind::ActivityLogs));
        assert_eq!("Betting_Summary".parse::<TableKind>().ok(), Some(TableKind::BettingSummary));
        assert!("players".parse::<TableKind>().is_err());
    }

    #[test]
    fn search_keys_match_searchable_columns() {
        for kind in TableKind::ALL {
            let columns = kind.columns::<Row>();
            assert_eq!(search_keys(&columns), kind.search_keys());
            assert!(!kind.search_keys().is_empty());
        }
    }

    #[test]
    fn default_sort_keys_are_real_columns() {
        for kind in TableKind::ALL {
            assert!(kind.has_column(&kind.default_sort().key), "{kind}");
        }
    }

    #[test]
    fn money_columns_format_amounts() {
        let row = Row::new().with("totalBets", 1500000.0).with("ticketsSold", 42000);
        let columns = TableKind::BettingSummary.columns::<Row>();
        let bets = columns.iter().find(|c| c.id == "totalBets").expect("column");
        let tickets = columns.iter().find(|c| c.id == "ticketsSold").expect("column");

        assert_eq!(bets.render_cell(&row), "1,500,000.00");
        assert_eq!(tickets.render_cell(&row), "42,000");
    }

    #[test]
    fn operator_search_covers_terminal_code() {
        assert_eq!(
            TableKind::Operators.search_keys(),
            vec!["fullName", "Email", "terminalCode", "executiveName"]
        );
    }
}
