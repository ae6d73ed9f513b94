//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

use crate::data_table::dates::parse_timestamp;
use crate::domain::record::CellRef;

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Normalize a date-like text cell to `YYYY-MM-DD HH:MM` (UTC).
/// Cells that are not dates display unchanged.
pub fn format_date_cell(cell: CellRef<'_>) -> String {
    let text = cell.display();
    match parse_timestamp(&text).and_then(DateTime::<Utc>::from_timestamp_millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => text.into_owned(),
    }
}

/// Truncate a string to max length (in characters) with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        result.push('-');
    }

    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format a money amount with thousand separators and two decimals
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", format_number(cents / 100), cents % 100)
}

/// Cell formatter for count columns
pub fn format_count_cell(cell: CellRef<'_>) -> String {
    match cell {
        CellRef::Number(n) => format_number(n.round() as i64),
        other => other.display().into_owned(),
    }
}

/// Cell formatter for money columns
pub fn format_amount_cell(cell: CellRef<'_>) -> String {
    match cell {
        CellRef::Number(n) => format_amount(n),
        other => other.display().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(-1_234_567), "-1,234,567");
        assert_eq!(format_number(-123), "-123");
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(-0.004), "0.00");
        assert_eq!(format_amount(-98765.432), "-98,765.43");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Kwame Nkrumah Avenue", 10), "Kwame N...");
        assert_eq!(truncate("Zoë Ørsted", 4), "Z...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn date_cells_normalize() {
        assert_eq!(format_date_cell(CellRef::Text("2024-2-1")), "2024-02-01 00:00");
        assert_eq!(format_date_cell(CellRef::Text("2024-02-01T13:45:10Z")), "2024-02-01 13:45");
        assert_eq!(format_date_cell(CellRef::Text("pending")), "pending");
        assert_eq!(format_date_cell(CellRef::Null), "");
    }

    #[test]
    fn numeric_cell_formatters() {
        assert_eq!(format_count_cell(CellRef::Number(12500.0)), "12,500");
        assert_eq!(format_amount_cell(CellRef::Number(12500.0)), "12,500.00");
        assert_eq!(format_amount_cell(CellRef::Text("n/a")), "n/a");
    }
}
