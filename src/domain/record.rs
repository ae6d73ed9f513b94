//! Record - Table Rows and Cell Values
//!
//! Rows arrive from the back-office API as loosely shaped JSON objects. The
//! table engine reads them through [`TableRecord`], so the same pipeline runs
//! over the dynamic [`Row`] map and over typed entities.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An owned cell value as delivered by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    #[default]
    Null,
}

impl CellValue {
    pub fn as_cell(&self) -> CellRef<'_> {
        match self {
            CellValue::Text(s) => CellRef::Text(s),
            CellValue::Number(n) => CellRef::Number(*n),
            CellValue::Null => CellRef::Null,
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => CellValue::Text(s),
            Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
            Value::Bool(b) => CellValue::Text(b.to_string()),
            // Nested structures are not addressable by a column key
            Value::Null | Value::Array(_) | Value::Object(_) => CellValue::Null,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

/// A borrowed view of one cell, the unit the comparator and filters work on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellRef<'a> {
    Text(&'a str),
    Number(f64),
    Null,
}

impl<'a> CellRef<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            CellRef::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellRef::Null)
    }

    /// Display form used by the text renderer. Whole numbers print without a
    /// fractional part, nulls print empty.
    pub fn display(&self) -> Cow<'a, str> {
        match *self {
            CellRef::Text(s) => Cow::Borrowed(s),
            CellRef::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Cow::Owned(format!("{}", n as i64))
            }
            CellRef::Number(n) => Cow::Owned(n.to_string()),
            CellRef::Null => Cow::Borrowed(""),
        }
    }
}

impl<'a> From<&'a str> for CellRef<'a> {
    fn from(value: &'a str) -> Self {
        CellRef::Text(value)
    }
}

impl From<f64> for CellRef<'_> {
    fn from(value: f64) -> Self {
        CellRef::Number(value)
    }
}

impl<'a> From<Option<&'a str>> for CellRef<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(CellRef::Null, CellRef::Text)
    }
}

/// Anything a table can display: one entity per row, addressed by field name.
///
/// Missing fields read as [`CellRef::Null`].
pub trait TableRecord {
    fn cell(&self, key: &str) -> CellRef<'_>;
}

/// A dynamic row: field name to value, exactly as the API sent it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TableRecord for Row {
    fn cell(&self, key: &str) -> CellRef<'_> {
        self.fields.get(key).map_or(CellRef::Null, CellValue::as_cell)
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_deserializes_heterogeneous_json() {
        let row: Row = serde_json::from_str(
            r#"{"id": 7, "fullName": "Alice", "active": true, "note": null, "tags": ["a"]}"#,
        )
        .expect("row should parse");

        assert_eq!(row.cell("id"), CellRef::Number(7.0));
        assert_eq!(row.cell("fullName"), CellRef::Text("Alice"));
        assert_eq!(row.cell("active"), CellRef::Text("true"));
        assert_eq!(row.cell("note"), CellRef::Null);
        assert_eq!(row.cell("tags"), CellRef::Null);
        assert_eq!(row.cell("missing"), CellRef::Null);
    }

    #[test]
    fn row_serializes_back_to_plain_json() {
        let row = Row::new().with("id", 3).with("Email", "a@x.com").with("phone", None::<&str>);
        let json = serde_json::to_value(&row).expect("row should serialize");
        assert_eq!(json, serde_json::json!({"id": 3.0, "Email": "a@x.com", "phone": null}));
    }

    #[test]
    fn display_drops_fraction_of_whole_numbers() {
        assert_eq!(CellRef::Number(42.0).display(), "42");
        assert_eq!(CellRef::Number(2.5).display(), "2.5");
        assert_eq!(CellRef::Null.display(), "");
    }
}
