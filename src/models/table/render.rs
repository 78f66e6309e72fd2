// src/models/table/render.rs
//! Turning fetched rows into display cells.
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use super::{Badge, ColumnDefinition, ColumnKind, Row, RowAction};

/// Shown for missing plain values.
pub const PLAIN_PLACEHOLDER: &str = "-";
/// Shown when a relationship path leads nowhere.
pub const RELATION_PLACEHOLDER: &str = "—";

/// Resolve `key` in a row: the exact key first, then a dotted path into nested objects.
/// JSON null counts as absent.
pub fn lookup<'a>(row: &'a Row, key: &str) -> Option<&'a Value> {
    let found = match row.get(key) {
        Some(v) => Some(v),
        None => {
            let mut parts = key.split('.');
            let first = row.get(parts.next()?)?;
            parts.try_fold(first, |value, part| value.as_object()?.get(part))
        }
    };
    found.filter(|v| !v.is_null())
}

/// Text for a scalar value; `None` for null, empty strings and containers.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("Yes".to_string()),
        Value::Bool(false) => Some("No".to_string()),
        _ => None,
    }
}

/// Key used to look a value up in a badge mapping.
fn badge_key(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Format a stored date or timestamp. Unparseable input is returned unchanged.
pub fn format_date(raw: &str, format: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(format).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(format).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format(format).to_string();
    }
    raw.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cell {
    Text { value: String },
    Date { value: String, raw: Option<String> },
    Badge { value: Option<String>, badge: Badge },
    Actions { items: Vec<RowAction> },
}

impl Cell {
    /// Plain text rendering, as used by templates and CSV export.
    pub fn text(&self) -> String {
        match self {
            Cell::Text { value } | Cell::Date { value, .. } => value.clone(),
            Cell::Badge { badge, .. } => badge.label.to_string(),
            Cell::Actions { items } => items.iter().map(|a| a.label).collect::<Vec<_>>().join(" "),
        }
    }

    pub fn badge(&self) -> Option<&Badge> {
        match self {
            Cell::Badge { badge, .. } => Some(badge),
            _ => None,
        }
    }

    pub fn actions(&self) -> &[RowAction] {
        match self {
            Cell::Actions { items } => items,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedRow {
    pub id: i64,
    pub cells: Vec<Cell>,
}

/// Render one column of one row. `actions` fills the action column.
pub fn render_cell(column: &ColumnDefinition, row: &Row, actions: &[RowAction]) -> Cell {
    let value = lookup(row, column.key);
    match &column.kind {
        ColumnKind::Plain => Cell::Text {
            value: value.and_then(scalar_text).unwrap_or_else(|| PLAIN_PLACEHOLDER.to_string()),
        },
        ColumnKind::Relationship { placeholder } => Cell::Text {
            value: value.and_then(scalar_text).unwrap_or_else(|| placeholder.to_string()),
        },
        ColumnKind::Date { format } => {
            let raw = value.and_then(Value::as_str).map(str::to_string);
            Cell::Date {
                value: raw
                    .as_deref()
                    .map(|r| format_date(r, format))
                    .unwrap_or_else(|| PLAIN_PLACEHOLDER.to_string()),
                raw,
            }
        }
        ColumnKind::Badge(mapping) => {
            let key = value.and_then(badge_key);
            Cell::Badge { badge: *mapping.resolve(key.as_deref()), value: key }
        }
        ColumnKind::Action => Cell::Actions { items: actions.to_vec() },
    }
}

pub fn row_id(row: &Row) -> i64 {
    row.get("id").and_then(Value::as_i64).unwrap_or_default()
}
