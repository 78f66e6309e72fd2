//! Advanced filter trees and sort specs submitted by the table client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Logic { #[default] And, Or }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub op: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Group {
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterTree {
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl FilterTree {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.groups.is_empty()
    }
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SortDir { #[default] Asc, Desc }

impl SortDir {
    pub fn sql(&self) -> &'static str {
        match self { SortDir::Asc => "ASC", SortDir::Desc => "DESC" }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortSpec {
    pub column: String,
    pub dir: SortDir,
}

impl SortSpec {
    pub fn from_params(sort: Option<&str>, dir: Option<&str>) -> Self {
        SortSpec {
            column: sort.unwrap_or("").to_string(),
            dir: if dir == Some("desc") { SortDir::Desc } else { SortDir::Asc },
        }
    }
    pub fn dir_str(&self) -> &'static str {
        match self.dir { SortDir::Asc => "asc", SortDir::Desc => "desc" }
    }
}

#[derive(Debug, PartialEq)]
pub enum BuildError {
    UnknownField(String),
    UnknownOp(String),
    Malformed(String),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::UnknownField(field) => write!(f, "Unknown filter field: {field}"),
            BuildError::UnknownOp(op) => write!(f, "Unknown filter operator: {op}"),
            BuildError::Malformed(e) => write!(f, "Malformed filter: {e}"),
        }
    }
}

/// Operators every table accepts.
pub const OPS: &[&str] = &[
    "contains", "not_contains", "equals", "not_equals",
    "starts_with", "is", "is_not", "before", "after", "on",
];

/// Build a parameterized WHERE fragment from a FilterTree.
/// Returns (sql_fragment, params_vec).
/// param_offset: number of placeholders already taken, so the first one emitted is `$param_offset+1`.
/// field_map: "field_key" -> "sql_col_expression" (declared in code, never user input)
pub fn build_where_clause(
    tree: &FilterTree,
    field_map: &HashMap<&str, &str>,
    op_whitelist: &[&str],
    param_offset: usize,
) -> Result<(String, Vec<String>), BuildError> {
    if tree.is_empty() {
        return Ok(("1=1".to_string(), vec![]));
    }
    let mut params: Vec<String> = vec![];
    let mut parts: Vec<String> = vec![];

    for cond in &tree.conditions {
        let (sql, mut p) = build_condition(cond, field_map, op_whitelist, param_offset + params.len())?;
        params.append(&mut p);
        parts.push(sql);
    }

    // Groups nest one level deep
    for group in &tree.groups {
        let (sql, mut p) = build_group(group, field_map, op_whitelist, param_offset + params.len())?;
        if !sql.is_empty() {
            params.append(&mut p);
            parts.push(format!("({sql})"));
        }
    }

    if parts.is_empty() {
        return Ok(("1=1".to_string(), vec![]));
    }

    let logic = match tree.logic { Logic::And => " AND ", Logic::Or => " OR " };
    Ok((parts.join(logic), params))
}

fn build_group(
    group: &Group,
    field_map: &HashMap<&str, &str>,
    op_whitelist: &[&str],
    param_offset: usize,
) -> Result<(String, Vec<String>), BuildError> {
    let mut params: Vec<String> = vec![];
    let mut parts: Vec<String> = vec![];
    for cond in &group.conditions {
        let (sql, mut p) = build_condition(cond, field_map, op_whitelist, param_offset + params.len())?;
        params.append(&mut p);
        parts.push(sql);
    }
    if parts.is_empty() { return Ok(("".to_string(), vec![])); }
    let logic = match group.logic { Logic::And => " AND ", Logic::Or => " OR " };
    Ok((parts.join(logic), params))
}

fn build_condition(
    cond: &Condition,
    field_map: &HashMap<&str, &str>,
    op_whitelist: &[&str],
    param_offset: usize,
) -> Result<(String, Vec<String>), BuildError> {
    let col = field_map.get(cond.field.as_str())
        .ok_or_else(|| BuildError::UnknownField(cond.field.clone()))?;
    if !op_whitelist.contains(&cond.op.as_str()) {
        return Err(BuildError::UnknownOp(cond.op.clone()));
    }
    let n = param_offset + 1;
    // Parameters are bound as text, so compare on the text rendering of the column.
    let (sql, value) = match cond.op.as_str() {
        "contains"              => (format!("({col})::TEXT ILIKE '%' || ${n} || '%' ESCAPE '\\'"), escape_like(&cond.value)),
        "not_contains"          => (format!("({col})::TEXT NOT ILIKE '%' || ${n} || '%' ESCAPE '\\'"), escape_like(&cond.value)),
        "equals" | "is"         => (format!("({col})::TEXT = ${n}"), cond.value.clone()),
        "not_equals" | "is_not" => (format!("({col})::TEXT IS DISTINCT FROM ${n}"), cond.value.clone()),
        "starts_with"           => (format!("({col})::TEXT ILIKE ${n} || '%' ESCAPE '\\'"), escape_like(&cond.value)),
        "before"                => (format!("({col})::DATE < (${n})::DATE"), date_operand(&cond.value)?),
        "after"                 => (format!("({col})::DATE > (${n})::DATE"), date_operand(&cond.value)?),
        "on"                    => (format!("({col})::DATE = (${n})::DATE"), date_operand(&cond.value)?),
        _ => return Err(BuildError::UnknownOp(cond.op.clone())),
    };
    Ok((sql, vec![value]))
}

/// Escape `%`, `_` and `\` so user text matches literally under `ESCAPE '\'`.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Date operators take ISO dates only.
fn date_operand(raw: &str) -> Result<String, BuildError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BuildError::Malformed(format!("'{raw}' is not a date (expected YYYY-MM-DD)")))?;
    Ok(date.format("%Y-%m-%d").to_string())
}
