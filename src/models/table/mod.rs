//! Declarative table descriptors and the engine that turns them into pages,
//! exports, and row updates.
//!
//! A descriptor (see [`descriptor::TableDescriptor`]) only *declares* things:
//! its query source, its columns, filters, bulk actions, and which actions a
//! given row offers. Everything that touches the database lives in [`engine`].

use serde::Serialize;

use crate::enums::{Enumeration, RecordAction};

pub mod descriptor;
pub mod dialog;
pub mod effect;
pub mod engine;
pub mod export;
pub mod filter;
pub mod query;
pub mod registry;
pub mod render;
pub mod request;

pub use descriptor::{Table, TableDescriptor};
pub use effect::{Effect, Note, Transition};
pub use filter::{FilterTree, SortDir, SortSpec};
pub use query::TableQuery;
pub use request::TableRequest;

/// One fetched row: field key -> JSON value, as produced by the query source.
pub type Row = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl Badge {
    pub const fn new(color: &'static str, icon: &'static str, label: &'static str) -> Self {
        Badge { color, icon, label }
    }

    pub const fn unknown() -> Self {
        Badge::new("gray", "circle-help", "Unknown")
    }

    pub fn of<E: Enumeration>(case: E) -> Self {
        Badge::new(case.color(), case.icon(), case.label())
    }
}

/// Raw value -> badge lookup with a fallback entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeMapping {
    entries: Vec<(&'static str, Badge)>,
    default: Badge,
}

impl BadgeMapping {
    pub fn new(default: Badge) -> Self {
        BadgeMapping { entries: vec![], default }
    }

    pub fn with(mut self, value: &'static str, badge: Badge) -> Self {
        self.entries.push((value, badge));
        self
    }

    /// One entry per enumeration case; unknown values fall back to [`Badge::unknown`].
    pub fn for_enum<E: Enumeration>() -> Self {
        E::CASES.iter().fold(BadgeMapping::new(Badge::unknown()), |mapping, case| {
            mapping.with(case.value(), Badge::of(*case))
        })
    }

    /// Badges for boolean columns.
    pub fn yes_no(yes: Badge, no: Badge) -> Self {
        BadgeMapping::new(no).with("true", yes).with("false", no)
    }

    pub fn resolve(&self, value: Option<&str>) -> &Badge {
        value
            .and_then(|v| self.entries.iter().find(|(key, _)| *key == v))
            .map(|(_, badge)| badge)
            .unwrap_or(&self.default)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    Plain,
    Date { format: &'static str },
    Badge(BadgeMapping),
    /// Value reached through a joined relation; missing rows render `placeholder`.
    Relationship { placeholder: &'static str },
    Action,
}

impl ColumnKind {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Plain => "plain",
            ColumnKind::Date { .. } => "date",
            ColumnKind::Badge(_) => "badge",
            ColumnKind::Relationship { .. } => "relationship",
            ColumnKind::Action => "action",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnOptions {
    pub sortable: bool,
    pub searchable: bool,
    pub toggleable: bool,
    pub hidden: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        ColumnOptions { sortable: false, searchable: false, toggleable: true, hidden: false }
    }
}

pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";
pub const ACTIONS_KEY: &str = "actions";

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ColumnKind,
    pub options: ColumnOptions,
}

impl ColumnDefinition {
    fn new(key: &'static str, title: &'static str, kind: ColumnKind) -> Self {
        ColumnDefinition { key, title, kind, options: ColumnOptions::default() }
    }

    pub fn plain(key: &'static str, title: &'static str) -> Self {
        Self::new(key, title, ColumnKind::Plain)
    }

    pub fn date(key: &'static str, title: &'static str) -> Self {
        Self::new(key, title, ColumnKind::Date { format: DEFAULT_DATE_FORMAT })
    }

    pub fn datetime(key: &'static str, title: &'static str) -> Self {
        Self::new(key, title, ColumnKind::Date { format: "%b %-d, %Y %H:%M" })
    }

    pub fn badge(key: &'static str, title: &'static str, mapping: BadgeMapping) -> Self {
        Self::new(key, title, ColumnKind::Badge(mapping))
    }

    pub fn relationship(key: &'static str, title: &'static str) -> Self {
        Self::new(key, title, ColumnKind::Relationship { placeholder: render::RELATION_PLACEHOLDER })
    }

    pub fn actions() -> Self {
        let mut column = Self::new(ACTIONS_KEY, "Actions", ColumnKind::Action);
        column.options.toggleable = false;
        column
    }

    pub fn sortable(mut self) -> Self {
        self.options.sortable = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.options.searchable = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.options.hidden = true;
        self
    }

    pub fn always_visible(mut self) -> Self {
        self.options.toggleable = false;
        self
    }

    pub fn header(&self) -> ColumnHeader {
        ColumnHeader {
            key: self.key,
            title: self.title,
            kind: self.kind.name(),
            options: self.options.clone(),
        }
    }
}

/// Column description sent to the client.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeader {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: &'static str,
    #[serde(flatten)]
    pub options: ColumnOptions,
}

/// One entry in a filter dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
    pub value: String,
}

impl FilterOption {
    /// Enumeration cases, in declaration order.
    pub fn from_enum<E: Enumeration>() -> Vec<FilterOption> {
        E::CASES
            .iter()
            .map(|c| FilterOption {
                id: c.value().to_string(),
                name: c.label().to_string(),
                value: c.value().to_string(),
            })
            .collect()
    }

    /// Plain values; the caller decides the order.
    pub fn from_values(values: Vec<String>) -> Vec<FilterOption> {
        values
            .into_iter()
            .map(|v| FilterOption { id: v.clone(), name: v.clone(), value: v })
            .collect()
    }
}

/// Where a filter dropdown gets its values.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSource {
    Options(Vec<FilterOption>),
    /// Distinct non-null values of `table.column` for the tenant, alphabetical.
    Distinct { table: &'static str, column: &'static str },
}

impl FilterSource {
    pub fn enumeration<E: Enumeration>() -> Self {
        FilterSource::Options(FilterOption::from_enum::<E>())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkAction {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub variant: &'static str,
}

impl From<RecordAction> for BulkAction {
    fn from(action: RecordAction) -> Self {
        BulkAction {
            label: action.label(),
            value: action.value(),
            icon: action.icon(),
            variant: action.variant(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowAction {
    pub name: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl From<RecordAction> for RowAction {
    fn from(action: RecordAction) -> Self {
        RowAction { name: action.value(), icon: action.icon(), label: action.label() }
    }
}

/// A row's stored value for `key` as an enumeration case, if it is one.
pub fn row_enum<E: Enumeration>(row: &Row, key: &str) -> Option<E> {
    render::lookup(row, key)?.as_str().and_then(E::from_value)
}

/// Map a list of record actions to row actions, preserving order.
pub fn row_actions(actions: &[RecordAction]) -> Vec<RowAction> {
    actions.iter().copied().map(RowAction::from).collect()
}
