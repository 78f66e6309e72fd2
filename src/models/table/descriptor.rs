// src/models/table/descriptor.rs
use std::collections::BTreeMap;

use super::dialog::ConfirmDialog;
use super::effect::Effect;
use super::render::{self, RenderedRow};
use super::{BulkAction, ColumnDefinition, ColumnHeader, FilterSource, Row, TableQuery, row_actions};
use crate::enums::{Enumeration, RecordAction};

/// Declares one entity's table. Implementations hold no state and are built
/// fresh for every request.
pub trait TableDescriptor: Send + Sync {
    /// Stable, URL-safe identifier.
    fn name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Navigation group the table is listed under.
    fn module(&self) -> &'static str;

    /// Unfiltered, unsorted data source.
    fn query(&self) -> TableQuery;

    /// Ordered columns. Called once per [`Table`].
    fn build(&self) -> Vec<ColumnDefinition>;

    /// Filterable key -> where its dropdown values come from.
    fn filters(&self) -> Vec<(&'static str, FilterSource)> {
        vec![]
    }

    fn bulk_actions(&self) -> Vec<RecordAction> {
        vec![]
    }

    fn has_select_column(&self) -> bool {
        false
    }

    /// Actions offered for one row, in menu order.
    fn row_actions(&self, row: &Row) -> Vec<RecordAction>;

    /// What a non-navigation action does to rows. `None` means the table does
    /// not support it.
    fn effect(&self, action: RecordAction) -> Option<Effect> {
        match action {
            RecordAction::Delete => Some(Effect::Delete),
            _ => None,
        }
    }
}

/// A descriptor with its columns and query built.
pub struct Table {
    descriptor: Box<dyn TableDescriptor>,
    columns: Vec<ColumnDefinition>,
    query: TableQuery,
}

impl Table {
    pub fn new(descriptor: Box<dyn TableDescriptor>) -> Self {
        let columns = descriptor.build();
        let query = descriptor.query();
        Table { descriptor, columns, query }
    }

    pub fn descriptor(&self) -> &dyn TableDescriptor {
        self.descriptor.as_ref()
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    pub fn title(&self) -> &'static str {
        self.descriptor.title()
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    pub fn headers(&self) -> Vec<ColumnHeader> {
        self.columns.iter().map(ColumnDefinition::header).collect()
    }

    pub fn sortable_keys(&self) -> Vec<&'static str> {
        self.columns.iter().filter(|c| c.options.sortable).map(|c| c.key).collect()
    }

    pub fn render_row(&self, row: &Row) -> RenderedRow {
        let actions = row_actions(&self.descriptor.row_actions(row));
        RenderedRow {
            id: render::row_id(row),
            cells: self.columns.iter().map(|c| render::render_cell(c, row, &actions)).collect(),
        }
    }

    pub fn bulk_actions(&self) -> Vec<BulkAction> {
        self.descriptor.bulk_actions().into_iter().map(BulkAction::from).collect()
    }

    pub fn allows_bulk(&self, action: RecordAction) -> bool {
        self.descriptor.has_select_column() && self.descriptor.bulk_actions().contains(&action)
    }

    pub fn allows_row_action(&self, row: &Row, action: RecordAction) -> bool {
        self.descriptor.row_actions(row).contains(&action)
    }

    pub fn effect_for(&self, action: RecordAction) -> Option<Effect> {
        if action.is_navigation() {
            return None;
        }
        self.descriptor.effect(action)
    }

    /// One dialog per action this table can apply.
    pub fn dialogs(&self) -> BTreeMap<&'static str, ConfirmDialog> {
        let noun = self.title().to_lowercase();
        RecordAction::CASES
            .iter()
            .filter_map(|&action| {
                let effect = self.effect_for(action)?;
                Some((action.value(), ConfirmDialog::for_action(self.name(), &noun, action, &effect)))
            })
            .collect()
    }
}
