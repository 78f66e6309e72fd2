use crate::enums::{ProgramStatus, RecordAction};
use crate::models::table::{
    BadgeMapping, ColumnDefinition, Effect, FilterSource, Row, SortDir, TableDescriptor, TableQuery, Transition,
};

/// Training programs run by a department.
pub struct ProgramTable;

impl TableDescriptor for ProgramTable {
    fn name(&self) -> &'static str {
        "programs"
    }

    fn title(&self) -> &'static str {
        "Programs"
    }

    fn module(&self) -> &'static str {
        "HR"
    }

    fn query(&self) -> TableQuery {
        TableQuery::from("programs", "p")
            .join("LEFT JOIN departments d ON d.id = p.department_id AND d.tenant_id = p.tenant_id")
            .searchable("name", "p.name")
            .searchable("code", "p.code")
            .field("department.name", "d.name")
            .field("status", "p.status")
            .field("starts_on", "p.starts_on")
            .field("ends_on", "p.ends_on")
            .field("capacity", "p.capacity")
            .order_by("name", SortDir::Asc)
    }

    fn build(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::plain("name", "Name").sortable().searchable().always_visible(),
            ColumnDefinition::plain("code", "Code").sortable().searchable(),
            ColumnDefinition::relationship("department.name", "Department").sortable(),
            ColumnDefinition::badge("status", "Status", BadgeMapping::for_enum::<ProgramStatus>()),
            ColumnDefinition::date("starts_on", "Starts").sortable(),
            ColumnDefinition::date("ends_on", "Ends").sortable(),
            ColumnDefinition::plain("capacity", "Capacity").sortable(),
            ColumnDefinition::actions(),
        ]
    }

    fn filters(&self) -> Vec<(&'static str, FilterSource)> {
        vec![("status", FilterSource::enumeration::<ProgramStatus>())]
    }

    fn bulk_actions(&self) -> Vec<RecordAction> {
        vec![RecordAction::Archive, RecordAction::Delete]
    }

    fn has_select_column(&self) -> bool {
        true
    }

    fn row_actions(&self, _row: &Row) -> Vec<RecordAction> {
        vec![RecordAction::View, RecordAction::Edit, RecordAction::Delete]
    }

    fn effect(&self, action: RecordAction) -> Option<Effect> {
        match action {
            RecordAction::Delete => Some(Effect::Delete),
            _ => ProgramStatus::transition(action).map(|t| Effect::Transition(Transition::of("status", t))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::Table;

    #[test]
    fn archive_skips_already_archived() {
        match ProgramTable.effect(RecordAction::Archive) {
            Some(Effect::Transition(t)) => {
                assert_eq!(t.to, "archived");
                assert!(!t.from.contains(&"archived"));
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn bulk_menu_lists_archive_then_delete() {
        let table = Table::new(Box::new(ProgramTable));
        let values: Vec<_> = table.bulk_actions().into_iter().map(|b| b.value).collect();
        assert_eq!(values, vec!["archive", "delete"]);
    }
}
