use crate::enums::{RecordAction, ScheduleStatus, ShiftType};
use crate::models::table::{
    BadgeMapping, ColumnDefinition, Effect, FilterSource, Row, SortDir, TableDescriptor, TableQuery, Transition,
    row_enum,
};

pub struct ScheduleTable;

impl TableDescriptor for ScheduleTable {
    fn name(&self) -> &'static str {
        "schedules"
    }

    fn title(&self) -> &'static str {
        "Schedules"
    }

    fn module(&self) -> &'static str {
        "Workforce"
    }

    fn query(&self) -> TableQuery {
        TableQuery::from("schedules", "s")
            .join("LEFT JOIN departments d ON d.id = s.department_id AND d.tenant_id = s.tenant_id")
            .searchable("name", "s.name")
            .field("department.name", "d.name")
            .field("shift_type", "s.shift_type")
            .field("starts_on", "s.starts_on")
            .field("ends_on", "s.ends_on")
            .field("status", "s.status")
            .order_by("starts_on", SortDir::Desc)
    }

    fn build(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::plain("name", "Name").sortable().searchable().always_visible(),
            ColumnDefinition::relationship("department.name", "Department").sortable(),
            ColumnDefinition::badge("shift_type", "Shift", BadgeMapping::for_enum::<ShiftType>()),
            ColumnDefinition::date("starts_on", "Starts").sortable(),
            ColumnDefinition::date("ends_on", "Ends").sortable(),
            ColumnDefinition::badge("status", "Status", BadgeMapping::for_enum::<ScheduleStatus>()),
            ColumnDefinition::actions(),
        ]
    }

    fn filters(&self) -> Vec<(&'static str, FilterSource)> {
        vec![
            ("status", FilterSource::enumeration::<ScheduleStatus>()),
            ("shift_type", FilterSource::enumeration::<ShiftType>()),
        ]
    }

    fn bulk_actions(&self) -> Vec<RecordAction> {
        vec![RecordAction::Publish, RecordAction::Archive, RecordAction::Delete]
    }

    fn has_select_column(&self) -> bool {
        true
    }

    fn row_actions(&self, row: &Row) -> Vec<RecordAction> {
        match row_enum::<ScheduleStatus>(row, "status") {
            Some(status) => status.actions().to_vec(),
            None => vec![RecordAction::View],
        }
    }

    fn effect(&self, action: RecordAction) -> Option<Effect> {
        if action == RecordAction::Delete {
            return Some(Effect::Delete);
        }
        let transition = Transition::of("status", ScheduleStatus::transition(action)?);
        Some(Effect::Transition(match action {
            RecordAction::Publish => transition.stamp("published_at"),
            _ => transition,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(status: &str) -> Vec<&'static str> {
        let row = json!({"status": status});
        ScheduleTable
            .row_actions(row.as_object().unwrap())
            .into_iter()
            .map(|a| crate::enums::Enumeration::value(a))
            .collect()
    }

    #[test]
    fn actions_per_status() {
        assert_eq!(names("draft"), vec!["view", "edit", "publish", "delete"]);
        assert_eq!(names("published"), vec!["view", "archive"]);
        assert_eq!(names("archived"), vec!["view", "delete"]);
        assert_eq!(names("retired"), vec!["view"]);
    }

    #[test]
    fn publish_stamps_published_at() {
        match ScheduleTable.effect(RecordAction::Publish) {
            Some(Effect::Transition(t)) => {
                assert_eq!(t.from, vec!["draft"]);
                assert_eq!(t.stamp, Some("published_at"));
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }
}
