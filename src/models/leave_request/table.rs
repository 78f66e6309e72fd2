use crate::enums::{LeaveStatus, LeaveType, RecordAction};
use crate::models::table::{
    BadgeMapping, ColumnDefinition, Effect, FilterSource, Note, Row, SortDir, TableDescriptor, TableQuery,
    Transition, row_enum,
};

use super::types::REASON_MAX;

pub struct LeaveRequestTable;

impl TableDescriptor for LeaveRequestTable {
    fn name(&self) -> &'static str {
        "leave-requests"
    }

    fn title(&self) -> &'static str {
        "Leave Requests"
    }

    fn module(&self) -> &'static str {
        "HR"
    }

    fn query(&self) -> TableQuery {
        TableQuery::from("leave_requests", "l")
            .join("LEFT JOIN employees e ON e.id = l.employee_id AND e.tenant_id = l.tenant_id")
            .join("LEFT JOIN departments d ON d.id = e.department_id")
            .searchable("employee.name", "e.first_name || ' ' || e.last_name")
            .field("employee.department", "d.name")
            .field("leave_type", "l.leave_type")
            .field("starts_on", "l.starts_on")
            .field("ends_on", "l.ends_on")
            .field("days", "l.days")
            .field("status", "l.status")
            .searchable("reason", "l.reason")
            .field("created_at", "l.created_at")
            .order_by("created_at", SortDir::Desc)
    }

    fn build(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::relationship("employee.name", "Employee").sortable().searchable(),
            ColumnDefinition::badge("leave_type", "Type", BadgeMapping::for_enum::<LeaveType>()),
            ColumnDefinition::date("starts_on", "From").sortable(),
            ColumnDefinition::date("ends_on", "To").sortable(),
            ColumnDefinition::plain("days", "Days").sortable(),
            ColumnDefinition::badge("status", "Status", BadgeMapping::for_enum::<LeaveStatus>()),
            ColumnDefinition::datetime("created_at", "Requested").sortable().hidden(),
            ColumnDefinition::actions(),
        ]
    }

    fn filters(&self) -> Vec<(&'static str, FilterSource)> {
        vec![
            ("status", FilterSource::enumeration::<LeaveStatus>()),
            ("leave_type", FilterSource::enumeration::<LeaveType>()),
            ("employee.department", FilterSource::Distinct { table: "departments", column: "name" }),
        ]
    }

    fn bulk_actions(&self) -> Vec<RecordAction> {
        vec![RecordAction::Approve, RecordAction::Reject, RecordAction::Delete]
    }

    fn has_select_column(&self) -> bool {
        true
    }

    fn row_actions(&self, row: &Row) -> Vec<RecordAction> {
        match row_enum::<LeaveStatus>(row, "status") {
            Some(status) => status.actions().to_vec(),
            None => vec![RecordAction::View],
        }
    }

    fn effect(&self, action: RecordAction) -> Option<Effect> {
        if action == RecordAction::Delete {
            return Some(Effect::Delete);
        }
        let transition = Transition::of("status", LeaveStatus::transition(action)?);
        let transition = match action {
            RecordAction::Approve => transition.stamp("reviewed_at"),
            RecordAction::Reject => transition.stamp("reviewed_at").note(Note {
                field: "reason",
                column: "rejection_reason",
                label: "Reason",
                required: true,
                max_len: REASON_MAX,
            }),
            _ => transition,
        };
        Some(Effect::Transition(transition))
    }
}
