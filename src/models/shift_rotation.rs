use crate::enums::{RecordAction, RotationFrequency};
use crate::models::table::render::lookup;
use crate::models::table::{
    Badge, BadgeMapping, ColumnDefinition, Effect, FilterSource, Row, SortDir, TableDescriptor, TableQuery,
    Transition,
};

pub struct ShiftRotationTable;

fn toggle(from: &'static str, to: &'static str) -> Effect {
    Effect::Transition(Transition::new("is_active", vec![from], to).cast("BOOLEAN"))
}

impl TableDescriptor for ShiftRotationTable {
    fn name(&self) -> &'static str {
        "shift-rotations"
    }

    fn title(&self) -> &'static str {
        "Shift Rotations"
    }

    fn module(&self) -> &'static str {
        "Workforce"
    }

    fn query(&self) -> TableQuery {
        TableQuery::from("shift_rotations", "sr")
            .join("LEFT JOIN departments d ON d.id = sr.department_id AND d.tenant_id = sr.tenant_id")
            .searchable("name", "sr.name")
            .field("department.name", "d.name")
            .field("frequency", "sr.frequency")
            .searchable("shift_pattern", "sr.shift_pattern")
            .field("starts_on", "sr.starts_on")
            .field("is_active", "sr.is_active")
            .order_by("name", SortDir::Asc)
    }

    fn build(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::plain("name", "Name").sortable().searchable().always_visible(),
            ColumnDefinition::relationship("department.name", "Department").sortable(),
            ColumnDefinition::badge("frequency", "Frequency", BadgeMapping::for_enum::<RotationFrequency>()),
            ColumnDefinition::plain("shift_pattern", "Pattern").searchable(),
            ColumnDefinition::date("starts_on", "Starts").sortable(),
            ColumnDefinition::badge(
                "is_active",
                "Active",
                BadgeMapping::yes_no(Badge::new("green", "check-circle", "Active"), Badge::new("gray", "pause-circle", "Inactive")),
            ),
            ColumnDefinition::actions(),
        ]
    }

    fn filters(&self) -> Vec<(&'static str, FilterSource)> {
        vec![("frequency", FilterSource::enumeration::<RotationFrequency>())]
    }

    fn bulk_actions(&self) -> Vec<RecordAction> {
        vec![RecordAction::Activate, RecordAction::Deactivate, RecordAction::Delete]
    }

    fn has_select_column(&self) -> bool {
        true
    }

    fn row_actions(&self, row: &Row) -> Vec<RecordAction> {
        let active = lookup(row, "is_active").and_then(|v| v.as_bool()).unwrap_or(false);
        let toggle = if active { RecordAction::Deactivate } else { RecordAction::Activate };
        vec![RecordAction::Edit, toggle, RecordAction::Delete]
    }

    fn effect(&self, action: RecordAction) -> Option<Effect> {
        match action {
            RecordAction::Activate => Some(toggle("false", "true")),
            RecordAction::Deactivate => Some(toggle("true", "false")),
            RecordAction::Delete => Some(Effect::Delete),
            _ => None,
        }
    }
}
