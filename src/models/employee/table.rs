use crate::enums::{EmployeeStatus, EmploymentType, RecordAction};
use crate::models::table::{
    BadgeMapping, ColumnDefinition, FilterSource, Row, SortDir, TableDescriptor, TableQuery,
};

pub struct EmployeeTable;

impl TableDescriptor for EmployeeTable {
    fn name(&self) -> &'static str {
        "employees"
    }

    fn title(&self) -> &'static str {
        "Employees"
    }

    fn module(&self) -> &'static str {
        "HR"
    }

    fn query(&self) -> TableQuery {
        TableQuery::from("employees", "e")
            .join("LEFT JOIN departments d ON d.id = e.department_id AND d.tenant_id = e.tenant_id")
            .searchable("name", "e.first_name || ' ' || e.last_name")
            .searchable("email", "e.email")
            .field("department.name", "d.name")
            .searchable("job_title", "e.job_title")
            .field("employment_type", "e.employment_type")
            .field("status", "e.status")
            .field("hired_on", "e.hired_on")
            .order_by("name", SortDir::Asc)
    }

    fn build(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::plain("name", "Name").sortable().searchable().always_visible(),
            ColumnDefinition::plain("email", "Email").sortable().searchable(),
            ColumnDefinition::relationship("department.name", "Department").sortable(),
            ColumnDefinition::plain("job_title", "Job Title").searchable(),
            ColumnDefinition::badge("employment_type", "Type", BadgeMapping::for_enum::<EmploymentType>()),
            ColumnDefinition::badge("status", "Status", BadgeMapping::for_enum::<EmployeeStatus>()),
            ColumnDefinition::date("hired_on", "Hired").sortable(),
            ColumnDefinition::actions(),
        ]
    }

    fn filters(&self) -> Vec<(&'static str, FilterSource)> {
        vec![
            ("employment_type", FilterSource::enumeration::<EmploymentType>()),
            ("status", FilterSource::enumeration::<EmployeeStatus>()),
            ("department.name", FilterSource::Distinct { table: "departments", column: "name" }),
        ]
    }

    fn bulk_actions(&self) -> Vec<RecordAction> {
        vec![RecordAction::Delete]
    }

    fn has_select_column(&self) -> bool {
        true
    }

    fn row_actions(&self, _row: &Row) -> Vec<RecordAction> {
        vec![RecordAction::View, RecordAction::Edit, RecordAction::Delete]
    }
}
