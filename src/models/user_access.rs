use sqlx::PgPool;

use crate::enums::{Enumeration, RecordAction, UserStatus};
use crate::errors::AppError;
use crate::models::table::{
    BadgeMapping, ColumnDefinition, Effect, FilterSource, Row, SortDir, TableDescriptor, TableQuery, Transition,
    row_enum,
};

/// Login accounts and the roles granted to them.
pub struct UserAccessTable;

impl TableDescriptor for UserAccessTable {
    fn name(&self) -> &'static str {
        "user-access"
    }

    fn title(&self) -> &'static str {
        "User Access"
    }

    fn module(&self) -> &'static str {
        "Administration"
    }

    fn query(&self) -> TableQuery {
        TableQuery::from("users", "u")
            .join("LEFT JOIN employees e ON e.id = u.employee_id AND e.tenant_id = u.tenant_id")
            .searchable("name", "u.name")
            .searchable("email", "u.email")
            .field("employee.name", "e.first_name || ' ' || e.last_name")
            .field(
                "roles",
                "(SELECT string_agg(r.name, ', ' ORDER BY r.name) FROM user_roles ur \
                  JOIN roles r ON r.id = ur.role_id WHERE ur.user_id = u.id)",
            )
            .field("status", "u.status")
            .field("last_login_at", "u.last_login_at")
            .filter_with(
                "roles",
                "EXISTS (SELECT 1 FROM user_roles ur JOIN roles r ON r.id = ur.role_id \
                 WHERE ur.user_id = u.id AND r.name = {value})",
            )
            .order_by("name", SortDir::Asc)
    }

    fn build(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::plain("name", "Name").sortable().searchable().always_visible(),
            ColumnDefinition::plain("email", "Email").sortable().searchable(),
            ColumnDefinition::relationship("employee.name", "Employee").sortable(),
            ColumnDefinition::plain("roles", "Roles"),
            ColumnDefinition::badge("status", "Status", BadgeMapping::for_enum::<UserStatus>()),
            ColumnDefinition::datetime("last_login_at", "Last Login").sortable(),
            ColumnDefinition::actions(),
        ]
    }

    fn filters(&self) -> Vec<(&'static str, FilterSource)> {
        vec![
            ("status", FilterSource::enumeration::<UserStatus>()),
            ("roles", FilterSource::Distinct { table: "roles", column: "name" }),
        ]
    }

    fn bulk_actions(&self) -> Vec<RecordAction> {
        vec![RecordAction::Activate, RecordAction::Suspend]
    }

    fn has_select_column(&self) -> bool {
        true
    }

    fn row_actions(&self, row: &Row) -> Vec<RecordAction> {
        row_enum::<UserStatus>(row, "status")
            .unwrap_or(UserStatus::Inactive)
            .actions()
            .to_vec()
    }

    /// Accounts are suspended, never deleted, from this table.
    fn effect(&self, action: RecordAction) -> Option<Effect> {
        UserStatus::transition(action).map(|t| Effect::Transition(Transition::of("status", t)))
    }
}

/// Give an employee a login in `invited` status. Returns `None` when the
/// email is already taken within the tenant.
pub async fn create_for_employee(
    pool: &PgPool,
    tenant_id: i64,
    employee_id: i64,
    name: &str,
    email: &str,
) -> Result<Option<i64>, AppError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (tenant_id, employee_id, name, email, status) VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (tenant_id, email) DO NOTHING RETURNING id",
    )
    .bind(tenant_id)
    .bind(employee_id)
    .bind(name)
    .bind(email)
    .bind(UserStatus::Invited.value())
    .fetch_optional(pool)
    .await?;
    Ok(id)
}
