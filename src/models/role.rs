use crate::enums::RecordAction;
use crate::models::table::{Badge, BadgeMapping, ColumnDefinition, Row, SortDir, TableDescriptor, TableQuery};
use crate::models::table::render::lookup;

/// Roles are data here; enforcement belongs to the auth layer in front of the app.
pub struct RoleTable;

impl RoleTable {
    fn is_system(row: &Row) -> bool {
        lookup(row, "is_system").and_then(|v| v.as_bool()).unwrap_or(false)
    }
}

impl TableDescriptor for RoleTable {
    fn name(&self) -> &'static str {
        "roles"
    }

    fn title(&self) -> &'static str {
        "Roles"
    }

    fn module(&self) -> &'static str {
        "Administration"
    }

    fn query(&self) -> TableQuery {
        TableQuery::from("roles", "r")
            .searchable("name", "r.name")
            .searchable("slug", "r.slug")
            .searchable("description", "r.description")
            .field("permissions_count", "(SELECT COUNT(*) FROM role_permissions rp WHERE rp.role_id = r.id)")
            .field("users_count", "(SELECT COUNT(*) FROM user_roles ur WHERE ur.role_id = r.id)")
            .field("is_system", "r.is_system")
            .field("created_at", "r.created_at")
            .order_by("name", SortDir::Asc)
    }

    fn build(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::plain("name", "Name").sortable().searchable().always_visible(),
            ColumnDefinition::plain("slug", "Slug").sortable(),
            ColumnDefinition::plain("description", "Description").searchable(),
            ColumnDefinition::plain("permissions_count", "Permissions").sortable(),
            ColumnDefinition::plain("users_count", "Users").sortable(),
            ColumnDefinition::badge(
                "is_system",
                "Type",
                BadgeMapping::yes_no(Badge::new("purple", "shield", "System"), Badge::new("gray", "user-cog", "Custom")),
            ),
            ColumnDefinition::date("created_at", "Created").sortable(),
            ColumnDefinition::actions(),
        ]
    }

    fn row_actions(&self, row: &Row) -> Vec<RecordAction> {
        if Self::is_system(row) {
            vec![RecordAction::View]
        } else {
            vec![RecordAction::View, RecordAction::Edit, RecordAction::Delete]
        }
    }
}
