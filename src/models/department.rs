use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::forms::SelectOption;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

impl From<Department> for SelectOption {
    fn from(d: Department) -> Self {
        SelectOption { value: d.id.to_string(), label: d.name }
    }
}

/// A tenant's departments, alphabetical.
pub async fn find_all(pool: &PgPool, tenant_id: i64) -> Result<Vec<Department>, AppError> {
    let departments = sqlx::query_as::<_, Department>(
        "SELECT id, name FROM departments WHERE tenant_id = $1 ORDER BY name",
    )
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(departments)
}

pub async fn exists(pool: &PgPool, tenant_id: i64, id: i64) -> Result<bool, AppError> {
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM departments WHERE tenant_id = $1 AND id = $2)",
    )
    .bind(tenant_id)
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(found)
}
