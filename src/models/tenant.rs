use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;

/// An organisation; every business row belongs to exactly one.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Tenant {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Tenant>, AppError> {
    let tenant = sqlx::query_as::<_, Tenant>("SELECT id, slug, name FROM tenants WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(tenant)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Tenant>, AppError> {
    let tenant = sqlx::query_as::<_, Tenant>("SELECT id, slug, name FROM tenants WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(tenant)
}


/// Every tenant, by name, for the tenant switcher.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Tenant>, AppError> {
    let tenants = sqlx::query_as::<_, Tenant>("SELECT id, slug, name FROM tenants ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(tenants)
}
