use sqlx::PgPool;

use super::types::LeaveInput;
use crate::enums::{Enumeration, LeaveStatus};
use crate::errors::AppError;

pub async fn create(pool: &PgPool, tenant_id: i64, input: &LeaveInput) -> Result<i64, AppError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO leave_requests (tenant_id, employee_id, leave_type, starts_on, ends_on, days, reason, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
    )
    .bind(tenant_id)
    .bind(input.employee_id)
    .bind(input.leave_type.value())
    .bind(input.starts_on)
    .bind(input.ends_on)
    .bind(input.days())
    .bind(&input.reason)
    .bind(LeaveStatus::Pending.value())
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Stored status, `None` when the request does not exist for the tenant.
pub async fn find_status(pool: &PgPool, tenant_id: i64, id: i64) -> Result<Option<String>, AppError> {
    let status = sqlx::query_scalar::<_, String>(
        "SELECT status FROM leave_requests WHERE tenant_id = $1 AND id = $2",
    )
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(status)
}

/// Rewrite a request that is still pending. Returns rows changed (0 once reviewed).
pub async fn update_pending(pool: &PgPool, tenant_id: i64, id: i64, input: &LeaveInput) -> Result<u64, AppError> {
    let result = sqlx::query(
        "UPDATE leave_requests SET employee_id = $3, leave_type = $4, starts_on = $5, ends_on = $6, \
                days = $7, reason = $8, updated_at = NOW() \
         WHERE tenant_id = $1 AND id = $2 AND status = $9",
    )
    .bind(tenant_id)
    .bind(id)
    .bind(input.employee_id)
    .bind(input.leave_type.value())
    .bind(input.starts_on)
    .bind(input.ends_on)
    .bind(input.days())
    .bind(&input.reason)
    .bind(LeaveStatus::Pending.value())
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
