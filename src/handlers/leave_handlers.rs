use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::config::AppConfig;
use crate::enums::{Enumeration, LeaveStatus};
use crate::errors::AppError;
use crate::forms::{FieldErrors, FormData, value};
use crate::models::{employee, leave_request};
use crate::models::leave_request::{LeaveInput, LeaveSaved};
use crate::tenancy::current_tenant;

/// Validate a submission and confirm the employee belongs to the tenant.
async fn validated(pool: &PgPool, tenant_id: i64, form: &FormData) -> Result<LeaveInput, AppError> {
    let input = LeaveInput::parse(form)?;
    if !employee::exists(pool, tenant_id, input.employee_id).await? {
        return Err(FieldErrors::single("employee_id", "Employee does not exist").into());
    }
    Ok(input)
}

/// GET /leave-requests/form: field schema with the tenant's employees.
pub async fn form(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let tenant = current_tenant(&session, &pool, &config).await?;
    let employees = employee::select_options(&pool, tenant.id).await?;
    Ok(HttpResponse::Ok().json(leave_request::form_fields(&employees)))
}

/// POST /leave-requests
pub async fn create(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, value(&form, "csrf_token"))?;
    let tenant = current_tenant(&session, &pool, &config).await?;

    let input = validated(&pool, tenant.id, &form).await?;
    let id = leave_request::create(&pool, tenant.id, &input).await?;
    log::info!("Leave request {id} filed for employee {} ({} day(s))", input.employee_id, input.days());

    Ok(HttpResponse::Created().json(LeaveSaved { id, status: LeaveStatus::Pending.value(), days: input.days() }))
}

/// POST /leave-requests/{id}: only pending requests may change.
pub async fn update(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, value(&form, "csrf_token"))?;
    let id = path.into_inner();
    let tenant = current_tenant(&session, &pool, &config).await?;

    let status = leave_request::find_status(&pool, tenant.id, id).await?.ok_or(AppError::NotFound)?;
    if !LeaveStatus::from_value(&status).is_some_and(LeaveStatus::is_editable) {
        return Err(not_editable());
    }

    let input = validated(&pool, tenant.id, &form).await?;
    if leave_request::update_pending(&pool, tenant.id, id, &input).await? == 0 {
        // Reviewed between the status check and the update.
        return Err(not_editable());
    }
    Ok(HttpResponse::Ok().json(LeaveSaved { id, status: LeaveStatus::Pending.value(), days: input.days() }))
}

fn not_editable() -> AppError {
    FieldErrors::single("status", "Only pending leave requests can be changed").into()
}
