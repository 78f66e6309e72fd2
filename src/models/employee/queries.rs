use sqlx::PgPool;

use super::types::*;
use crate::enums::{EmployeeStatus, Enumeration};
use crate::errors::AppError;
use crate::forms::SelectOption;

pub async fn find_onboarding(pool: &PgPool, tenant_id: i64, id: i64) -> Result<Option<OnboardingEmployee>, AppError> {
    let employee = sqlx::query_as::<_, OnboardingEmployee>(
        "SELECT id, first_name, last_name, email, status FROM employees \
         WHERE tenant_id = $1 AND id = $2",
    )
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// First wizard step: create the employee in `onboarding` status.
pub async fn create(pool: &PgPool, tenant_id: i64, details: &PersonalDetails) -> Result<i64, AppError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employees (tenant_id, first_name, last_name, date_of_birth, gender, marital_status, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
    )
    .bind(tenant_id)
    .bind(&details.first_name)
    .bind(&details.last_name)
    .bind(details.date_of_birth)
    .bind(details.gender.map(|g| g.value()))
    .bind(details.marital_status.map(|m| m.value()))
    .bind(EmployeeStatus::Onboarding.value())
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update_personal(pool: &PgPool, tenant_id: i64, id: i64, details: &PersonalDetails) -> Result<u64, AppError> {
    let result = sqlx::query(
        "UPDATE employees SET first_name = $3, last_name = $4, date_of_birth = $5, gender = $6, \
                marital_status = $7, updated_at = NOW() \
         WHERE tenant_id = $1 AND id = $2",
    )
    .bind(tenant_id)
    .bind(id)
    .bind(&details.first_name)
    .bind(&details.last_name)
    .bind(details.date_of_birth)
    .bind(details.gender.map(|g| g.value()))
    .bind(details.marital_status.map(|m| m.value()))
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn update_contact(pool: &PgPool, tenant_id: i64, id: i64, contact: &ContactDetails) -> Result<u64, AppError> {
    let result = sqlx::query(
        "UPDATE employees SET email = $3, phone = $4, address_line = $5, city = $6, country = $7, \
                updated_at = NOW() \
         WHERE tenant_id = $1 AND id = $2",
    )
    .bind(tenant_id)
    .bind(id)
    .bind(&contact.email)
    .bind(&contact.phone)
    .bind(&contact.address_line)
    .bind(&contact.city)
    .bind(&contact.country)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn update_employment(pool: &PgPool, tenant_id: i64, id: i64, job: &EmploymentDetails) -> Result<u64, AppError> {
    let result = sqlx::query(
        "UPDATE employees SET department_id = $3, job_title = $4, employment_type = $5, hired_on = $6, \
                updated_at = NOW() \
         WHERE tenant_id = $1 AND id = $2",
    )
    .bind(tenant_id)
    .bind(id)
    .bind(job.department_id)
    .bind(&job.job_title)
    .bind(job.employment_type.value())
    .bind(job.hired_on)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn add_education(pool: &PgPool, tenant_id: i64, id: i64, education: &EducationDetails) -> Result<i64, AppError> {
    let education_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employee_educations (tenant_id, employee_id, degree_type, institution, field_of_study, graduated_on) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(tenant_id)
    .bind(id)
    .bind(education.degree_type.value())
    .bind(&education.institution)
    .bind(&education.field_of_study)
    .bind(education.graduated_on)
    .fetch_one(pool)
    .await?;
    Ok(education_id)
}

pub async fn update_emergency_contact(
    pool: &PgPool,
    tenant_id: i64,
    id: i64,
    contact: &EmergencyContact,
) -> Result<u64, AppError> {
    let result = sqlx::query(
        "UPDATE employees SET emergency_contact_name = $3, emergency_contact_phone = $4, \
                emergency_contact_relation = $5, updated_at = NOW() \
         WHERE tenant_id = $1 AND id = $2",
    )
    .bind(tenant_id)
    .bind(id)
    .bind(&contact.name)
    .bind(&contact.phone)
    .bind(&contact.relation)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Last wizard step: `onboarding` becomes `active`. Other states are left alone.
pub async fn finish_onboarding(pool: &PgPool, tenant_id: i64, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query(
        "UPDATE employees SET status = $3, updated_at = NOW() \
         WHERE tenant_id = $1 AND id = $2 AND status = $4",
    )
    .bind(tenant_id)
    .bind(id)
    .bind(EmployeeStatus::Active.value())
    .bind(EmployeeStatus::Onboarding.value())
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn exists(pool: &PgPool, tenant_id: i64, id: i64) -> Result<bool, AppError> {
    let found = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM employees WHERE tenant_id = $1 AND id = $2)",
    )
    .bind(tenant_id)
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(found)
}

/// Employees a leave request can be filed for, by last name.
pub async fn select_options(pool: &PgPool, tenant_id: i64) -> Result<Vec<SelectOption>, AppError> {
    let rows = sqlx::query_as::<_, (i64, String)>(
        "SELECT id, first_name || ' ' || last_name FROM employees \
         WHERE tenant_id = $1 AND status <> $2 \
         ORDER BY last_name, first_name",
    )
    .bind(tenant_id)
    .bind(EmployeeStatus::Terminated.value())
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| SelectOption { value: id.to_string(), label: name })
        .collect())
}
