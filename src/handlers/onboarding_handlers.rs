use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::config::AppConfig;
use crate::enums::{Enumeration, OnboardingStep};
use crate::errors::AppError;
use crate::forms::{FieldErrors, FormData, SelectOption, value};
use crate::models::employee::wizard::{self, StepSaved};
use crate::models::employee::{
    self, AccountDetails, ContactDetails, EducationDetails, EmergencyContact, EmploymentDetails,
    OnboardingEmployee, PersonalDetails,
};
use crate::models::{department, user_access};
use crate::tenancy::current_tenant;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// GET /onboarding/steps: field schema of every wizard step.
pub async fn steps(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let tenant = current_tenant(&session, &pool, &config).await?;
    let departments: Vec<SelectOption> = department::find_all(&pool, tenant.id)
        .await?
        .into_iter()
        .map(SelectOption::from)
        .collect();
    Ok(HttpResponse::Ok().json(wizard::schema(&departments)))
}

/// POST /onboarding/personal: first step, creates the employee.
pub async fn start(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, value(&form, "csrf_token"))?;
    let tenant = current_tenant(&session, &pool, &config).await?;

    let details = PersonalDetails::parse(&form, today())?;
    let id = employee::create(&pool, tenant.id, &details).await?;
    log::info!("Onboarding started for employee {id} in tenant {}", tenant.slug);

    Ok(HttpResponse::Created().json(StepSaved::new(id, OnboardingStep::Personal)))
}

/// POST /onboarding/{employee_id}/{step}
pub async fn save_step(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<(i64, String)>,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, value(&form, "csrf_token"))?;
    let (employee_id, step) = path.into_inner();
    let step = OnboardingStep::from_value(&step).ok_or(AppError::NotFound)?;
    let tenant = current_tenant(&session, &pool, &config).await?;
    let employee = employee::find_onboarding(&pool, tenant.id, employee_id)
        .await?
        .ok_or(AppError::NotFound)?;
    if !employee.is_onboarding() {
        return Err(FieldErrors::single("status", "Onboarding is already complete for this employee").into());
    }

    match step {
        OnboardingStep::Personal => {
            let details = PersonalDetails::parse(&form, today())?;
            employee::update_personal(&pool, tenant.id, employee_id, &details).await?;
        }
        OnboardingStep::Contact => {
            let contact = ContactDetails::parse(&form)?;
            employee::update_contact(&pool, tenant.id, employee_id, &contact).await?;
        }
        OnboardingStep::Employment => {
            let job = EmploymentDetails::parse(&form)?;
            if let Some(department_id) = job.department_id {
                if !department::exists(&pool, tenant.id, department_id).await? {
                    return Err(FieldErrors::single("department_id", "Department does not exist").into());
                }
            }
            employee::update_employment(&pool, tenant.id, employee_id, &job).await?;
        }
        OnboardingStep::Education => {
            let education = EducationDetails::parse(&form, today())?;
            employee::add_education(&pool, tenant.id, employee_id, &education).await?;
        }
        OnboardingStep::EmergencyContact => {
            let contact = EmergencyContact::parse(&form)?;
            employee::update_emergency_contact(&pool, tenant.id, employee_id, &contact).await?;
        }
        OnboardingStep::Account => {
            let account = AccountDetails::parse(&form)?;
            if account.create_account {
                open_account(&pool, tenant.id, &employee, account).await?;
            }
            employee::finish_onboarding(&pool, tenant.id, employee_id).await?;
            log::info!("Onboarding completed for employee {employee_id}");
        }
    }

    Ok(HttpResponse::Ok().json(StepSaved::new(employee_id, step)))
}

/// Create the employee's login, defaulting to the contact email.
async fn open_account(
    pool: &PgPool,
    tenant_id: i64,
    employee: &OnboardingEmployee,
    account: AccountDetails,
) -> Result<i64, AppError> {
    let Some(email) = account.email.or_else(|| employee.email.clone()) else {
        return Err(FieldErrors::single("account_email", "Login email is required").into());
    };
    user_access::create_for_employee(pool, tenant_id, employee.id, &employee.full_name(), &email)
        .await?
        .ok_or_else(|| FieldErrors::single("account_email", "An account with this email already exists").into())
}
