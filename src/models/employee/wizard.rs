use serde::Serialize;

use crate::enums::{DegreeType, EmploymentType, Enumeration, Gender, MaritalStatus, OnboardingStep};
use crate::forms::{FieldKind, FormField, SelectOption};

/// Field schema of one onboarding step.
#[derive(Debug, Clone, Serialize)]
pub struct StepSchema {
    pub step: &'static str,
    pub label: &'static str,
    pub fields: Vec<FormField>,
}

pub fn step_fields(step: OnboardingStep, departments: &[SelectOption]) -> Vec<FormField> {
    match step {
        OnboardingStep::Personal => vec![
            FormField::new("first_name", "First name", FieldKind::Text).required(),
            FormField::new("last_name", "Last name", FieldKind::Text).required(),
            FormField::new("date_of_birth", "Date of birth", FieldKind::Date),
            FormField::select::<Gender>("gender", "Gender"),
            FormField::select::<MaritalStatus>("marital_status", "Marital status"),
        ],
        OnboardingStep::Contact => vec![
            FormField::new("email", "Email", FieldKind::Email).required(),
            FormField::new("phone", "Phone", FieldKind::Text),
            FormField::new("address_line", "Address", FieldKind::Text),
            FormField::new("city", "City", FieldKind::Text),
            FormField::new("country", "Country", FieldKind::Text),
        ],
        OnboardingStep::Employment => vec![
            FormField::new("department_id", "Department", FieldKind::Select).with_options(departments.to_vec()),
            FormField::new("job_title", "Job title", FieldKind::Text).required(),
            FormField::select::<EmploymentType>("employment_type", "Employment type").required(),
            FormField::new("hired_on", "Hire date", FieldKind::Date).required(),
        ],
        OnboardingStep::Education => vec![
            FormField::select::<DegreeType>("degree_type", "Degree").required(),
            FormField::new("institution", "Institution", FieldKind::Text).required(),
            FormField::new("field_of_study", "Field of study", FieldKind::Text),
            FormField::new("graduated_on", "Graduation date", FieldKind::Date),
        ],
        OnboardingStep::EmergencyContact => vec![
            FormField::new("emergency_contact_name", "Contact name", FieldKind::Text).required(),
            FormField::new("emergency_contact_phone", "Contact phone", FieldKind::Text).required(),
            FormField::new("emergency_contact_relation", "Relationship", FieldKind::Text).required(),
        ],
        OnboardingStep::Account => vec![
            FormField::new("create_account", "Create a system account", FieldKind::Checkbox),
            FormField::new("account_email", "Login email", FieldKind::Email),
        ],
    }
}

/// Every step in wizard order.
pub fn schema(departments: &[SelectOption]) -> Vec<StepSchema> {
    OnboardingStep::CASES
        .iter()
        .map(|&step| StepSchema { step: step.value(), label: step.label(), fields: step_fields(step, departments) })
        .collect()
}

/// Response to a saved step.
#[derive(Debug, Serialize)]
pub struct StepSaved {
    pub employee_id: i64,
    pub step: &'static str,
    /// `None` once the account step completes onboarding.
    pub next: Option<&'static str>,
}

impl StepSaved {
    pub fn new(employee_id: i64, step: OnboardingStep) -> Self {
        StepSaved { employee_id, step: step.value(), next: step.next().map(|s| s.value()) }
    }
}
