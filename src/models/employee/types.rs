use chrono::NaiveDate;
use serde::Serialize;

use crate::enums::{DegreeType, EmployeeStatus, EmploymentType, Enumeration, Gender, MaritalStatus};
use crate::forms::validate::{
    non_empty, parse_date, parse_enum, parse_optional_date, parse_optional_enum, validate_email,
    validate_optional, validate_phone, validate_required,
};
use crate::forms::{FieldErrors, FormData, checked, value};

/// Read a text field, recording required/length errors.
fn text(form: &FormData, errors: &mut FieldErrors, key: &str, label: &str, max: usize, required: bool) -> Option<String> {
    let raw = value(form, key);
    if required {
        errors.check(key, validate_required(raw, label));
    }
    errors.check(key, validate_optional(raw, label, max));
    non_empty(raw)
}

/// Employee as the onboarding wizard sees it between steps.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OnboardingEmployee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub status: String,
}

impl OnboardingEmployee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Wizard steps only apply until the employee leaves `onboarding`.
    pub fn is_onboarding(&self) -> bool {
        EmployeeStatus::from_value(&self.status) == Some(EmployeeStatus::Onboarding)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
}

impl PersonalDetails {
    pub fn parse(form: &FormData, today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let first_name = text(form, &mut errors, "first_name", "First name", 100, true);
        let last_name = text(form, &mut errors, "last_name", "Last name", 100, true);
        let date_of_birth = errors
            .take("date_of_birth", parse_optional_date(value(form, "date_of_birth"), "Date of birth"))
            .flatten();
        if date_of_birth.is_some_and(|dob| dob >= today) {
            errors.add("date_of_birth", "Date of birth must be in the past");
        }
        let gender = errors.take("gender", parse_optional_enum(value(form, "gender"), "Gender")).flatten();
        let marital_status = errors
            .take("marital_status", parse_optional_enum(value(form, "marital_status"), "Marital status"))
            .flatten();
        errors.into_result()?;

        Ok(PersonalDetails {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            date_of_birth,
            gender,
            marital_status,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub email: String,
    pub phone: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl ContactDetails {
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = value(form, "email");
        errors.check("email", validate_email(email));
        let phone = value(form, "phone");
        errors.check("phone", validate_phone(phone, "Phone"));
        let address_line = text(form, &mut errors, "address_line", "Address", 200, false);
        let city = text(form, &mut errors, "city", "City", 100, false);
        let country = text(form, &mut errors, "country", "Country", 100, false);
        errors.into_result()?;

        Ok(ContactDetails {
            email: email.to_lowercase(),
            phone: non_empty(phone),
            address_line,
            city,
            country,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentDetails {
    pub department_id: Option<i64>,
    pub job_title: String,
    pub employment_type: EmploymentType,
    pub hired_on: NaiveDate,
}

impl EmploymentDetails {
    /// Department existence is checked against the tenant by the caller.
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let department_id = match value(form, "department_id") {
            "" => None,
            raw => errors.take("department_id", raw.parse::<i64>().map_err(|_| "Department is not a valid choice".to_string())),
        };
        let job_title = text(form, &mut errors, "job_title", "Job title", 150, true);
        let employment_type = errors.take(
            "employment_type",
            parse_enum::<EmploymentType>(value(form, "employment_type"), "Employment type"),
        );
        let hired_on = errors.take("hired_on", parse_date(value(form, "hired_on"), "Hire date"));
        errors.into_result()?;

        match (employment_type, hired_on) {
            (Some(employment_type), Some(hired_on)) => Ok(EmploymentDetails {
                department_id,
                job_title: job_title.unwrap_or_default(),
                employment_type,
                hired_on,
            }),
            _ => Err(FieldErrors::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationDetails {
    pub degree_type: DegreeType,
    pub institution: String,
    pub field_of_study: Option<String>,
    pub graduated_on: Option<NaiveDate>,
}

impl EducationDetails {
    pub fn parse(form: &FormData, today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let degree_type = errors.take("degree_type", parse_enum::<DegreeType>(value(form, "degree_type"), "Degree"));
        let institution = text(form, &mut errors, "institution", "Institution", 200, true);
        let field_of_study = text(form, &mut errors, "field_of_study", "Field of study", 150, false);
        let graduated_on = errors
            .take("graduated_on", parse_optional_date(value(form, "graduated_on"), "Graduation date"))
            .flatten();
        if graduated_on.is_some_and(|d| d > today) {
            errors.add("graduated_on", "Graduation date cannot be in the future");
        }
        errors.into_result()?;

        let Some(degree_type) = degree_type else {
            return Err(FieldErrors::new());
        };
        Ok(EducationDetails {
            degree_type,
            institution: institution.unwrap_or_default(),
            field_of_study,
            graduated_on,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

impl EmergencyContact {
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = text(form, &mut errors, "emergency_contact_name", "Contact name", 150, true);
        let phone = value(form, "emergency_contact_phone");
        errors.check("emergency_contact_phone", validate_required(phone, "Contact phone"));
        errors.check("emergency_contact_phone", validate_phone(phone, "Contact phone"));
        let relation = text(form, &mut errors, "emergency_contact_relation", "Relationship", 60, true);
        errors.into_result()?;

        Ok(EmergencyContact {
            name: name.unwrap_or_default(),
            phone: phone.to_string(),
            relation: relation.unwrap_or_default(),
        })
    }
}

/// Final step: optionally give the employee a login.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDetails {
    pub create_account: bool,
    /// Login email; falls back to the contact email when blank.
    pub email: Option<String>,
}

impl AccountDetails {
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let create_account = checked(form, "create_account");
        let email = value(form, "account_email");
        if create_account && !email.is_empty() {
            errors.check("account_email", validate_email(email));
        }
        errors.into_result()?;
        Ok(AccountDetails { create_account, email: non_empty(email).map(|e| e.to_lowercase()) })
    }
}
