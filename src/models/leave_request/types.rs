use chrono::NaiveDate;
use serde::Serialize;

use crate::enums::LeaveType;
use crate::forms::validate::{non_empty, parse_date, parse_enum, validate_optional};
use crate::forms::{FieldErrors, FieldKind, FormData, FormField, SelectOption, value};

pub const REASON_MAX: usize = 500;

/// A validated leave request submission.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveInput {
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub reason: Option<String>,
}

impl LeaveInput {
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let employee_id = errors.take(
            "employee_id",
            value(form, "employee_id").parse::<i64>().map_err(|_| "Employee is required".to_string()),
        );
        let leave_type = errors.take("leave_type", parse_enum::<LeaveType>(value(form, "leave_type"), "Leave type"));
        let starts_on = errors.take("starts_on", parse_date(value(form, "starts_on"), "Start date"));
        let ends_on = errors.take("ends_on", parse_date(value(form, "ends_on"), "End date"));
        if let (Some(start), Some(end)) = (starts_on, ends_on) {
            if end < start {
                errors.add("ends_on", "End date must be on or after the start date");
            }
        }
        let reason = value(form, "reason");
        errors.check("reason", validate_optional(reason, "Reason", REASON_MAX));
        errors.into_result()?;

        match (employee_id, leave_type, starts_on, ends_on) {
            (Some(employee_id), Some(leave_type), Some(starts_on), Some(ends_on)) => Ok(LeaveInput {
                employee_id,
                leave_type,
                starts_on,
                ends_on,
                reason: non_empty(reason),
            }),
            _ => Err(FieldErrors::new()),
        }
    }

    /// Calendar days covered, both ends included.
    pub fn days(&self) -> i32 {
        ((self.ends_on - self.starts_on).num_days() + 1) as i32
    }
}

/// Fields of the leave request form, with the tenant's employees to pick from.
pub fn form_fields(employees: &[SelectOption]) -> Vec<FormField> {
    vec![
        FormField::new("employee_id", "Employee", FieldKind::Select)
            .with_options(employees.to_vec())
            .required(),
        FormField::select::<LeaveType>("leave_type", "Leave type").required(),
        FormField::new("starts_on", "Start date", FieldKind::Date).required(),
        FormField::new("ends_on", "End date", FieldKind::Date).required(),
        FormField::new("reason", "Reason", FieldKind::Textarea),
    ]
}

#[derive(Debug, Serialize)]
pub struct LeaveSaved {
    pub id: i64,
    pub status: &'static str,
    pub days: i32,
}
