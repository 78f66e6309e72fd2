//! Field validators. Each returns `Some(message)` when the input is rejected.

use chrono::NaiveDate;

use crate::enums::Enumeration;

pub fn validate_required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{label} is required"));
    }
    None
}

/// Optional free text with a maximum length.
pub fn validate_optional(value: &str, label: &str, max: usize) -> Option<String> {
    if value.trim().chars().count() > max {
        return Some(format!("{label} must be at most {max} characters"));
    }
    None
}

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Phone numbers: digits, spaces, and `+-()`, at least 6 digits.
pub fn validate_phone(phone: &str, label: &str) -> Option<String> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit() || " +-()".contains(c)) {
        return Some(format!("{label} may only contain digits, spaces and + - ( )"));
    }
    if trimmed.chars().filter(char::is_ascii_digit).count() < 6 {
        return Some(format!("{label} must contain at least 6 digits"));
    }
    None
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str, label: &str) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| format!("{label} must be a date (YYYY-MM-DD)"))
}

/// Like [`parse_date`] but an empty input is `Ok(None)`.
pub fn parse_optional_date(value: &str, label: &str) -> Result<Option<NaiveDate>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(value, label).map(Some)
}

/// Resolve a submitted value against an enumeration.
pub fn parse_enum<E: Enumeration>(value: &str, label: &str) -> Result<E, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    E::from_value(trimmed).ok_or_else(|| format!("{label} is not a valid choice"))
}

/// Optional enumeration value; empty input is `Ok(None)`.
pub fn parse_optional_enum<E: Enumeration>(value: &str, label: &str) -> Result<Option<E>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_enum(value, label).map(Some)
}

/// Trimmed value, or `None` when blank.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
