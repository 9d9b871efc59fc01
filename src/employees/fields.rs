use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").unwrap());

/// Title-case a single name: first character upper case, the rest lower case.
/// Stored names are kept in this form so that name searches match regardless
/// of how the caller typed them.
pub fn capitalize(name: &str) -> String {
    let name = name.trim();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if value.len() > 255 {
        return Err(format!("{field} must be at most 255 characters"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(format!("'{}' is not a valid email address", email.trim()));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), String> {
    if !PHONE_RE.is_match(phone.trim()) {
        return Err(format!("'{}' is not a valid phone number", phone.trim()));
    }
    Ok(())
}

/// Salaries are stored as `NUMERIC(12,2)`: at most ten integer digits and two
/// decimal places.
pub fn validate_salary(salary: Decimal) -> Result<(), String> {
    if salary.is_sign_negative() {
        return Err("salary must not be negative".to_string());
    }
    if salary >= Decimal::new(10_000_000_000, 0) {
        return Err("salary must be less than 10000000000".to_string());
    }
    if salary.normalize().scale() > 2 {
        return Err("salary must have at most two decimal places".to_string());
    }
    Ok(())
}

pub fn validate_reference(field: &str, id: i32) -> Result<(), String> {
    if id <= 0 {
        return Err(format!("{field} must be a positive id"));
    }
    Ok(())
}
