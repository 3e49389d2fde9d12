// src/forms/validate.rs

use std::sync::OnceLock;

use regex::Regex;

/// One validation failure, keyed by field name for inline display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+]?[\d\s-]{10,15}$").expect("phone regex"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"))
}

pub fn require(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    label: &str,
) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    }
}

pub fn max_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    max: usize,
    label: &str,
) {
    if value.trim().chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("{label} must be less than {max} characters"),
        ));
    }
}

/// Optional field: empty passes, non-empty must match the phone shape.
pub fn phone_optional(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let v = value.trim();
    if !v.is_empty() && !phone_re().is_match(v) {
        errors.push(FieldError::new(field, "Invalid phone number"));
    }
}

pub fn phone_required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let v = value.trim();
    if v.is_empty() {
        errors.push(FieldError::new(field, "Phone number is required"));
    } else if !phone_re().is_match(v) {
        errors.push(FieldError::new(field, "Invalid phone number"));
    }
}

pub fn email_required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let v = value.trim();
    if v.is_empty() {
        errors.push(FieldError::new(field, "Email is required"));
    } else if v.chars().count() > 255 {
        errors.push(FieldError::new(field, "Email must be less than 255 characters"));
    } else if !email_re().is_match(v) {
        errors.push(FieldError::new(field, "Invalid email address"));
    }
}
