use std::fmt::Display;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Single field failure reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Collects field failures so a request reports every invalid field at
/// once, not just the first.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

/// Required string field; whitespace-only counts as missing.
pub fn require_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: String,
) -> Option<String> {
    if value.trim().is_empty() {
        errors.push(field, "must not be empty");
        None
    } else {
        Some(value)
    }
}

pub fn parse_uuid(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<Uuid> {
    match Uuid::parse_str(value) {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(field, "must be a UUID");
            None
        }
    }
}

pub fn parse_date(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(field, "must be a date in YYYY-MM-DD format");
            None
        }
    }
}

pub fn parse_datetime(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(_) => {
            errors.push(field, "must be an RFC 3339 timestamp");
            None
        }
    }
}

/// Enum-membership check through the type's `FromStr`; the parse error
/// becomes the field message.
pub fn parse_enum<T>(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.push(field, e.to_string());
            None
        }
    }
}

/// Validated conversion through a value-object constructor.
pub fn parse_with<T, E: Display>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: String,
    parse: impl FnOnce(String) -> Result<T, E>,
) -> Option<T> {
    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.push(field, e.to_string());
            None
        }
    }
}

/// Inclusive range check for numeric fields.
pub fn int_in_range<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: T,
    min: T,
    max: T,
) -> Option<T>
where
    T: PartialOrd + Copy + Display,
{
    if value < min || value > max {
        errors.push(field, format!("must be between {min} and {max}"));
        None
    } else {
        Some(value)
    }
}
