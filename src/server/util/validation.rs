//! Field validation shared by the operation parameter constructors.
//!
//! Every check returns `AppError::BadRequest` naming the offending field, so callers can
//! chain them with `?` while converting DTOs into parameters.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::server::error::AppError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});

/// Local part limit from RFC 5321.
const MAX_EMAIL_LOCAL_PART: usize = 64;

/// Rejects values that are empty or consist only of whitespace.
pub fn require_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!(
            "Field: {}. Error: must not be blank.",
            field
        )));
    }

    Ok(())
}

/// Rejects values whose character count falls outside `min..=max`.
pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::BadRequest(format!(
            "Field: {}. Error: length must be between {} and {}. Value: {}",
            field, min, max, len
        )));
    }

    Ok(())
}

/// Combination of [`require_not_blank`] and [`require_length`].
pub fn require_text(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    require_not_blank(field, value)?;
    require_length(field, value, min, max)
}

/// Rejects malformed email addresses.
pub fn require_email(field: &str, value: &str) -> Result<(), AppError> {
    let local_ok = value
        .split_once('@')
        .map(|(local, _)| local.len() <= MAX_EMAIL_LOCAL_PART)
        .unwrap_or(false);

    if !local_ok || !EMAIL_RE.is_match(value) {
        return Err(AppError::BadRequest(format!(
            "Field: {}. Error: must be a well-formed email address. Value: {}",
            field, value
        )));
    }

    Ok(())
}

/// Rejects negative numbers.
pub fn require_non_negative(field: &str, value: i32) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::BadRequest(format!(
            "Field: {}. Error: must not be negative. Value: {}",
            field, value
        )));
    }

    Ok(())
}

/// Rejects numbers outside `min..=max`.
pub fn require_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::BadRequest(format!(
            "Field: {}. Error: must be between {} and {}. Value: {}",
            field, min, max, value
        )));
    }

    Ok(())
}

/// Rejects dates that lie before `now`.
pub fn require_not_past(
    field: &str,
    value: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(), AppError> {
    if value < now {
        return Err(AppError::BadRequest(format!(
            "Field: {}. Error: must not be in the past. Value: {}",
            field,
            value.format(crate::model::datetime::DATE_TIME_FORMAT)
        )));
    }

    Ok(())
}
