//! HTTP request handlers, one module per resource.

pub mod activity;
pub mod auth;
pub mod batch;
pub mod date_schedule;
pub mod notification;
pub mod profile;
pub mod schedule;
pub mod template;

use chrono::NaiveTime;

use crate::error::AppError;

/// Accepted weekday names for schedules and template slots.
pub(crate) const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Parse a time-of-day field, accepting both `HH:MM` and `HH:MM:SS`.
///
/// Clients commonly submit bare `HH:MM` from time pickers; the seconds
/// are normalized to zero.
pub(crate) fn parse_time(field: &str, value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::BadRequest(format!("{field} must be HH:MM or HH:MM:SS, got '{value}'")))
}

/// Validate a weekday name.
pub(crate) fn validate_day(value: &str) -> Result<(), AppError> {
    if WEEKDAYS.contains(&value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "scheduled_day must be a lowercase weekday name, got '{value}'"
        )))
    }
}
