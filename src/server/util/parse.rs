use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::server::error::AppError;

/// Local date-time layouts accepted in addition to RFC 3339, interpreted as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a caller-supplied timestamp into a UTC instant.
///
/// Accepts RFC 3339 timestamps with any offset, date-times without an offset in the
/// `NAIVE_DATE_TIME_FORMATS` layouts and plain `YYYY-MM-DD` dates (UTC midnight).
/// Surrounding whitespace is ignored.
///
/// # Arguments
/// - `field` - Name of the input field, used in the error message
/// - `value` - The raw value to parse
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The parsed instant
/// - `Err(AppError::Validation)` - The value matches none of the accepted layouts
pub fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(AppError::Validation(format!(
        "Invalid date for {}: '{}'",
        field, value
    )))
}

/// Trims a text input, treating absent and blank values alike.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validates the trimmed length of a text field.
///
/// # Returns
/// - `Ok(())` - The value has at most `max` characters
/// - `Err(AppError::Validation)` - The value is longer
pub fn check_max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}
