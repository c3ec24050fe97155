//! Field parsing utilities for TDV records
//!
//! This module provides helper functions for converting individual fields
//! of an already split observation line. Every helper trims the raw value
//! and reports failures as a [`RecordError`] naming the offending field.

use super::RecordError;
use crate::constants::{STATE_CODE_LENGTH, fields};

/// Get a trimmed field value by position
///
/// Callers check the field count first, so a missing index is reported as a
/// field count mismatch rather than a panic.
pub fn get_field<'a>(record: &[&'a str], index: usize) -> Result<&'a str, RecordError> {
    record
        .get(index)
        .map(|value| value.trim())
        .ok_or(RecordError::FieldCount {
            expected: index + 1,
            found: record.len(),
        })
}

/// Parse and normalise a two-letter state code
pub fn parse_state_code(value: &str) -> Result<String, RecordError> {
    if value.len() != STATE_CODE_LENGTH || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RecordError::InvalidStateCode {
            value: value.to_string(),
        });
    }

    Ok(value.to_ascii_uppercase())
}

/// Parse a required integer field
pub fn parse_required_i64(record: &[&str], index: usize) -> Result<i64, RecordError> {
    let value = get_field(record, index)?;

    value.parse::<i64>().map_err(|_| RecordError::InvalidInteger {
        field: fields::NAMES[index],
        value: value.to_string(),
    })
}

/// Parse a required real-valued field, rejecting NaN and infinities
pub fn parse_required_f64(record: &[&str], index: usize) -> Result<f64, RecordError> {
    let value = get_field(record, index)?;
    let field = fields::NAMES[index];

    let parsed = value.parse::<f64>().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })?;

    if !parsed.is_finite() {
        return Err(RecordError::NonFiniteValue {
            field,
            value: value.to_string(),
        });
    }

    Ok(parsed)
}

/// Parse a 0/1 presence flag
///
/// NOAA exports write flags as reals (`0.0`, `1.0`), so the value is read as
/// a number and must equal exactly zero or one.
pub fn parse_required_flag(record: &[&str], index: usize) -> Result<bool, RecordError> {
    let value = get_field(record, index)?;

    match value.parse::<f64>() {
        Ok(flag) if flag == 0.0 => Ok(false),
        Ok(flag) if flag == 1.0 => Ok(true),
        _ => Err(RecordError::InvalidFlag {
            field: fields::NAMES[index],
            value: value.to_string(),
        }),
    }
}

/// Check that a value lies within an inclusive range
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, RecordError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(RecordError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
