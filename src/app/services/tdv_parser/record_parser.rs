//! Individual TDV record parsing
//!
//! This module converts the nine split fields of one observation line into an
//! [`Observation`]. Any field that fails to convert rejects the whole record;
//! no value is ever defaulted to zero.

use super::RecordError;
use super::field_parsers::{
    check_range, get_field, parse_required_f64, parse_required_flag, parse_required_i64,
    parse_state_code,
};
use crate::app::models::{Observation, kelvin_to_fahrenheit};
use crate::constants::{FIELD_COUNT, PERCENT_MAX, PERCENT_MIN, fields};

/// Parse a single observation record from its split fields
///
/// With `validate_ranges` set, percentages outside 0-100 and negative Kelvin
/// temperatures are rejected; otherwise they are accepted as-is.
pub fn parse_observation_record(
    record: &[&str],
    validate_ranges: bool,
) -> Result<Observation, RecordError> {
    if record.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount {
            expected: FIELD_COUNT,
            found: record.len(),
        });
    }

    let state_code = parse_state_code(get_field(record, fields::STATE_CODE)?)?;
    let timestamp = parse_required_i64(record, fields::TIMESTAMP)?;
    // Geolocation is carried in the file but never used downstream
    let _geolocation = get_field(record, fields::GEOLOCATION)?;
    let humidity_pct = parse_required_f64(record, fields::HUMIDITY)?;
    let snow_present = parse_required_flag(record, fields::SNOW)?;
    let cloud_pct = parse_required_f64(record, fields::CLOUD_COVER)?;
    let lightning_present = parse_required_flag(record, fields::LIGHTNING)?;
    let pressure_pa = parse_required_f64(record, fields::PRESSURE)?;
    let temperature_k = parse_required_f64(record, fields::SURFACE_TEMPERATURE)?;

    if validate_ranges {
        check_range(
            fields::NAMES[fields::HUMIDITY],
            humidity_pct,
            PERCENT_MIN,
            PERCENT_MAX,
        )?;
        check_range(
            fields::NAMES[fields::CLOUD_COVER],
            cloud_pct,
            PERCENT_MIN,
            PERCENT_MAX,
        )?;
        check_range(
            fields::NAMES[fields::SURFACE_TEMPERATURE],
            temperature_k,
            0.0,
            f64::MAX,
        )?;
    }

    Ok(Observation {
        state_code,
        timestamp,
        humidity_pct,
        snow_present,
        cloud_pct,
        lightning_present,
        pressure_pa,
        temperature_f: kelvin_to_fahrenheit(temperature_k),
    })
}
