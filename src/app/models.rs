//! Data models for climate analysis
//!
//! This module contains the observation record produced by the TDV parser.
//! Observations are transient: each one is folded into a state accumulator
//! and then dropped.

use crate::constants::{KELVIN_TO_FAHRENHEIT_OFFSET, KELVIN_TO_FAHRENHEIT_SCALE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Convert a surface temperature from Kelvin to Fahrenheit
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * KELVIN_TO_FAHRENHEIT_SCALE - KELVIN_TO_FAHRENHEIT_OFFSET
}

/// One validated weather observation for a single timestamp and location
///
/// The geolocation column of the source line is not retained; every other
/// field is converted to its working unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Two-letter US state code, uppercase
    pub state_code: String,

    /// Observation time in milliseconds since the Unix epoch
    pub timestamp: i64,

    /// Relative humidity in percent
    pub humidity_pct: f64,

    /// Snow cover present at the location
    pub snow_present: bool,

    /// Cloud cover in percent
    pub cloud_pct: f64,

    /// Lightning strike recorded
    pub lightning_present: bool,

    /// Surface pressure in pascals
    pub pressure_pa: f64,

    /// Surface temperature in degrees Fahrenheit
    pub temperature_f: f64,
}

impl Observation {
    /// Observation time as a UTC datetime, if chrono can represent it
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Snow flag as a count contribution
    pub fn snow_count(&self) -> u64 {
        u64::from(self.snow_present)
    }

    /// Lightning flag as a count contribution
    pub fn lightning_count(&self) -> u64 {
        u64::from(self.lightning_present)
    }
}
