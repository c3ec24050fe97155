//! Application constants for the climate analyzer
//!
//! This module contains the TDV record layout, default limits and
//! conversion constants used throughout the analyzer.

// =============================================================================
// TDV Record Layout
// =============================================================================

/// Field delimiter used by NOAA TDV exports
pub const FIELD_DELIMITER: char = '\t';

/// Number of fields every observation line must carry
pub const FIELD_COUNT: usize = 9;

/// Positional indices of each TDV field
pub mod fields {
    pub const STATE_CODE: usize = 0;
    pub const TIMESTAMP: usize = 1;
    pub const GEOLOCATION: usize = 2;
    pub const HUMIDITY: usize = 3;
    pub const SNOW: usize = 4;
    pub const CLOUD_COVER: usize = 5;
    pub const LIGHTNING: usize = 6;
    pub const PRESSURE: usize = 7;
    pub const SURFACE_TEMPERATURE: usize = 8;

    /// Field names in file order, used in diagnostics
    pub const NAMES: [&str; super::FIELD_COUNT] = [
        "state_code",
        "timestamp",
        "geolocation",
        "humidity",
        "snow",
        "cloud_cover",
        "lightning",
        "pressure",
        "surface_temperature",
    ];
}

/// Length of a US state code
pub const STATE_CODE_LENGTH: usize = 2;

// =============================================================================
// Parsing Limits
// =============================================================================

/// Longest accepted line, excluding the line terminator
pub const DEFAULT_MAX_LINE_LENGTH: usize = 99;

/// Rejection messages kept per source (counts stay exact beyond this)
pub const DEFAULT_MAX_RECORDED_ERRORS: usize = 100;

/// Inclusive bounds for percentage fields when range validation is enabled
pub const PERCENT_MIN: f64 = 0.0;
pub const PERCENT_MAX: f64 = 100.0;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Kelvin to Fahrenheit scale factor (9/5)
pub const KELVIN_TO_FAHRENHEIT_SCALE: f64 = 9.0 / 5.0;

/// Kelvin to Fahrenheit offset
pub const KELVIN_TO_FAHRENHEIT_OFFSET: f64 = 459.67;

/// Milliseconds per second, for epoch timestamp handling
pub const MILLIS_PER_SECOND: i64 = 1_000;

// =============================================================================
// Reporting
// =============================================================================

/// `ctime`-style layout used for extrema timestamps
pub const REPORT_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Placeholder for timestamps chrono cannot represent
pub const UNKNOWN_TIME: &str = "unknown";

// =============================================================================
// Logging
// =============================================================================

/// Tracing target used in the default log filter
pub const LOG_TARGET: &str = "climate_analyzer";
