//! TDV parser for NOAA weather observation lines
//!
//! This module turns one raw line of a tab-delimited observation file into a
//! validated [`Observation`](crate::app::models::Observation) or a
//! [`RecordError`] explaining why the line was rejected. Rejection is never
//! fatal: callers log the reason and move on to the next line.
//!
//! ## Architecture
//!
//! - [`parser`] - Line-level checks (terminator, length, field split)
//! - [`record_parser`] - Field-by-field conversion into an observation
//! - [`field_parsers`] - Typed helpers for individual fields
//! - [`stats`] - Parse counters and retained rejection messages
//!
//! ## Usage
//!
//! ```rust
//! use climate_analyzer::AnalyzerConfig;
//! use climate_analyzer::app::services::tdv_parser::TdvParser;
//!
//! let parser = TdvParser::new(&AnalyzerConfig::default());
//! let observation = parser
//!     .parse_line("TN\t1428300000000\tdn5rj8r1\t49.0\t0.0\t53.0\t1.0\t100421.0\t293.15\n")
//!     .unwrap();
//!
//! assert_eq!(observation.state_code, "TN");
//! assert!((observation.temperature_f - 68.0).abs() < 0.01);
//! ```

pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::TdvParser;
pub use record_parser::parse_observation_record;
pub use stats::ParseStats;

use thiserror::Error;

/// Reasons a TDV line is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("line is {length} characters long, limit is {limit}")]
    LineTooLong { length: usize, limit: usize },

    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    #[error("expected {expected} tab-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid state code '{value}' (expected two letters)")]
    InvalidStateCode { value: String },

    #[error("invalid integer for {field}: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("non-finite value for {field}: '{value}'")]
    NonFiniteValue { field: &'static str, value: String },

    #[error("invalid flag for {field}: '{value}' (expected 0 or 1)")]
    InvalidFlag { field: &'static str, value: String },

    #[error("{field} value {value} outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl RecordError {
    /// Short stable name of the rejection category, used for grouping
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LineTooLong { .. } => "line_too_long",
            Self::InvalidEncoding => "invalid_encoding",
            Self::FieldCount { .. } => "field_count",
            Self::InvalidStateCode { .. } => "invalid_state_code",
            Self::InvalidInteger { .. } => "invalid_integer",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::NonFiniteValue { .. } => "non_finite_value",
            Self::InvalidFlag { .. } => "invalid_flag",
            Self::OutOfRange { .. } => "out_of_range",
        }
    }
}
