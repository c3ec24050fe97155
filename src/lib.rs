//! Climate Analyzer Library
//!
//! A Rust library for summarising NOAA weather observations, delivered as
//! tab-delimited (TDV) files, into per-state climate statistics.
//!
//! This library provides tools for:
//! - Parsing and validating individual TDV observation records
//! - Accumulating running sums and temperature extrema per US state
//! - Merging any number of input sources into one first-seen ordered result
//! - Rendering the classic plain-text climate report
//! - Structured diagnostics for rejected records and unavailable sources

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod report;
        pub mod tdv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Observation;
pub use app::services::aggregation::{AggregationEngine, AggregationState, StateAccumulator};
pub use app::services::tdv_parser::RecordError;
pub use config::AnalyzerConfig;

use std::path::PathBuf;

/// Result type alias for the climate analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for climate analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An input source could not be opened or read
    #[error("Source unavailable: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A single input line was rejected
    #[error("Malformed record at line {line_number}: {reason}")]
    MalformedRecord {
        line_number: usize,
        #[source]
        reason: RecordError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a source unavailable error for the given path
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(line_number: usize, reason: RecordError) -> Self {
        Self::MalformedRecord {
            line_number,
            reason,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the run can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
