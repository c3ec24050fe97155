//! Configuration management and validation.
//!
//! Provides the settings that shape record validation, diagnostic retention
//! and report rendering. Defaults reproduce the behaviour of the classic
//! NOAA climate summary tool; the CLI layers its flags on top.

use crate::constants::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_RECORDED_ERRORS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Time zone used when rendering observation timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeDisplay {
    /// Coordinated Universal Time (reproducible across machines)
    #[default]
    Utc,
    /// The local zone of the machine producing the report
    Local,
}

/// Global configuration for climate analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Longest accepted line in characters, excluding the line terminator
    pub max_line_length: usize,

    /// Reject humidity/cloud cover outside 0-100% and negative Kelvin values
    pub validate_ranges: bool,

    /// Rejection messages retained per source
    pub max_recorded_errors: usize,

    /// Zone used for extrema timestamps in the report
    pub time_display: TimeDisplay,

    /// Show per-file progress bars on stderr
    pub show_progress: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            validate_ranges: false,
            max_recorded_errors: DEFAULT_MAX_RECORDED_ERRORS,
            time_display: TimeDisplay::Utc,
            show_progress: false,
        }
    }
}

impl AnalyzerConfig {
    /// Set the maximum accepted line length
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Enable range validation of percentage and temperature fields
    pub fn with_range_validation(mut self) -> Self {
        self.validate_ranges = true;
        self
    }

    /// Set how many rejection messages are kept per source
    pub fn with_max_recorded_errors(mut self, max_recorded_errors: usize) -> Self {
        self.max_recorded_errors = max_recorded_errors;
        self
    }

    /// Set the report time zone
    pub fn with_time_display(mut self, time_display: TimeDisplay) -> Self {
        self.time_display = time_display;
        self
    }

    /// Enable progress bars
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Check the configuration for values the parser cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(Error::configuration(
                "max_line_length must be greater than zero",
            ));
        }

        debug!(
            "Configuration validated: max_line_length={}, validate_ranges={}, time_display={:?}",
            self.max_line_length, self.validate_ranges, self.time_display
        );
        Ok(())
    }
}
