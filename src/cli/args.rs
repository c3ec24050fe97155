//! Command-line argument definitions for the climate analyzer
//!
//! A single command: every positional argument is a TDV file to fold into
//! the report, in the order given.

use crate::config::{AnalyzerConfig, TimeDisplay};
use crate::constants::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_RECORDED_ERRORS};
use crate::Result;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the climate analyzer
///
/// Reads NOAA tab-delimited observation files and prints per-state climate
/// statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "climate_analyzer",
    version,
    about = "Summarise NOAA tab-delimited weather observations by US state",
    long_about = "Reads one or more NOAA TDV observation files and prints, for every US state \
                  found, the record count, average humidity, temperature and cloud cover, the \
                  temperature extremes with their timestamps, and lightning and snow counts. \
                  Files that cannot be opened are reported and skipped; malformed lines are \
                  skipped and counted."
)]
pub struct Args {
    /// TDV files to analyse, in order
    ///
    /// States are listed in the order they first appear across these files.
    #[arg(value_name = "FILES", help = "TDV files to analyse")]
    pub files: Vec<PathBuf>,

    /// Longest accepted line in characters
    #[arg(
        long = "max-line-length",
        value_name = "CHARS",
        default_value_t = DEFAULT_MAX_LINE_LENGTH,
        help = "Reject lines longer than this many characters"
    )]
    pub max_line_length: usize,

    /// Reject out-of-range humidity, cloud cover and temperatures
    ///
    /// By default any finite number is accepted. With this flag humidity and
    /// cloud cover must lie within 0-100% and temperatures must not be
    /// negative Kelvin.
    #[arg(
        long = "validate-ranges",
        help = "Reject percentages outside 0-100 and negative Kelvin temperatures"
    )]
    pub validate_ranges: bool,

    /// Rejection messages kept per file
    #[arg(
        long = "max-errors",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_RECORDED_ERRORS,
        help = "Number of rejected-line messages kept per file"
    )]
    pub max_errors: usize,

    /// Show extrema timestamps in the local time zone instead of UTC
    #[arg(long = "local-time", help = "Print timestamps in local time instead of UTC")]
    pub local_time: bool,

    /// Show a progress bar per file on stderr
    #[arg(long = "progress", help = "Show a progress bar while reading each file")]
    pub progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only errors and the report itself are printed. Overrides verbose
    /// settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors and the report",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Build and validate the analyzer configuration from the flags
    pub fn to_config(&self) -> Result<AnalyzerConfig> {
        let time_display = if self.local_time {
            TimeDisplay::Local
        } else {
            TimeDisplay::Utc
        };

        let mut config = AnalyzerConfig::default()
            .with_max_line_length(self.max_line_length)
            .with_max_recorded_errors(self.max_errors)
            .with_time_display(time_display);

        if self.validate_ranges {
            config = config.with_range_validation();
        }
        if self.show_progress() {
            config = config.with_progress();
        }

        config.validate()?;
        Ok(config)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars were requested and quiet mode is off
    pub fn show_progress(&self) -> bool {
        self.progress && !self.quiet
    }
}
