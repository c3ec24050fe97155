//! Line-level TDV parser
//!
//! Handles everything about a raw line that is not a field conversion:
//! terminator stripping, the length bound, blank detection and splitting on
//! the tab delimiter.

use super::RecordError;
use super::record_parser::parse_observation_record;
use crate::app::models::Observation;
use crate::config::AnalyzerConfig;
use crate::constants::FIELD_DELIMITER;

/// Parser for NOAA TDV observation lines
///
/// The parser is stateless apart from its limits and can be shared across
/// any number of sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TdvParser {
    max_line_length: usize,
    validate_ranges: bool,
}

impl TdvParser {
    /// Create a parser using the limits from the configuration
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            max_line_length: config.max_line_length,
            validate_ranges: config.validate_ranges,
        }
    }

    /// Longest line this parser accepts
    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Strip a trailing `\n` or `\r\n`
    pub fn strip_terminator(line: &str) -> &str {
        let line = line.strip_suffix('\n').unwrap_or(line);
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Whether a line carries no content and should be skipped silently
    pub fn is_blank(line: &str) -> bool {
        Self::strip_terminator(line).trim().is_empty()
    }

    /// Parse one raw line (with or without its terminator) into an observation
    pub fn parse_line(&self, line: &str) -> Result<Observation, RecordError> {
        let content = Self::strip_terminator(line);

        // Byte length bounds the character count from above
        if content.len() > self.max_line_length {
            let length = content.chars().count();
            if length > self.max_line_length {
                return Err(RecordError::LineTooLong {
                    length,
                    limit: self.max_line_length,
                });
            }
        }

        let record: Vec<&str> = content.split(FIELD_DELIMITER).collect();
        parse_observation_record(&record, self.validate_ranges)
    }

    /// Decode a raw line read from a source, rejecting content that is not UTF-8
    pub fn decode_line(line: &[u8]) -> Result<&str, RecordError> {
        std::str::from_utf8(line).map_err(|_| RecordError::InvalidEncoding)
    }
}

impl Default for TdvParser {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}
