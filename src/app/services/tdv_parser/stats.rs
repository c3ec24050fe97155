//! Parsing statistics for TDV sources
//!
//! This module tracks how many lines of a source were read, accepted and
//! rejected, grouped by rejection category, with a bounded list of messages
//! for debugging.

use super::RecordError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of lines read, blank lines included
    pub lines_read: usize,

    /// Lines skipped because they carried no content
    pub blank_lines: usize,

    /// Number of observations successfully parsed
    pub records_parsed: usize,

    /// Number of lines rejected as malformed
    pub records_rejected: usize,

    /// Rejection counts per category
    pub rejections_by_kind: BTreeMap<String, usize>,

    /// Retained rejection messages for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            blank_lines: 0,
            records_parsed: 0,
            records_rejected: 0,
            rejections_by_kind: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    /// Record a rejected line, keeping at most `max_messages` messages
    pub fn record_rejection(&mut self, line_number: usize, error: &RecordError, max_messages: usize) {
        self.records_rejected += 1;
        *self
            .rejections_by_kind
            .entry(error.kind().to_string())
            .or_insert(0) += 1;

        if self.errors.len() < max_messages {
            self.errors.push(format!("Line {}: {}", line_number, error));
        }
    }

    /// Lines that were expected to hold a record
    pub fn candidate_records(&self) -> usize {
        self.records_parsed + self.records_rejected
    }

    /// Calculate success rate as a percentage of non-blank lines
    pub fn success_rate(&self) -> f64 {
        let candidates = self.candidate_records();
        if candidates == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// Fold another source's statistics into this one
    pub fn merge(&mut self, other: &ParseStats) {
        self.lines_read += other.lines_read;
        self.blank_lines += other.blank_lines;
        self.records_parsed += other.records_parsed;
        self.records_rejected += other.records_rejected;
        for (kind, count) in &other.rejections_by_kind {
            *self.rejections_by_kind.entry(kind.clone()).or_insert(0) += count;
        }
        self.errors.extend(other.errors.iter().cloned());
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
