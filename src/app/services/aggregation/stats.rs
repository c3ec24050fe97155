//! Ingestion statistics for single sources and whole runs
//!
//! These structures are the out-of-band diagnostic channel of the engine:
//! rejected lines and unavailable sources are counted here instead of being
//! raised as failures.

use crate::app::services::tdv_parser::ParseStats;
use serde::{Deserialize, Serialize};

/// Statistics for one ingested source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Name of the source (usually its path)
    pub source: String,

    /// Line and record counters for the source
    pub parse: ParseStats,

    /// States first encountered in this source
    pub states_created: usize,
}

impl IngestStats {
    /// Create empty statistics for a named source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            parse: ParseStats::new(),
            states_created: 0,
        }
    }

    /// Records applied to the aggregation state
    pub fn records_accepted(&self) -> usize {
        self.parse.records_parsed
    }

    /// Lines rejected as malformed
    pub fn records_rejected(&self) -> usize {
        self.parse.records_rejected
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "{}: {} lines, {} accepted, {} rejected, {} blank, {} new states",
            self.source,
            self.parse.lines_read,
            self.parse.records_parsed,
            self.parse.records_rejected,
            self.parse.blank_lines,
            self.states_created
        )
    }
}

/// Statistics for a complete run over any number of sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Sources read to the end
    pub sources_processed: usize,

    /// Sources that could not be opened or read, in encounter order
    pub sources_failed: Vec<String>,

    /// Combined line and record counters
    pub parse: ParseStats,

    /// Distinct states found across all sources
    pub states_found: usize,
}

impl RunSummary {
    /// Fold in the statistics of a completed source
    pub fn record_source(&mut self, stats: &IngestStats) {
        self.sources_processed += 1;
        self.states_found += stats.states_created;
        self.parse.merge(&stats.parse);
    }

    /// Fold in the counters of a source that failed part way through
    pub fn record_partial(&mut self, stats: &IngestStats) {
        self.states_found += stats.states_created;
        self.parse.merge(&stats.parse);
    }

    /// Remember a source that could not be used
    pub fn record_failure(&mut self, source: impl Into<String>) {
        self.sources_failed.push(source.into());
    }

    /// No source contributed a single accepted record
    pub fn is_empty_result(&self) -> bool {
        self.parse.records_parsed == 0
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Run Summary: {} sources processed, {} unavailable | \
             {} records accepted, {} rejected ({:.1}% success) | {} states",
            self.sources_processed,
            self.sources_failed.len(),
            self.parse.records_parsed,
            self.parse.records_rejected,
            self.parse.success_rate(),
            self.states_found
        )
    }
}
