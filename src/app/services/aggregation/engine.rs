//! Aggregation engine orchestrating multi-source ingestion
//!
//! The engine owns the single [`AggregationState`] of a run. Every source is
//! ingested into that same state, one line at a time and in supply order, so
//! a state code seen in several files ends up in one accumulator.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::state::AggregationState;
use super::stats::{IngestStats, RunSummary};
use crate::app::models::Observation;
use crate::app::services::tdv_parser::{RecordError, TdvParser};
use crate::config::AnalyzerConfig;
use crate::{Error, Result};

/// Open an input source for reading
pub fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::source_unavailable(path, e))
}

/// Incremental aggregation engine
#[derive(Debug)]
pub struct AggregationEngine {
    config: AnalyzerConfig,
    parser: TdvParser,
    state: AggregationState,
    summary: RunSummary,
}

impl AggregationEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            parser: TdvParser::new(&config),
            config,
            state: AggregationState::new(),
            summary: RunSummary::default(),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Read-only view of the aggregation so far
    pub fn state(&self) -> &AggregationState {
        &self.state
    }

    /// Run-level statistics so far
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Finish the run, handing over the final state and statistics
    pub fn finish(self) -> (AggregationState, RunSummary) {
        (self.state, self.summary)
    }

    /// Apply an already parsed observation
    ///
    /// Returns `true` when the observation created a new state.
    pub fn apply_observation(&mut self, observation: &Observation) -> bool {
        self.state.apply(observation)
    }

    /// Open and ingest a file
    ///
    /// A file that cannot be opened is recorded as a failed source and
    /// returned as [`Error::SourceUnavailable`]; the aggregation state is left
    /// untouched so the caller can move on to the next file.
    pub fn ingest_path(&mut self, path: &Path) -> Result<IngestStats> {
        let file = match open_source(path) {
            Ok(file) => file,
            Err(e) => {
                self.record_unavailable(path.display().to_string(), &e);
                return Err(e);
            }
        };

        self.ingest(BufReader::new(file), &path.display().to_string())
    }

    /// Record a source the caller could not open
    pub fn record_unavailable(&mut self, source: impl Into<String>, error: &Error) {
        let source = source.into();
        warn!("Skipping unavailable source {}: {}", source, error);
        self.summary.record_failure(source);
    }

    /// Ingest every line of a buffered reader
    ///
    /// Malformed lines are counted and logged, never returned as errors. A
    /// read failure stops this source with [`Error::Io`]; records applied
    /// before the failure stay in the aggregation state.
    pub fn ingest<R: BufRead>(&mut self, mut reader: R, source_name: &str) -> Result<IngestStats> {
        info!("Ingesting source: {}", source_name);

        let mut stats = IngestStats::new(source_name);
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            let bytes_read = match reader.read_until(b'\n', &mut buffer) {
                Ok(n) => n,
                Err(e) => {
                    let error = Error::io(
                        format!(
                            "Failed to read {} after line {}",
                            source_name, stats.parse.lines_read
                        ),
                        e,
                    );
                    warn!("{}", error);
                    self.summary.record_partial(&stats);
                    self.summary.record_failure(source_name);
                    return Err(error);
                }
            };
            if bytes_read == 0 {
                break;
            }

            let line = TdvParser::decode_line(&buffer);
            self.process_line(line, &mut stats);
        }

        self.finish_source(&stats);
        Ok(stats)
    }

    /// Ingest an in-memory sequence of lines as one source
    pub fn ingest_lines<I, S>(&mut self, lines: I, source_name: &str) -> IngestStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        info!("Ingesting source: {}", source_name);

        let mut stats = IngestStats::new(source_name);

        for line in lines {
            self.process_line(Ok(line.as_ref()), &mut stats);
        }

        self.finish_source(&stats);
        stats
    }

    /// Parse one line and fold it into the state, updating the source counters
    fn process_line(&mut self, line: std::result::Result<&str, RecordError>, stats: &mut IngestStats) {
        stats.parse.lines_read += 1;
        let line_number = stats.parse.lines_read;

        let parsed = match line {
            Ok(text) if TdvParser::is_blank(text) => {
                stats.parse.blank_lines += 1;
                return;
            }
            Ok(text) => self.parser.parse_line(text),
            Err(reason) => Err(reason),
        };

        match parsed {
            Ok(observation) => {
                stats.parse.records_parsed += 1;
                if self.state.apply(&observation) {
                    stats.states_created += 1;
                    debug!(
                        "New state {} first seen in {} at line {}",
                        observation.state_code, stats.source, line_number
                    );
                }
            }
            Err(reason) => {
                stats
                    .parse
                    .record_rejection(line_number, &reason, self.config.max_recorded_errors);
                debug!(
                    "Skipped line in {}: {}",
                    stats.source,
                    Error::malformed_record(line_number, reason)
                );
            }
        }
    }

    fn finish_source(&mut self, stats: &IngestStats) {
        self.summary.record_source(stats);

        if stats.parse.records_parsed == 0 {
            warn!("Source {} yielded no valid records", stats.source);
        }
        info!("Ingested {}", stats.summary());
    }
}
