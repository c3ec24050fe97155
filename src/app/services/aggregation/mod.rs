//! Incremental per-state aggregation of weather observations
//!
//! This module owns the core of the analyzer: the state-keyed accumulator
//! mapping and the running-statistics update rule applied to every accepted
//! observation, across any number of input sources.
//!
//! # Architecture
//!
//! - [`accumulator`] - Per-state running sums and temperature extrema
//! - [`state`] - First-seen ordered mapping from state code to accumulator
//! - [`engine`] - Source ingestion, lookup-or-create and diagnostics
//! - [`stats`] - Per-source and per-run ingestion statistics
//!
//! # Merge Semantics
//!
//! All sources of a run are ingested into the same [`AggregationState`]. A
//! state code that appears in several files is folded into a single
//! accumulator, and its position in the report is fixed by the first file
//! and line in which it appeared.
//!
//! # Example Usage
//!
//! ```rust
//! use climate_analyzer::{AggregationEngine, AnalyzerConfig};
//!
//! # fn example() -> climate_analyzer::Result<()> {
//! let mut engine = AggregationEngine::new(AnalyzerConfig::default())?;
//!
//! engine.ingest_lines(
//!     [
//!         "TN\t1428300000000\tdn5rj8r1\t49.0\t0.0\t53.0\t0.0\t100421.0\t293.15",
//!         "WA\t1428310800000\tc23nb62w\t61.0\t1.0\t55.0\t0.0\t101325.0\t280.0",
//!     ],
//!     "inline",
//! );
//!
//! let (state, summary) = engine.finish();
//! assert_eq!(state.state_codes().collect::<Vec<_>>(), vec!["TN", "WA"]);
//! assert_eq!(summary.parse.records_parsed, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod accumulator;
pub mod engine;
pub mod state;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use accumulator::StateAccumulator;
pub use engine::{AggregationEngine, open_source};
pub use state::AggregationState;
pub use stats::{IngestStats, RunSummary};
