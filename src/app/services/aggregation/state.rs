//! First-seen ordered mapping from state code to accumulator
//!
//! Lookups go through a `HashMap`; a parallel key list remembers the order in
//! which state codes were first encountered so reports list states in input
//! order regardless of how often they recur.

use super::accumulator::StateAccumulator;
use crate::app::models::Observation;
use std::collections::HashMap;

/// The complete aggregation result of a run
///
/// Only the aggregation engine mutates this mapping; everyone else receives it
/// by shared reference or by value once ingestion has finished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationState {
    accumulators: HashMap<String, StateAccumulator>,
    order: Vec<String>,
}

impl AggregationState {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one observation, creating the state's accumulator on first sight
    ///
    /// Returns `true` when a new accumulator was created.
    pub(crate) fn apply(&mut self, observation: &Observation) -> bool {
        if let Some(accumulator) = self.accumulators.get_mut(&observation.state_code) {
            accumulator.update(observation);
            return false;
        }

        self.order.push(observation.state_code.clone());
        self.accumulators.insert(
            observation.state_code.clone(),
            StateAccumulator::new(observation),
        );
        true
    }

    /// Number of distinct states seen
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no state has been seen
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Accumulator for a state code, if any record for it was accepted
    pub fn get(&self, code: &str) -> Option<&StateAccumulator> {
        self.accumulators.get(code)
    }

    /// Whether any record for the state code was accepted
    pub fn contains(&self, code: &str) -> bool {
        self.accumulators.contains_key(code)
    }

    /// State codes in first-seen order
    pub fn state_codes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(state_code, accumulator)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateAccumulator)> {
        self.order
            .iter()
            .filter_map(|code| self.accumulators.get(code).map(|acc| (code.as_str(), acc)))
    }

    /// Accumulators in first-seen order
    pub fn accumulators(&self) -> impl Iterator<Item = &StateAccumulator> {
        self.iter().map(|(_, accumulator)| accumulator)
    }

    /// Total number of accepted records across all states
    pub fn total_records(&self) -> u64 {
        self.accumulators.values().map(|acc| acc.record_count).sum()
    }
}
