//! Per-state running statistics
//!
//! A [`StateAccumulator`] holds everything needed to report on one state
//! without retaining individual observations: counts, running sums and the
//! temperature extrema together with the timestamps that produced them.

use crate::app::models::Observation;
use serde::{Deserialize, Serialize};

/// Running aggregate of all observations seen for one state code
///
/// An accumulator only ever exists once a first observation has been applied,
/// so `record_count` is never zero and the extrema are always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateAccumulator {
    /// Two-letter state code, the key of the owning mapping
    pub code: String,

    /// Number of contributing observations
    pub record_count: u64,

    /// Running sums of the averaged quantities
    pub humidity_sum: f64,
    pub cloudcover_sum: f64,
    pub pressure_sum: f64,
    pub temperature_sum: f64,

    /// Observations flagged with snow cover
    pub snow_count: u64,

    /// Observations flagged with a lightning strike
    pub lightning_count: u64,

    /// Highest temperature seen (Fahrenheit) and when it was first observed
    pub max_temperature_f: f64,
    pub max_temperature_timestamp: i64,

    /// Lowest temperature seen (Fahrenheit) and when it was first observed
    pub min_temperature_f: f64,
    pub min_temperature_timestamp: i64,
}

impl StateAccumulator {
    /// Create an accumulator seeded from the first observation of a state
    pub fn new(observation: &Observation) -> Self {
        Self {
            code: observation.state_code.clone(),
            record_count: 1,
            humidity_sum: observation.humidity_pct,
            cloudcover_sum: observation.cloud_pct,
            pressure_sum: observation.pressure_pa,
            temperature_sum: observation.temperature_f,
            snow_count: observation.snow_count(),
            lightning_count: observation.lightning_count(),
            max_temperature_f: observation.temperature_f,
            max_temperature_timestamp: observation.timestamp,
            min_temperature_f: observation.temperature_f,
            min_temperature_timestamp: observation.timestamp,
        }
    }

    /// Fold a later observation for the same state into the running totals
    ///
    /// Extrema only move on a strictly greater (or smaller) temperature, so on
    /// a tie the earliest observation keeps its timestamp.
    pub fn update(&mut self, observation: &Observation) {
        debug_assert_eq!(self.code, observation.state_code);

        self.record_count += 1;
        self.humidity_sum += observation.humidity_pct;
        self.cloudcover_sum += observation.cloud_pct;
        self.pressure_sum += observation.pressure_pa;
        self.temperature_sum += observation.temperature_f;
        self.snow_count += observation.snow_count();
        self.lightning_count += observation.lightning_count();

        if observation.temperature_f > self.max_temperature_f {
            self.max_temperature_f = observation.temperature_f;
            self.max_temperature_timestamp = observation.timestamp;
        }
        if observation.temperature_f < self.min_temperature_f {
            self.min_temperature_f = observation.temperature_f;
            self.min_temperature_timestamp = observation.timestamp;
        }
    }

    /// Whether a temperature lies within the recorded extrema
    pub fn spans(&self, temperature_f: f64) -> bool {
        self.min_temperature_f <= temperature_f && temperature_f <= self.max_temperature_f
    }
}
