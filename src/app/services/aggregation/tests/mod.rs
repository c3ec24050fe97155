//! Tests for the aggregation module
//!
//! This module provides fixtures shared by the accumulator, state and engine
//! tests.


use crate::app::models::{Observation, kelvin_to_fahrenheit};
use crate::app::services::aggregation::AggregationEngine;
use crate::config::AnalyzerConfig;

/// Create a test observation with neutral values apart from the temperature
pub fn create_test_observation(state: &str, timestamp: i64, kelvin: f64) -> Observation {
    Observation {
        state_code: state.to_string(),
        timestamp,
        humidity_pct: 50.0,
        snow_present: false,
        cloud_pct: 25.0,
        lightning_present: false,
        pressure_pa: 101_325.0,
        temperature_f: kelvin_to_fahrenheit(kelvin),
    }
}

/// Create a TDV line with neutral values apart from the temperature
pub fn create_test_line(state: &str, timestamp: i64, kelvin: f64) -> String {
    format!(
        "{}\t{}\tdn5rj8r1wkp0\t50.0\t0.0\t25.0\t0.0\t101325.0\t{}",
        state, timestamp, kelvin
    )
}

/// Create a TDV line with every field specified
#[allow(clippy::too_many_arguments)]
pub fn create_full_line(
    state: &str,
    timestamp: i64,
    humidity: f64,
    snow: u8,
    cloud: f64,
    lightning: u8,
    pressure: f64,
    kelvin: f64,
) -> String {
    format!(
        "{}\t{}\tdn5rj8r1wkp0\t{}\t{}\t{}\t{}\t{}\t{}",
        state, timestamp, humidity, snow, cloud, lightning, pressure, kelvin
    )
}

/// Engine with the default configuration
pub fn create_test_engine() -> AggregationEngine {
    AggregationEngine::new(AnalyzerConfig::default()).unwrap()
}

/// Compare floats with a tolerance suitable for Fahrenheit conversions
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {} to be within 0.01 of {}",
        actual,
        expected
    );
}
