//! Test utilities for TDV parser testing
//!
//! This module provides helpers for building observation lines used across
//! the parser test modules.

mod parser_tests;
mod stats_tests;

/// Build a TDV line (without terminator) from its nine fields
#[allow(clippy::too_many_arguments)]
pub fn tdv_line(
    state: &str,
    timestamp: i64,
    humidity: f64,
    snow: f64,
    cloud: f64,
    lightning: f64,
    pressure: f64,
    kelvin: f64,
) -> String {
    format!(
        "{}\t{}\t9prcjqk3yc80\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{}",
        state, timestamp, humidity, snow, cloud, lightning, pressure, kelvin
    )
}

/// A well-formed line taken from a real NOAA export
pub fn sample_line() -> &'static str {
    "CA\t1428300000000\t9prcjqk3yc80\t93.0\t0.0\t100.0\t0.0\t95644.0\t277.58716"
}

/// Split a line the way the line-level parser does
pub fn split(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}
