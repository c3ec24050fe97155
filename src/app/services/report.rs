//! Plain-text climate report
//!
//! Turns a finished [`AggregationState`] into the classic per-state summary.
//! All arithmetic happens in [`StateSummary`]; the renderer only lays out
//! text.

use crate::app::services::aggregation::{AggregationState, StateAccumulator};
use crate::config::TimeDisplay;
use crate::constants::{MILLIS_PER_SECOND, REPORT_TIME_FORMAT, UNKNOWN_TIME};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Derived figures for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSummary {
    pub code: String,
    pub record_count: u64,
    pub average_humidity: f64,
    pub average_temperature: f64,
    pub average_cloud_cover: f64,
    /// Mean surface pressure in pascals (not part of the text report)
    pub average_pressure: f64,
    pub max_temperature: f64,
    pub max_temperature_timestamp: i64,
    pub min_temperature: f64,
    pub min_temperature_timestamp: i64,
    pub lightning_strikes: u64,
    pub snow_records: u64,
}

impl From<&StateAccumulator> for StateSummary {
    fn from(acc: &StateAccumulator) -> Self {
        // Accumulators are created with their first record
        let count = acc.record_count.max(1) as f64;

        Self {
            code: acc.code.clone(),
            record_count: acc.record_count,
            average_humidity: acc.humidity_sum / count,
            average_temperature: acc.temperature_sum / count,
            average_cloud_cover: acc.cloudcover_sum / count,
            average_pressure: acc.pressure_sum / count,
            max_temperature: acc.max_temperature_f,
            max_temperature_timestamp: acc.max_temperature_timestamp,
            min_temperature: acc.min_temperature_f,
            min_temperature_timestamp: acc.min_temperature_timestamp,
            lightning_strikes: acc.lightning_count,
            snow_records: acc.snow_count,
        }
    }
}

/// Summaries for every state in first-seen order
pub fn summarize(state: &AggregationState) -> Vec<StateSummary> {
    state.accumulators().map(StateSummary::from).collect()
}

/// Format an epoch-millisecond timestamp like C `ctime`, without the newline
///
/// Sub-second precision is truncated toward zero.
pub fn format_timestamp(millis: i64, zone: TimeDisplay) -> String {
    let Some(utc) = DateTime::from_timestamp(millis / MILLIS_PER_SECOND, 0) else {
        return UNKNOWN_TIME.to_string();
    };

    match zone {
        TimeDisplay::Utc => utc.format(REPORT_TIME_FORMAT).to_string(),
        TimeDisplay::Local => utc
            .with_timezone(&Local)
            .format(REPORT_TIME_FORMAT)
            .to_string(),
    }
}

/// Render the full report for a finished aggregation
pub fn render_report(state: &AggregationState, zone: TimeDisplay) -> String {
    let mut out = String::new();

    out.push_str("States found:\n");
    let codes: Vec<&str> = state.state_codes().collect();
    out.push_str(&codes.join(" "));
    out.push('\n');

    for summary in summarize(state) {
        write_state(&mut out, &summary, zone);
    }

    out
}

fn write_state(out: &mut String, s: &StateSummary, zone: TimeDisplay) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "-- State: {} --", s.code);
    let _ = writeln!(out, "Number of Records: {}", s.record_count);
    let _ = writeln!(out, "Average Humidity: {:.1}%", s.average_humidity);
    let _ = writeln!(out, "Average Temperature: {:.1}F", s.average_temperature);
    let _ = writeln!(out, "Max Temperature: {:.1}F", s.max_temperature);
    let _ = writeln!(
        out,
        "Max Temperature on: {}",
        format_timestamp(s.max_temperature_timestamp, zone)
    );
    let _ = writeln!(out, "Min Temperature: {:.1}F", s.min_temperature);
    let _ = writeln!(
        out,
        "Min Temperature on: {}",
        format_timestamp(s.min_temperature_timestamp, zone)
    );
    let _ = writeln!(out, "Lightning Strikes: {}", s.lightning_strikes);
    let _ = writeln!(out, "Records with Snow Cover: {}", s.snow_records);
    let _ = writeln!(out, "Average Cloud Cover: {:.1}%", s.average_cloud_cover);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Observation, kelvin_to_fahrenheit};

    fn observation(code: &str, timestamp: i64, kelvin: f64, lightning: bool) -> Observation {
        Observation {
            state_code: code.to_string(),
            timestamp,
            humidity_pct: 49.4,
            snow_present: false,
            cloud_pct: 53.0,
            lightning_present: lightning,
            pressure_pa: 100_000.0,
            temperature_f: kelvin_to_fahrenheit(kelvin),
        }
    }

    fn sample_state() -> AggregationState {
        let mut state = AggregationState::new();
        // 2015-02-20 04:00:00 UTC and 2015-08-03 11:00:00 UTC
        state.apply(&observation("TN", 1_424_404_800_000, 293.15, false));
        state.apply(&observation("TN", 1_438_599_600_000, 310.93, true));
        state.apply(&observation("WA", 1_428_300_000_000, 280.0, false));
        state
    }

    #[test]
    fn test_summary_averages() {
        let state = sample_state();
        let summary = StateSummary::from(state.get("TN").unwrap());

        assert_eq!(summary.record_count, 2);
        assert!((summary.average_humidity - 49.4).abs() < 1e-9);
        assert!((summary.average_temperature - 84.002).abs() < 1e-6);
        assert!((summary.average_cloud_cover - 53.0).abs() < 1e-9);
        assert!((summary.average_pressure - 100_000.0).abs() < 1e-9);
        assert_eq!(summary.lightning_strikes, 1);
        assert_eq!(summary.snow_records, 0);
    }

    #[test]
    fn test_format_timestamp_utc() {
        assert_eq!(
            format_timestamp(1_424_404_800_000, TimeDisplay::Utc),
            "Fri Feb 20 04:00:00 2015"
        );
        assert_eq!(
            format_timestamp(1_438_599_600_999, TimeDisplay::Utc),
            "Mon Aug  3 11:00:00 2015"
        );
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX, TimeDisplay::Utc), "unknown");
        assert_eq!(format_timestamp(i64::MIN, TimeDisplay::Local), "unknown");
    }

    #[test]
    fn test_render_report_layout() {
        let report = render_report(&sample_state(), TimeDisplay::Utc);

        let expected = "\
States found:
TN WA
-- State: TN --
Number of Records: 2
Average Humidity: 49.4%
Average Temperature: 84.0F
Max Temperature: 100.0F
Max Temperature on: Mon Aug  3 11:00:00 2015
Min Temperature: 68.0F
Min Temperature on: Fri Feb 20 04:00:00 2015
Lightning Strikes: 1
Records with Snow Cover: 0
Average Cloud Cover: 53.0%
-- State: WA --
Number of Records: 1
Average Humidity: 49.4%
Average Temperature: 44.3F
Max Temperature: 44.3F
Max Temperature on: Mon Apr  6 06:00:00 2015
Min Temperature: 44.3F
Min Temperature on: Mon Apr  6 06:00:00 2015
Lightning Strikes: 0
Records with Snow Cover: 0
Average Cloud Cover: 53.0%
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_empty_report() {
        let report = render_report(&AggregationState::new(), TimeDisplay::Utc);
        assert_eq!(report, "States found:\n\n");
    }
}
