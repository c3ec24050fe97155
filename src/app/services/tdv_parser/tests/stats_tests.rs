//! Tests for parsing statistics functionality

use crate::app::services::tdv_parser::{ParseStats, RecordError};

#[test]
fn test_parse_stats_empty() {
    let stats = ParseStats::new();

    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.records_parsed, 0);
    assert_eq!(stats.records_rejected, 0);
    assert!(stats.errors.is_empty());
    assert_eq!(stats.success_rate(), 0.0);
    assert!(!stats.is_successful());
    assert_eq!(ParseStats::default(), stats);
}

#[test]
fn test_success_rate_ignores_blank_lines() {
    let stats = ParseStats {
        lines_read: 105,
        blank_lines: 5,
        records_parsed: 95,
        records_rejected: 5,
        ..Default::default()
    };

    assert_eq!(stats.candidate_records(), 100);
    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());
}

#[test]
fn test_record_rejection_caps_messages() {
    let mut stats = ParseStats::new();
    let error = RecordError::FieldCount {
        expected: 9,
        found: 3,
    };

    for line in 1..=5 {
        stats.record_rejection(line, &error, 3);
    }
    stats.record_rejection(6, &RecordError::InvalidEncoding, 3);

    assert_eq!(stats.records_rejected, 6);
    assert_eq!(stats.errors.len(), 3);
    assert_eq!(stats.errors[0], "Line 1: expected 9 tab-separated fields, found 3");
    assert_eq!(stats.rejections_by_kind["field_count"], 5);
    assert_eq!(stats.rejections_by_kind["invalid_encoding"], 1);
}

#[test]
fn test_merge() {
    let mut total = ParseStats::new();
    let mut first = ParseStats::new();
    first.lines_read = 10;
    first.records_parsed = 9;
    first.record_rejection(4, &RecordError::InvalidEncoding, 10);

    let mut second = ParseStats::new();
    second.lines_read = 3;
    second.blank_lines = 1;
    second.records_parsed = 1;
    second.record_rejection(2, &RecordError::InvalidEncoding, 10);

    total.merge(&first);
    total.merge(&second);

    assert_eq!(total.lines_read, 13);
    assert_eq!(total.blank_lines, 1);
    assert_eq!(total.records_parsed, 10);
    assert_eq!(total.records_rejected, 2);
    assert_eq!(total.rejections_by_kind["invalid_encoding"], 2);
    assert_eq!(total.errors.len(), 2);
}
