//! Tests for line-level parsing

use super::*;
use crate::app::services::tdv_parser::{RecordError, TdvParser};
use crate::config::AnalyzerConfig;

#[test]
fn test_strip_terminator() {
    assert_eq!(TdvParser::strip_terminator("abc\n"), "abc");
    assert_eq!(TdvParser::strip_terminator("abc\r\n"), "abc");
    assert_eq!(TdvParser::strip_terminator("abc"), "abc");
    assert_eq!(TdvParser::strip_terminator("\n"), "");
}

#[test]
fn test_is_blank() {
    assert!(TdvParser::is_blank("\n"));
    assert!(TdvParser::is_blank("   \r\n"));
    assert!(TdvParser::is_blank(""));
    assert!(!TdvParser::is_blank(sample_line()));
}

#[test]
fn test_parse_line_with_terminators() {
    let parser = TdvParser::default();

    for terminator in ["", "\n", "\r\n"] {
        let line = format!("{}{}", sample_line(), terminator);
        let observation = parser.parse_line(&line).unwrap();
        assert_eq!(observation.state_code, "CA");
        assert!((observation.temperature_f - 39.986_888).abs() < 1e-4);
    }
}

#[test]
fn test_line_at_limit_is_accepted() {
    let parser = TdvParser::new(&AnalyzerConfig::default().with_max_line_length(sample_line().len()));

    assert!(parser.parse_line(sample_line()).is_ok());
}

#[test]
fn test_line_over_limit_is_rejected_not_truncated() {
    let limit = sample_line().len() - 1;
    let parser = TdvParser::new(&AnalyzerConfig::default().with_max_line_length(limit));

    assert_eq!(
        parser.parse_line(&format!("{}\n", sample_line())),
        Err(RecordError::LineTooLong {
            length: sample_line().len(),
            limit
        })
    );
}

#[test]
fn test_default_limit_is_99_characters() {
    let parser = TdvParser::default();
    assert_eq!(parser.max_line_length(), 99);

    let padded_geohash = "g".repeat(60);
    let line = sample_line().replace("9prcjqk3yc80", &padded_geohash);
    assert!(line.len() > 99);

    assert!(matches!(
        parser.parse_line(&line),
        Err(RecordError::LineTooLong { limit: 99, .. })
    ));
}

#[test]
fn test_limit_counts_characters_not_bytes() {
    // Six two-byte characters: 12 bytes, 6 characters
    let line = sample_line().replace("9prcjqk3yc80", "éééééé");
    let parser = TdvParser::new(&AnalyzerConfig::default().with_max_line_length(line.chars().count()));

    assert!(line.len() > line.chars().count());
    assert!(parser.parse_line(&line).is_ok());
}

#[test]
fn test_parse_line_fewer_fields() {
    let parser = TdvParser::default();

    assert!(matches!(
        parser.parse_line("TN\t1428300000000\n"),
        Err(RecordError::FieldCount {
            expected: 9,
            found: 2
        })
    ));
}

#[test]
fn test_decode_line_invalid_utf8() {
    let mut bytes = sample_line().as_bytes().to_vec();
    bytes[0] = 0xFF;

    assert_eq!(TdvParser::decode_line(&bytes), Err(RecordError::InvalidEncoding));
    assert_eq!(
        TdvParser::decode_line(sample_line().as_bytes()),
        Ok(sample_line())
    );
}

#[test]
fn test_range_validation_follows_config() {
    let line = tdv_line("TX", 1, 140.0, 0.0, 50.0, 0.0, 100_000.0, 300.0);

    assert!(TdvParser::default().parse_line(&line).is_ok());

    let strict = TdvParser::new(&AnalyzerConfig::default().with_range_validation());
    assert!(matches!(
        strict.parse_line(&line),
        Err(RecordError::OutOfRange { .. })
    ));
}

#[test]
fn test_record_error_kinds() {
    let error = RecordError::FieldCount {
        expected: 9,
        found: 2,
    };
    assert_eq!(error.kind(), "field_count");
    assert_eq!(
        error.to_string(),
        "expected 9 tab-separated fields, found 2"
    );
    assert_eq!(RecordError::InvalidEncoding.kind(), "invalid_encoding");
}
