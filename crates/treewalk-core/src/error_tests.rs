//! Tests for error display and conversions.

use crate::error::{Error, ParseEnumError};

#[test]
fn test_error_display() {
    let err = Error::MultipleParents {
        child: 4,
        first: 2,
        second: 3,
    };
    assert_eq!(err.to_string(), "Node 4 has more than one parent (2 and 3)");
    assert_eq!(
        Error::Unreachable(9).to_string(),
        "Node 9 is not reachable from the root"
    );
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_error_from_json() {
    let json_err = serde_json::from_str::<u64>("nope").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_parse_enum_error_display() {
    let err = ParseEnumError {
        kind: "format",
        value: "xml".to_string(),
        expected: "text, json",
    };
    assert_eq!(
        err.to_string(),
        "Unknown format 'xml' (expected one of: text, json)"
    );
}
