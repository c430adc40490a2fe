//! Tests for the Output module
//!
//! Output provides a structured report type that can be rendered as either
//! human-readable text or machine-parseable JSON.

use proofcheck::output::{OutputMode, ValidationReport};
use proofcheck::validator::FoundDevice;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// ValidationReport Serialization Tests
// =============================================================================

#[test]
fn report_serialization_passing() {
    let report = ValidationReport {
        feature: "login-flow".to_string(),
        required: vec!["iPhone 15 Pro".to_string()],
        passed: true,
        found: vec![FoundDevice {
            device: "iPhone 15 Pro".to_string(),
            screenshots: 2,
        }],
        missing: vec![],
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"feature\":\"login-flow\""));
    assert!(json.contains("\"passed\":true"));
    assert!(json.contains("\"screenshots\":2"));
    assert!(json.contains("\"missing\":[]"));
}

#[test]
fn report_serialization_with_missing_devices() {
    let report = ValidationReport {
        feature: "login-flow".to_string(),
        required: vec!["iPad Pro (12.9-inch) (6th generation)".to_string()],
        passed: false,
        found: vec![],
        missing: vec!["iPad Pro (12.9-inch) (6th generation)".to_string()],
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"passed\":false"));
    assert!(json.contains("iPad Pro (12.9-inch) (6th generation)"));
    assert!(json.contains("\"found\":[]"));
}

#[test]
fn report_preserves_required_device_order() {
    let report = ValidationReport {
        feature: "settings".to_string(),
        required: vec!["b".to_string(), "a".to_string()],
        passed: false,
        found: vec![],
        missing: vec!["b".to_string(), "a".to_string()],
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"required\":[\"b\",\"a\"]"));
}
