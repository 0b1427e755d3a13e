//! Tests for the Output module
//!
//! Output provides result types that render as either human-readable text
//! or machine-parseable JSON.

use secret_santa::output::{DrawResult, OutputMode, RosterResult};

use crate::common::ring;

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// DrawResult
// =============================================================================

#[test]
fn draw_result_serialization() {
    let result = DrawResult::new(&ring(), Some(7));
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["participants"], 3);
    assert_eq!(json["seed"], 7);
    assert_eq!(json["pairs"][0]["giver"], "Alice");
    assert_eq!(json["pairs"][0]["giftee"], "Bob");
}

#[test]
fn draw_result_omits_missing_seed() {
    let json = serde_json::to_string(&DrawResult::new(&ring(), None)).unwrap();
    assert!(!json.contains("seed"));
}

#[test]
fn draw_result_human() {
    let text = DrawResult::new(&ring(), Some(7)).to_human();
    assert!(text.starts_with("Drew 3 pair(s) (seed 7):"));
    assert!(text.contains("Alice  ->  Bob"));
    assert!(text.contains("Carol  ->  Alice"));
}

// =============================================================================
// RosterResult
// =============================================================================

#[test]
fn roster_result_human() {
    let result = RosterResult {
        source: "students.txt".to_string(),
        count: 2,
        names: vec!["Alice".to_string(), "Bob".to_string()],
    };
    let text = result.to_human();
    assert!(text.starts_with("2 participant(s) in students.txt"));
    assert!(text.contains("  1. Alice"));
    assert!(text.contains("  2. Bob"));
}

#[test]
fn roster_result_empty() {
    let result = RosterResult {
        source: "empty.txt".to_string(),
        count: 0,
        names: vec![],
    };
    assert_eq!(result.to_human(), "No participants in empty.txt.\n");
}

#[test]
fn roster_result_serialization() {
    let result = RosterResult {
        source: "students.txt".to_string(),
        count: 1,
        names: vec!["Alice".to_string()],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"source":"students.txt","count":1,"names":["Alice"]}"#);
}
