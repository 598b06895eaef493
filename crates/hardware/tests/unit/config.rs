//! Configuration parsing and validation tests.

use mipsim_core::common::ConfigError;
use mipsim_core::config::{Config, InvalidInstructionPolicy};
use rstest::rstest;

#[test]
fn defaults_describe_dual_issue_machine() {
    let config = Config::default();
    assert_eq!(config.pipeline.issue_width, 2);
    assert_eq!(config.pipeline.register_count, 32);
    assert_eq!(config.memory.size_bytes, 4096);
    assert_eq!(config.general.entry_pc, 0);
    assert!(!config.general.trace_pipeline);
    assert_eq!(config.pipeline.invalid_instruction, InvalidInstructionPolicy::Halt);
    assert_eq!(config.pipeline.history_limit, None);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.pipeline.issue_width, 2);
    assert_eq!(config.memory.size_bytes, 4096);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let json = r#"{
        "general": { "entry_pc": 256, "trace_pipeline": true },
        "pipeline": { "history_limit": 16 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.general.entry_pc, 256);
    assert!(config.general.trace_pipeline);
    assert_eq!(config.pipeline.history_limit, Some(16));
    assert_eq!(config.pipeline.issue_width, 2);
    assert_eq!(config.pipeline.register_count, 32);
}

#[rstest]
#[case(r#"{ "pipeline": { "issue_width": 0 } }"#, "issue_width")]
#[case(r#"{ "pipeline": { "register_count": 0 } }"#, "register_count")]
#[case(r#"{ "pipeline": { "register_count": 33 } }"#, "register_count")]
#[case(r#"{ "memory": { "size_bytes": 0 } }"#, "size_bytes")]
#[case(r#"{ "memory": { "size_bytes": 1022 } }"#, "size_bytes")]
#[case(r#"{ "general": { "entry_pc": 2 } }"#, "entry_pc")]
#[case(r#"{ "pipeline": { "history_limit": 0 } }"#, "history_limit")]
fn invalid_values_are_rejected(#[case] json: &str, #[case] field: &str) {
    match Config::from_json(json) {
        Err(ConfigError::Invalid(msg)) => {
            assert!(msg.contains(field), "message {msg:?} should name {field}");
        }
        other => panic!("expected validation error for {field}, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Config::from_json(r#"{ "pipeline": { "issue_width": "two" } }"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{ "pipeline": { "invalid_instruction": "Skip" } }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn wide_machine_is_accepted() {
    let config = Config::from_json(r#"{ "pipeline": { "issue_width": 4 } }"#).unwrap();
    assert_eq!(config.pipeline.issue_width, 4);
}
