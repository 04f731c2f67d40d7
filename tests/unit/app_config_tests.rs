/*!
 * Tests for application configuration
 */

use lyrsync::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_defaultConfig_shouldUseExpectedValues() {
    let config = Config::default();

    assert_eq!(config.tracks.original_extension, "lrc");
    assert_eq!(config.tracks.translation_extension, "tlrc");
    assert_eq!(config.tracks.romanization_extension, "rlrc");
    assert_eq!(config.tracks.dynamic_extension, "yrc");
    assert!(config.output.pretty);
    assert_eq!(config.output.suffix, "timeline.json");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration validates
#[test]
fn test_defaultConfig_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

/// Test parsing a partial config file with defaults filling the gaps
#[test]
fn test_configDeserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{ "output": { "pretty": false } }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert!(!config.output.pretty);
    assert_eq!(config.output.suffix, "timeline.json");
    assert_eq!(config.tracks.original_extension, "lrc");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test log level deserialization uses lowercase names
#[test]
fn test_configDeserialize_withLogLevel_shouldParseLowercase() {
    let json = r#"{ "log_level": "debug" }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test config serialization round trip
#[test]
fn test_configSerde_roundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.output.pretty = false;
    config.tracks.translation_extension = "trans".to_string();
    config.log_level = LogLevel::Trace;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert!(!parsed.output.pretty);
    assert_eq!(parsed.tracks.translation_extension, "trans");
    assert_eq!(parsed.log_level, LogLevel::Trace);
}

/// Test that duplicate extensions fail validation
#[test]
fn test_configValidate_withDuplicateExtensions_shouldFail() {
    let mut config = Config::default();
    config.tracks.translation_extension = "lrc".to_string();

    assert!(config.validate().is_err());
}

/// Test that a leading dot in an extension fails validation
#[test]
fn test_configValidate_withLeadingDot_shouldFail() {
    let mut config = Config::default();
    config.tracks.dynamic_extension = ".yrc".to_string();

    assert!(config.validate().is_err());
}

/// Test that an empty extension fails validation
#[test]
fn test_configValidate_withEmptyExtension_shouldFail() {
    let mut config = Config::default();
    config.tracks.original_extension = String::new();

    assert!(config.validate().is_err());
}

/// Test that an empty output suffix fails validation
#[test]
fn test_configValidate_withEmptySuffix_shouldFail() {
    let mut config = Config::default();
    config.output.suffix = String::new();

    assert!(config.validate().is_err());
}
