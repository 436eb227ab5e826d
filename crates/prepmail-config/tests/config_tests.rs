// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Behavior of the layered config loader and its diagnostics, exercised
//! through the crate's public API.

use prepmail_config::diagnostic::{suggest_key, ConfigError};
use prepmail_config::model::PrepmailConfig;
use prepmail_config::{load_and_validate_str, load_config_from_path, load_config_from_str};

#[test]
fn full_document_round_trips() {
    let toml = r#"
[app]
log_level = "debug"

[gemini]
api_key = "AIzaTest123"
model = "models/gemini-pro-latest"
base_url = "https://gemini.internal.example"
timeout_secs = 120
max_output_tokens = 2048
max_retries = 2
"#;

    let config = load_config_from_str(toml).expect("every known key should deserialize");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.gemini.api_key.as_deref(), Some("AIzaTest123"));
    assert_eq!(config.gemini.model, "models/gemini-pro-latest");
    assert_eq!(config.gemini.base_url, "https://gemini.internal.example");
    assert_eq!(config.gemini.timeout_secs, 120);
    assert_eq!(config.gemini.max_output_tokens, 2048);
    assert_eq!(config.gemini.max_retries, 2);
}

#[test]
fn empty_document_falls_back_to_defaults() {
    let config = load_config_from_str("").expect("empty input should be fine");

    assert_eq!(config.app.log_level, "info");
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "models/gemini-flash-latest");
    assert_eq!(
        config.gemini.base_url,
        "https://generativelanguage.googleapis.com"
    );
    assert_eq!(config.gemini.timeout_secs, 60);
    assert_eq!(config.gemini.max_output_tokens, 8192);
    assert_eq!(config.gemini.max_retries, 1);
}

#[test]
fn load_config_from_path_reads_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prepmail.toml");
    std::fs::write(&path, "[gemini]\nmodel = \"models/gemini-pro-latest\"\n")
        .expect("write config file");

    let config = load_config_from_path(&path).expect("file should load");
    assert_eq!(config.gemini.model, "models/gemini-pro-latest");
    assert_eq!(config.app.log_level, "info");
}

#[test]
fn misspelled_key_is_rejected() {
    let err = load_config_from_str("[gemini]\nmodle = \"models/gemini-flash-latest\"\n")
        .expect_err("typo should not deserialize");
    let rendered = err.to_string();
    assert!(
        rendered.contains("unknown field") || rendered.contains("modle"),
        "got: {rendered}"
    );
}

#[test]
fn unexpected_section_is_rejected() {
    let err = load_config_from_str("[smtp]\nhost = \"mail.example.com\"\n")
        .expect_err("sections outside the model should not deserialize");
    let rendered = err.to_string();
    assert!(
        rendered.contains("unknown field") || rendered.contains("smtp"),
        "got: {rendered}"
    );
}

#[test]
fn dotted_merge_targets_nested_field() {
    use figment::{providers::Serialized, Figment};

    // The env provider maps PREPMAIL_GEMINI_API_KEY to this dotted path.
    let config: PrepmailConfig = Figment::new()
        .merge(Serialized::defaults(PrepmailConfig::default()))
        .merge(("gemini.api_key", "key-from-env"))
        .extract()
        .expect("dotted merge should land on gemini.api_key");

    assert_eq!(config.gemini.api_key.as_deref(), Some("key-from-env"));
}

#[test]
fn later_layers_shadow_earlier_ones() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: PrepmailConfig = Figment::new()
        .merge(Serialized::defaults(PrepmailConfig::default()))
        .merge(Toml::string("[gemini]\nmodel = \"models/from-toml\"\n"))
        .merge(("gemini.model", "models/from-env"))
        .extract()
        .expect("layered merge should succeed");

    assert_eq!(config.gemini.model, "models/from-env");
}

#[test]
fn absent_files_are_skipped() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: PrepmailConfig = Figment::new()
        .merge(Serialized::defaults(PrepmailConfig::default()))
        .merge(Toml::file("/nonexistent/path/prepmail.toml"))
        .extract()
        .expect("a missing file is not an error");

    assert_eq!(config.gemini.model, "models/gemini-flash-latest");
}

#[test]
fn typo_suggestion_survives_reexport() {
    let valid_keys = &[
        "api_key",
        "model",
        "base_url",
        "timeout_secs",
        "max_output_tokens",
        "max_retries",
    ];
    assert_eq!(suggest_key("modle", valid_keys), Some("model".to_string()));
    assert_eq!(suggest_key("zzzzzz", valid_keys), None);
}

#[test]
fn unknown_key_error_carries_suggestion_and_valid_keys() {
    let errors = load_and_validate_str("[gemini]\nmodle = \"models/gemini-flash-latest\"\n")
        .expect_err("typo should produce diagnostics");

    let found = errors.iter().find_map(|e| match e {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => Some((key.as_str(), suggestion.as_deref(), valid_keys.as_str())),
        _ => None,
    });

    let (key, suggestion, valid_keys) = found.expect("expected an UnknownKey error");
    assert_eq!(key, "modle");
    assert_eq!(suggestion, Some("model"));
    assert!(
        valid_keys.contains("api_key") && valid_keys.contains("max_retries"),
        "got: {valid_keys}"
    );
}

#[test]
fn wrong_value_type_is_reported() {
    let err = load_config_from_str("[gemini]\ntimeout_secs = \"not_a_number\"\n")
        .expect_err("string is not a u64");
    let rendered = err.to_string();
    assert!(
        rendered.contains("invalid type") || rendered.contains("timeout_secs"),
        "got: {rendered}"
    );
}

#[test]
fn config_error_exposes_code_and_help() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "modle".to_string(),
        suggestion: Some("model".to_string()),
        valid_keys: "api_key, model, base_url".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some());
    let help = error.help().expect("unknown keys carry help text").to_string();
    assert!(help.contains("did you mean `model`"), "got: {help}");
}

#[test]
fn config_error_renders_graphically() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::Validation {
        message: "gemini.timeout_secs must be at least 1".to_string(),
    };

    let mut rendered = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut rendered, &error)
        .expect("report should render");
    assert!(rendered.contains("timeout_secs"), "got: {rendered}");
}

#[test]
fn validate_str_accepts_good_document() {
    let config = load_and_validate_str("[app]\nlog_level = \"warn\"\n")
        .expect("valid document should pass validation");
    assert_eq!(config.app.log_level, "warn");
}

#[test]
fn semantic_errors_surface_after_deserialization() {
    let toml = "[app]\nlog_level = \"shout\"\n\n[gemini]\ntimeout_secs = 0\n";
    let errors = load_and_validate_str(toml).expect_err("constraint breaks should fail");

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(messages.iter().any(|m| m.contains("log_level")), "{messages:?}");
    assert!(messages.iter().any(|m| m.contains("timeout_secs")), "{messages:?}");
}
