// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic validation of deserialized configuration.
//!
//! Catches constraints serde cannot express: the log level must be one
//! tracing understands, the model name and base URL must be usable, and
//! the timeout and token budget must be non-zero.

use crate::diagnostic::ConfigError;
use crate::model::PrepmailConfig;

const KNOWN_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Check every semantic constraint, collecting all failures rather than
/// stopping at the first.
pub fn validate_config(config: &PrepmailConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let level = config.app.log_level.trim();
    if !KNOWN_LEVELS.contains(&level) {
        fail(format!(
            "app.log_level must be one of {}, got `{level}`",
            KNOWN_LEVELS.join(", ")
        ));
    }

    if config.gemini.model.trim().is_empty() {
        fail("gemini.model must not be empty".to_string());
    }

    let base_url = config.gemini.base_url.trim();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        fail(format!(
            "gemini.base_url must be an http(s) URL, got `{base_url}`"
        ));
    }

    if config.gemini.timeout_secs == 0 {
        fail("gemini.timeout_secs must be at least 1".to_string());
    }

    if config.gemini.max_output_tokens == 0 {
        fail("gemini.max_output_tokens must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&PrepmailConfig::default()).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = PrepmailConfig::default();
        config.app.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "log_level"));
    }

    #[test]
    fn empty_model_fails_validation() {
        let mut config = PrepmailConfig::default();
        config.gemini.model = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "gemini.model"));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = PrepmailConfig::default();
        config.gemini.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "timeout_secs"));
    }

    #[test]
    fn non_http_base_url_fails_validation() {
        let mut config = PrepmailConfig::default();
        config.gemini.base_url = "ftp://example.com".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "base_url"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = PrepmailConfig::default();
        config.app.log_level = "loud".to_string();
        config.gemini.model = "".to_string();
        config.gemini.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3, "validation should not fail fast: {errors:?}");
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = PrepmailConfig::default();
        config.app.log_level = "debug".to_string();
        config.gemini.model = "models/gemini-pro-latest".to_string();
        config.gemini.timeout_secs = 120;
        config.gemini.max_output_tokens = 2048;
        assert!(validate_config(&config).is_ok());
    }
}
