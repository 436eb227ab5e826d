// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration for the prepmail pipeline.
//!
//! Every struct carries `#[serde(deny_unknown_fields)]` so that a typo in a
//! config file surfaces as a startup error instead of a silently ignored key.

use serde::{Deserialize, Serialize};

/// Root of the prepmail configuration tree.
///
/// Both sections may be omitted entirely; a missing section takes its
/// `Default` values. Sources are merged in ascending precedence by the
/// loader (system file, user file, project file, environment).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrepmailConfig {
    /// Application-wide settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Application-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Log verbosity: trace, debug, info, warn, or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` requires the `GEMINI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to use for roadmap generation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Gemini API. Overridable for self-hosted proxies.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bounded timeout for one model call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on tokens generated per call.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Number of retries after a transient API failure (429/5xx).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_output_tokens: default_max_output_tokens(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_model() -> String {
    "models/gemini-flash-latest".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_output_tokens() -> u32 {
    8192
}

fn default_max_retries() -> u32 {
    1
}
