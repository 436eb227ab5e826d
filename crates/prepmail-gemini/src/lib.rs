// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini text generator for prepmail.
//!
//! Implements [`TextGenerator`] on top of the Gemini `generateContent`
//! REST API: single-shot prompt completion with a bounded timeout and one
//! retry pass for transient failures.

pub mod client;
pub mod types;

use async_trait::async_trait;
use prepmail_config::PrepmailConfig;
use prepmail_core::{PrepmailError, TextGenerator};
use tracing::info;

use crate::client::GeminiClient;

/// Gemini-backed [`TextGenerator`].
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    /// Builds a generator from the loaded configuration.
    ///
    /// The API key comes from `gemini.api_key` when set, otherwise from the
    /// `GEMINI_API_KEY` environment variable. No key, or an HTTP client that
    /// cannot be constructed, fails here so a misconfigured deployment dies
    /// at startup instead of on the first request.
    pub fn from_config(config: &PrepmailConfig) -> Result<Self, PrepmailError> {
        let api_key = resolve_api_key(config.gemini.api_key.as_deref())?;
        let client = GeminiClient::new(api_key, &config.gemini)?;

        info!(model = %config.gemini.model, "Gemini generator initialized");

        Ok(Self { client })
    }

    /// Wraps an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, PrepmailError> {
        let response = self.client.generate_content(prompt).await?;
        Ok(response.text())
    }

    fn model(&self) -> &str {
        self.client.model()
    }
}

/// API key from config when present and non-empty, else from the
/// environment.
fn resolve_api_key(config_key: Option<&str>) -> Result<String, PrepmailError> {
    match config_key {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => std::env::var("GEMINI_API_KEY").map_err(|_| {
            PrepmailError::Config(
                "Gemini API key not found. Set gemini.api_key in config or the GEMINI_API_KEY environment variable.".into(),
            )
        }),
    }
}
