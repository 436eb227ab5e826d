// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` API.
//!
//! [`GeminiClient`] owns the connection pool, the authentication header,
//! the per-request timeout, and the retry pass for transient HTTP failures.

use std::time::Duration;

use prepmail_config::model::GeminiConfig;
use prepmail_core::PrepmailError;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Pause between a transient failure and the attempt that follows it.
const RETRY_PAUSE: Duration = Duration::from_secs(1);

/// Client for Gemini's `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    max_output_tokens: u32,
    max_retries: u32,
    timeout: Duration,
    base_url: String,
}

/// Outcome of a single HTTP attempt that may warrant another one.
enum Reply {
    Parsed(GenerateContentResponse),
    Transient { status: StatusCode, body: String },
}

impl GeminiClient {
    /// Builds a client from the resolved API key and the `[gemini]` config
    /// section.
    ///
    /// The key travels in the `x-goog-api-key` header on every request.
    /// Fails if the key contains bytes a header cannot carry, or if reqwest
    /// cannot construct its connection pool.
    pub fn new(api_key: String, config: &GeminiConfig) -> Result<Self, PrepmailError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .default_headers(auth_headers(&api_key)?)
            .timeout(timeout)
            .build()
            .map_err(|e| PrepmailError::ModelUnavailable {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            max_retries: config.max_retries,
            timeout,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Model identifier requests are issued against.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Redirects requests at a wiremock server.
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sends one prompt and returns the parsed response.
    ///
    /// HTTP 429, 500, and 503 are retried after [`RETRY_PAUSE`], up to the
    /// configured retry budget. Anything else fails immediately, and so do
    /// transport errors; a timeout surfaces as [`PrepmailError::Timeout`].
    pub async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, PrepmailError> {
        let url = format!("{}/v1beta/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest::user_prompt(prompt, self.max_output_tokens);

        let mut attempt = 0;
        loop {
            match self.dispatch(&url, &request, attempt).await? {
                Reply::Parsed(response) => return Ok(response),
                Reply::Transient { status, body } => {
                    if attempt >= self.max_retries {
                        return Err(api_error(status, &body));
                    }
                    attempt += 1;
                    warn!(%status, attempt, "transient API error, retrying");
                    tokio::time::sleep(RETRY_PAUSE).await;
                }
            }
        }
    }

    /// One HTTP round trip. Transient statuses come back as
    /// [`Reply::Transient`] for the caller to decide on; every other failure
    /// is final.
    async fn dispatch(
        &self,
        url: &str,
        request: &GenerateContentRequest,
        attempt: u32,
    ) -> Result<Reply, PrepmailError> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(%status, attempt, "generation response received");

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| self.transport_error(e))?;
            let parsed =
                serde_json::from_str(&body).map_err(|e| PrepmailError::ModelUnavailable {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                })?;
            return Ok(Reply::Parsed(parsed));
        }

        let body = response.text().await.unwrap_or_default();
        if is_transient(status) {
            Ok(Reply::Transient { status, body })
        } else {
            Err(api_error(status, &body))
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> PrepmailError {
        if e.is_timeout() {
            PrepmailError::Timeout {
                duration: self.timeout,
            }
        } else {
            PrepmailError::ModelUnavailable {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            }
        }
    }
}

fn auth_headers(api_key: &str) -> Result<HeaderMap, PrepmailError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).map_err(|e| {
            PrepmailError::Config(format!("API key is not a valid header value: {e}"))
        })?,
    );
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Error for a failing status, preferring the structured message from
/// Gemini's error envelope over the raw body.
fn api_error(status: StatusCode, body: &str) -> PrepmailError {
    let message = match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(api_err) => format!(
            "Gemini API error ({}): {}",
            api_err.error.status, api_err.error.message
        ),
        Err(_) => format!("API returned {status}: {body}"),
    };
    PrepmailError::ModelUnavailable {
        message,
        source: None,
    }
}

/// Statuses worth one more attempt: rate limiting and server-side hiccups.
fn is_transient(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
