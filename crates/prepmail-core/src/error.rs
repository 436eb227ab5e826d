// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the prepmail roadmap pipeline.

use thiserror::Error;

/// The primary error type used across the prepmail trait seams and pipeline stages.
#[derive(Debug, Error)]
pub enum PrepmailError {
    /// Configuration errors (invalid TOML, missing required fields, absent API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// The generative-text service could not be reached or rejected the request
    /// (transport failure, authentication failure, quota exhaustion).
    #[error("model unavailable: {message}")]
    ModelUnavailable {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The model call exceeded its bounded timeout.
    #[error("model call timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// The model output was blank after sanitization.
    #[error("model returned an empty response")]
    EmptyModelResponse,

    /// The sanitized model output failed structured parsing. The raw text is
    /// carried for diagnostics and is never retried.
    #[error("model returned invalid JSON: {reason}")]
    InvalidModelJson { reason: String, raw: String },

    /// The email source had no record for the requested id.
    #[error("email not found: {id}")]
    EmailNotFound { id: i64 },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
