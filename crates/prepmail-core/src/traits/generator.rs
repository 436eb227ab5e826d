// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generative-text service seam.

use async_trait::async_trait;

use crate::error::PrepmailError;

/// A generative-text service that turns a prompt into raw model output.
///
/// This is the only seam in the pipeline that touches the network. Implementors
/// are constructed fail-fast at startup (credential resolution happens in the
/// constructor, not per call) and injected into the planner.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends the prompt to the model and returns its text output verbatim.
    ///
    /// Transport, authentication, and quota failures surface as
    /// [`PrepmailError::ModelUnavailable`]; a bounded-timeout expiry surfaces
    /// as [`PrepmailError::Timeout`]. Implementors never return an error for
    /// an empty-but-successful response, since downstream parsing owns that
    /// case.
    async fn generate(&self, prompt: &str) -> Result<String, PrepmailError>;

    /// The model identifier requests are issued against.
    fn model(&self) -> &str;
}
