// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scriptable stand-in for the Gemini generator.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use prepmail_core::{PrepmailError, TextGenerator};

/// A mock generator that returns pre-configured replies and records every
/// prompt it is given.
///
/// Replies are popped from a FIFO queue; each entry is either a reply
/// string or an error to inject. When the queue is empty, a minimal valid
/// active reply with no steps is returned.
pub struct MockGenerator {
    replies: Arc<Mutex<VecDeque<Result<String, PrepmailError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Create a new mock generator with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock generator pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().map(Ok).collect())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn add_reply(&self, text: String) {
        self.replies.lock().await.push_back(Ok(text));
    }

    /// Queue an error: the next `generate` call fails with it.
    pub async fn fail_next(&self, error: PrepmailError) {
        self.replies.lock().await.push_back(Err(error));
    }

    /// All prompts seen so far, in call order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// Pop the next queued reply, or fall back to the default.
    async fn next_reply(&self) -> Result<String, PrepmailError> {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(r#"{"status":"active","roadmap":[]}"#.to_string()))
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, PrepmailError> {
        self.prompts.lock().await.push(prompt.to_string());
        self.next_reply().await
    }

    fn model(&self) -> &str {
        "models/mock"
    }
}
