// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Email source seam.

use async_trait::async_trait;

use crate::error::PrepmailError;
use crate::types::EmailRecord;

/// Supplies stored emails to the pipeline by opaque identifier.
///
/// Ingestion, classification, and persistence live behind this trait; the
/// pipeline only ever reads single records out of it.
#[async_trait]
pub trait EmailSource: Send + Sync {
    /// Looks up one stored email. `Ok(None)` means the id is unknown, which
    /// is a normal outcome for the source and becomes
    /// [`PrepmailError::EmailNotFound`] at the planner boundary.
    async fn fetch_email(&self, id: i64) -> Result<Option<EmailRecord>, PrepmailError>;
}
