// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the prepmail roadmap pipeline.
//!
//! This crate provides the foundational trait seams, error type, and common
//! types used throughout the prepmail workspace. The pipeline crates depend
//! only on the abstractions defined here, never on each other's internals.

pub mod error;
pub mod traits;
pub mod types;

// Crate-root re-exports so callers can import the seams directly.
pub use error::PrepmailError;
pub use traits::{EmailSource, TextGenerator};
pub use types::EmailRecord;
