// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the roadmap pipeline and its external collaborators.
//!
//! Both traits use `#[async_trait]` for dynamic dispatch compatibility; the
//! pipeline only ever holds them behind `Arc<dyn _>` or `&dyn _`.

pub mod email;
pub mod generator;

pub use email::EmailSource;
pub use generator::TextGenerator;
