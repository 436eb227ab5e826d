// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock collaborators for prepmail tests.
//!
//! [`MockGenerator`] stands in for the Gemini backend with a scriptable
//! reply queue and prompt capture. [`MockEmailSource`] serves email records
//! from an in-memory map. Neither touches the network, so tests built on
//! them run deterministically in CI.

pub mod mock_email;
pub mod mock_generator;

pub use mock_email::MockEmailSource;
pub use mock_generator::MockGenerator;
