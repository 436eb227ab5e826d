// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model output sanitization.
//!
//! Strips Markdown code-fence wrapping from raw model output to recover a
//! JSON payload candidate. Purely textual; never validates JSON-ness.

use std::sync::LazyLock;

use regex::Regex;

static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```json\s*").unwrap());
static BARE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```\s*").unwrap());

/// Removes every ```` ```json ```` marker, then every bare ```` ``` ````
/// marker (each with trailing whitespace), then trims the result.
pub fn strip_code_fences(raw: &str) -> String {
    let without_json = JSON_FENCE.replace_all(raw, "");
    let without_fences = BARE_FENCE.replace_all(&without_json, "");
    without_fences.trim().to_string()
}
