// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `prepmail config` command implementation.
//!
//! Prints the fully resolved configuration as TOML, with the API key
//! redacted so the output is safe to share in bug reports.

use prepmail_config::PrepmailConfig;
use prepmail_core::PrepmailError;

/// Run the `prepmail config` command.
pub fn run_config(config: &PrepmailConfig) -> Result<(), PrepmailError> {
    let rendered = toml::to_string_pretty(&redacted(config))
        .map_err(|e| PrepmailError::Internal(format!("failed to render config: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// Clone the config with the API key replaced by a redaction marker.
fn redacted(config: &PrepmailConfig) -> PrepmailConfig {
    let mut config = config.clone();
    if config.gemini.api_key.is_some() {
        config.gemini.api_key = Some("[REDACTED]".to_string());
    }
    config
}
