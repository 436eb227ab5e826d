// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the prepmail roadmap pipeline.
//!
//! Strict TOML parsing (`deny_unknown_fields`) layered over compiled
//! defaults, file hierarchy, and `PREPMAIL_` environment variables, with
//! semantic validation and miette-rendered diagnostics that suggest
//! corrections for mistyped keys.
//!
//! # Usage
//!
//! ```no_run
//! use prepmail_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Model: {}", config.gemini.model);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::PrepmailConfig;

/// Load from the standard hierarchy, then validate.
///
/// Figment failures come back as rich [`ConfigError`] diagnostics with
/// source spans and typo suggestions; a config that deserializes but
/// breaks a semantic constraint comes back as validation errors. Either
/// way the caller gets every problem at once, not just the first.
pub fn load_and_validate() -> Result<PrepmailConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &read_toml_sources())),
    }
}

/// Load from a TOML string, then validate. The string stands in for a file
/// named `<inline>` in rendered diagnostics.
pub fn load_and_validate_str(toml_content: &str) -> Result<PrepmailConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Contents of every config file that currently exists, keyed by the path
/// Figment reports for it, for diagnostic span resolution.
fn read_toml_sources() -> Vec<(String, String)> {
    loader::config_files()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            // Figment reports relative files by their resolved absolute path.
            let shown = if path.is_relative() {
                std::env::current_dir()
                    .map(|dir| dir.join(&path))
                    .unwrap_or(path)
            } else {
                path
            };
            Some((shown.display().to_string(), content))
        })
        .collect()
}
