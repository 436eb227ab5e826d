// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading via Figment.
//!
//! Values merge from compiled defaults, then the system, XDG, and local
//! `prepmail.toml` files, then `PREPMAIL_`-prefixed environment variables,
//! with later layers overriding earlier ones.

#![allow(clippy::result_large_err)] // callers match on figment::Error directly

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PrepmailConfig;

/// Candidate TOML files in ascending precedence order.
///
/// Entries that do not exist are harmless: Figment skips absent files and
/// the diagnostic span collector only reads the ones it can open.
pub(crate) fn config_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from("/etc/prepmail/prepmail.toml")];
    if let Some(dir) = dirs::config_dir() {
        files.push(dir.join("prepmail/prepmail.toml"));
    }
    files.push(PathBuf::from("prepmail.toml"));
    files
}

/// Load configuration from the standard file hierarchy and environment.
pub fn load_config() -> Result<PrepmailConfig, figment::Error> {
    let mut figment = Figment::from(Serialized::defaults(PrepmailConfig::default()));
    for file in config_files() {
        figment = figment.merge(Toml::file(file));
    }
    figment.merge(env_provider()).extract()
}

/// Load configuration from a TOML string over the compiled defaults,
/// with no file lookup and no environment overrides.
pub fn load_config_from_str(toml_content: &str) -> Result<PrepmailConfig, figment::Error> {
    Figment::from(Serialized::defaults(PrepmailConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, still honoring environment
/// overrides.
pub fn load_config_from_path(path: &Path) -> Result<PrepmailConfig, figment::Error> {
    Figment::from(Serialized::defaults(PrepmailConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider mapping `PREPMAIL_<SECTION>_<KEY>` onto dotted keys.
///
/// Only the section prefix turns into a dot. `Env::split("_")` would split
/// every underscore and shatter names like `api_key`, so each section is
/// mapped explicitly: `PREPMAIL_GEMINI_API_KEY` becomes `gemini.api_key`.
fn env_provider() -> Env {
    Env::prefixed("PREPMAIL_").map(|key| {
        key.as_str()
            .replacen("app_", "app.", 1)
            .replacen("gemini_", "gemini.", 1)
            .into()
    })
}
