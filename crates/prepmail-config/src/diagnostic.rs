// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rich configuration diagnostics.
//!
//! Figment reports deserialization failures as flat error values. This module
//! lifts each one into a [`ConfigError`] miette diagnostic: a source span into
//! the offending TOML file where one can be located, the section's valid keys,
//! and a Jaro-Winkler "did you mean" suggestion for near-miss typos.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Similarity floor for typo suggestions. High enough to skip unrelated
/// keys, low enough to catch one-edit slips like `modle` for `model` or
/// `api_ky` for `api_key`.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error carrying everything miette needs to render an
/// Elm-style report: span, source text, suggestion, and valid keys.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key that no section of the configuration accepts.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(prepmail::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        /// Closest valid key above the similarity floor, if any.
        suggestion: Option<String>,
        /// Comma-joined valid keys for the section, for the help text.
        valid_keys: String,
        #[label("not a recognized key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value whose TOML type does not match the field.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(prepmail::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
        #[label("wrong type here")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A key the model requires but no layer supplied.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(prepmail::config::missing_key),
        help("add `{key} = <value>` to your prepmail.toml")
    )]
    MissingKey { key: String },

    /// A semantic constraint that deserialization alone cannot catch.
    #[error("validation error: {message}")]
    #[diagnostic(code(prepmail::config::validation))]
    Validation { message: String },

    /// Any figment error without a more specific mapping.
    #[error("configuration error: {0}")]
    #[diagnostic(code(prepmail::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    suggestion.map_or_else(
        || format!("valid keys: {valid_keys}"),
        |s| format!("did you mean `{s}`? Valid keys: {valid_keys}"),
    )
}

/// Convert a `figment::Error` into one [`ConfigError`] per contained error.
///
/// `toml_sources` pairs file paths with their contents so unknown-key errors
/// can point into the exact file and byte range the key came from.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    err.into_iter().map(|e| classify(e, toml_sources)).collect()
}

fn classify(error: figment::Error, toml_sources: &[(String, String)]) -> ConfigError {
    use figment::error::Kind;

    match &error.kind {
        Kind::UnknownField(field, expected) => {
            let candidates: Vec<&str> = expected.to_vec();
            let (span, src) = resolve_span(&error, field, toml_sources);
            ConfigError::UnknownKey {
                key: field.clone(),
                suggestion: suggest_key(field, &candidates),
                valid_keys: candidates.join(", "),
                span,
                src,
            }
        }
        Kind::MissingField(field) => ConfigError::MissingKey {
            key: field.clone().into_owned(),
        },
        Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
            key: dotted_path(&error),
            detail: format!("found {actual}, expected {expected}"),
            expected: expected.to_string(),
            span: None,
            src: None,
        },
        _ => ConfigError::Other(error.to_string()),
    }
}

/// Dotted key path of a figment error, e.g. `gemini.timeout_secs`.
fn dotted_path(error: &figment::Error) -> String {
    error
        .path
        .iter()
        .map(|segment| segment.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Locate `field` in whichever TOML source the error originated from.
fn resolve_span(
    error: &figment::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    let Some(path) = origin else {
        return (None, None);
    };
    let Some((name, content)) = toml_sources.iter().find(|(p, _)| *p == path) else {
        return (None, None);
    };

    let sections: Vec<String> = error.path.iter().map(|s| s.to_string()).collect();
    match find_key_offset(content, &sections, field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(name, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of `field` as a key in TOML `content`.
///
/// When `path` names a section, the scan starts after its `[section]`
/// header. A hit must sit at the start of a line (whitespace aside) and be
/// followed by `=`, a space, or a tab, so mentions of the name inside
/// values never match.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        None => 0,
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
    };

    for (pos, _) in content[start..].match_indices(field) {
        let at = start + pos;
        let line_start = content[..at].rfind('\n').map_or(0, |nl| nl + 1);
        if !content[line_start..at].trim().is_empty() {
            continue;
        }
        let after = &content[at + field.len()..];
        if after.starts_with([' ', '\t', '=']) {
            return Some(at);
        }
    }

    None
}

/// Closest valid key to `unknown` by Jaro-Winkler similarity, if any key
/// clears [`SUGGESTION_THRESHOLD`].
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, key)| key.to_string())
}

/// Render each error to stderr through miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut report = String::new();
        match handler.render_report(&mut report, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{report}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}
