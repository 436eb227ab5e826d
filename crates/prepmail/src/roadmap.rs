// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `prepmail roadmap` command implementation.
//!
//! Reads one email's text from a file or stdin, runs the roadmap pipeline
//! against the configured Gemini model, and prints the resulting roadmap
//! as pretty-printed JSON on stdout.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use prepmail_config::PrepmailConfig;
use prepmail_core::PrepmailError;
use prepmail_gemini::GeminiGenerator;
use prepmail_roadmap::RoadmapPlanner;
use tracing::info;

/// Run the `prepmail roadmap` command.
pub async fn run_roadmap(
    config: &PrepmailConfig,
    file: Option<PathBuf>,
) -> Result<(), PrepmailError> {
    // Construct the generator before touching stdin so a missing API key
    // fails fast instead of after the user has typed an email.
    let generator = GeminiGenerator::from_config(config)?;
    let planner = RoadmapPlanner::new(Arc::new(generator));

    let email_text = read_email_text(file.as_deref())?;
    info!(chars = email_text.len(), "generating roadmap");

    let result = planner.generate_roadmap(&email_text).await?;

    let rendered = serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string());
    println!("{rendered}");

    Ok(())
}

/// Read the email text from the given file, or from stdin when no file is set.
fn read_email_text(file: Option<&Path>) -> Result<String, PrepmailError> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            PrepmailError::Internal(format!("failed to read email file {}: {e}", path.display()))
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| PrepmailError::Internal(format!("failed to read stdin: {e}")))?;
            buffer
        }
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PrepmailError::Internal(
            "no email text provided (pass --file or pipe text on stdin)".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
