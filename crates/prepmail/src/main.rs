// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prepmail - placement emails in, preparation roadmaps out.
//!
//! Binary entry point: argument parsing, config loading, and tracing setup
//! happen here before dispatching to a subcommand.

mod config;
mod roadmap;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Prepmail - turn placement emails into preparation roadmaps.
#[derive(Parser, Debug)]
#[command(name = "prepmail", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a preparation roadmap from an interview email.
    Roadmap {
        /// Read the email text from this file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the resolved configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Config problems are fatal before any subcommand runs.
    let config = match prepmail_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            prepmail_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Roadmap { file }) => roadmap::run_roadmap(&config, file).await,
        Some(Commands::Config) => config::run_config(&config),
        None => {
            println!("prepmail: run with --help to see commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("prepmail: {err}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prepmail={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn startup_config_path_works_without_files() {
        let config =
            prepmail_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.gemini.model, "models/gemini-flash-latest");
    }
}
