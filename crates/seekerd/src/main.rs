//! Command line interface for the seeker resource search engine.
//!
//! This crate provides a CLI tool for querying a career-development resources
//! API using the `seeker` library. It supports:
//! - Configuration bootstrap (`init`)
//! - Searching with free text, filters, sorting and pagination
//! - Autocomplete suggestions from the recent-search history
//! - Inspecting and clearing that history
//!
//! # Usage
//!
//! ```bash
//! # Write a starting configuration
//! seeker init --api-url https://api.example.com/resources/search
//!
//! # Search the catalog
//! seeker search "react" --difficulty beginner --tag frontend
//!
//! # Autocomplete from recent searches
//! seeker suggest re
//!
//! # Inspect or clear the history
//! seeker history
//! seeker history --clear
//! ```
//!
//! The CLI provides colored output and interactive confirmations for
//! destructive operations, and supports verbosity levels for debugging
//! through the `-v` flag.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use seeker::{
  config::Config,
  error::SeekerError,
  query::{SortBy, SortOrder},
  resource::Difficulty,
  session::RefreshOutcome,
  Seeker,
};
use tracing::trace;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "CLI for the seeker career-resource search engine")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default
  /// platform-specific config directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

/// Entry point for the seeker CLI application
///
/// Handles command line argument parsing, sets up logging, and executes the
/// requested command. Every command except `init` requires a readable
/// configuration.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
  trace!("Using configuration at: {}", config_path.display());
  let interaction = ConsoleInteraction::new(cli.accept_defaults);

  if let Commands::Init(options) = &cli.command {
    return init(&interaction, &config_path, options.clone());
  }

  let Ok(seeker) = Seeker::from_path(&config_path) else {
    eprintln!(
      "{} No usable configuration at {}. Run `seeker init` first.",
      style(ERROR_PREFIX).red(),
      style(config_path.display()).yellow(),
    );
    return Err(SeekerdError::from(SeekerError::Config(
      "Configuration not initialized. Run 'seeker init' first.".to_string(),
    )));
  };

  match cli.command {
    Commands::Search(options) => search(&interaction, &seeker, options).await,
    Commands::Suggest(options) => suggest(&interaction, &seeker, options),
    Commands::History(options) => history(&interaction, &seeker, options),
    // Handled before the configuration is loaded
    Commands::Init(_) => Ok(()),
  }
}
