//! `outcome`: format templates, render catalog messages and validate
//! documents from the command line.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{FormatArgs, MessageArgs, ValidateArgs};
use crate::config::CliConfig;

/// Environment variable holding the log filter; `RUST_LOG` is read when unset.
const LOG_ENV: &str = "OUTCOME_LOG";

#[derive(Debug, Parser)]
#[command(name = "outcome", version, about, propagate_version = true)]
struct Cli {
    /// Configuration file (default: ./outcome.toml when present).
    #[arg(long, global = true, env = "OUTCOME_CONFIG")]
    config: Option<PathBuf>,

    /// Default locale, overriding the configuration.
    #[arg(long, global = true)]
    default_locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Substitute tokens into a template.
    Format(FormatArgs),
    /// Render a catalog message as JSON.
    Message(MessageArgs),
    /// Validate a sign-up document and print the outcome as JSON.
    Validate(ValidateArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.default_locale.is_some() {
        config.default_locale = cli.default_locale;
    }
    config.outcome_config().install()?;
    tracing::debug!(?config, "configuration loaded");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Format(args) => commands::format(&args, &mut stdout),
        Command::Message(args) => commands::message(&args, &config, &mut stdout),
        Command::Validate(args) => commands::validate(&args, &mut stdout),
    }
}
