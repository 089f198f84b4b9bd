//! wix-gaming - Game Explorer registration compiler
//!
//! Drives the gaming compiler without a full installer toolchain:
//! - Compile a JSON translation request into a committed section
//! - Print the extension's table schema
//! - Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod request;

use commands::CompileStatus;
use config::CliConfig;
use error::CliResult;

/// wix-gaming CLI application
#[derive(Parser)]
#[command(name = "wix-gaming")]
#[command(about = "Compile Game Explorer registrations into installer tuples", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "WIX_GAMING_CONFIG")]
    config: Option<String>,

    /// Emit compact JSON instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Compile a translation request
    Compile {
        /// Request file (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the table definitions this extension contributes
    Tables,

    /// Show configuration
    Config,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let pretty = !cli.compact && config.pretty();

    match cli.command {
        Commands::Compile { input } => match commands::compile(&input, &config, pretty)? {
            CompileStatus::Committed => Ok(()),
            CompileStatus::Failed => std::process::exit(1),
        },
        Commands::Tables => commands::tables(pretty),
        Commands::Config => commands::show_config(&config),
    }
}
