//! # graphguard CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gg_cli::ask::{run_ask, AskArgs};
use gg_cli::init::{run_init, InitArgs};
use gg_cli::load_config;
use gg_cli::metrics::{run_metrics, MetricsArgs};

/// GraphGuard compliance auditor
///
/// Answers regulatory-compliance questions and keeps an audit trail of
/// every interaction in a CSV table.
#[derive(Parser, Debug)]
#[command(name = "graphguard", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Audit table path. Overrides the configuration file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the audit table if it does not exist.
    Init(InitArgs),

    /// Answer a compliance question and record the interaction.
    Ask(AskArgs),

    /// Summarise the audit table.
    Metrics(MetricsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(cli.config.as_deref(), cli.log_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(log_file = %config.log_file.display(), "resolved audit log");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Init(args) => run_init(&args, &config, &mut out),
        Commands::Ask(args) => run_ask(&args, &config, &mut out),
        Commands::Metrics(args) => run_metrics(&args, &config, &mut out),
    };
    let _ = out.flush();

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
