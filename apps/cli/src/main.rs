//! `textguard` — validate strings from the command line.
//!
//! ```bash
//! textguard check bar foo ""
//! textguard check --json null 42 '"bar"'
//! textguard --config rules.toml rules
//! ```

mod check;
mod cli;
mod config;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref(), cli.log_level.as_deref())
        .context("failed to load configuration")?;
    init_tracing(&config.log_level)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Check(args) => check::run(&config.rules, &args, &mut out),
        Command::Rules => {
            serde_json::to_writer_pretty(&mut out, &config.rules)
                .context("failed to serialize rules")?;
            writeln!(out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Installs the stderr `fmt` subscriber so stdout stays machine-readable.
fn init_tracing(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")
}
