//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Validate strings against a configured rule set.
#[derive(Debug, Parser)]
#[command(name = "textguard", version, about)]
pub struct Cli {
    /// TOML file with `rules` and `log_level` (default: ./textguard.toml if present)
    #[arg(long, global = true, env = "TEXTGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tracing filter directive, e.g. `debug` or `textguard_validator=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run each value through the validator and print the outcome
    Check(CheckArgs),
    /// Print the effective rule list as JSON
    Rules,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Parse each value as JSON instead of taking it as a raw string
    #[arg(long)]
    pub json: bool,

    /// How to print each outcome
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Values to validate; with none, an absent value is checked
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The value on success, the failure message otherwise
    Text,
    /// One `{"ok": …}` object per line
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_accepts_hyphen_values() {
        let cli = Cli::parse_from(["textguard", "check", "--json", "-1", "x"]);
        match cli.command {
            Command::Check(args) => {
                assert!(args.json);
                assert_eq!(args.values, ["-1", "x"]);
                assert_eq!(args.output, OutputFormat::Text);
            }
            Command::Rules => panic!("expected check"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["textguard", "rules", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
