//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros. Running with no
//! subcommand performs one full check pass, so `preflight` alone is the
//! whole deployment-gate invocation.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Preflight - Environment and service readiness checker.
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Layer an env file under the process environment
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Only print the summary and verdict
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full readiness check (default if no command specified)
    Check(CheckArgs),

    /// List the configuration rule catalog
    Rules(RulesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Per-probe HTTP timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_means_no_subcommand() {
        let cli = Cli::parse_from(["preflight"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn check_accepts_json_and_timeout() {
        let cli = Cli::parse_from(["preflight", "check", "--json", "--timeout", "3"]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert!(args.json);
                assert_eq!(args.timeout, Some(3));
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn env_file_is_global() {
        let cli = Cli::parse_from(["preflight", "check", "--env-file", "/app/.env"]);
        assert_eq!(cli.env_file, Some(PathBuf::from("/app/.env")));
    }

    #[test]
    fn rules_accepts_json() {
        let cli = Cli::parse_from(["preflight", "rules", "--json"]);
        match cli.command {
            Some(Commands::Rules(args)) => assert!(args.json),
            other => panic!("expected rules, got {other:?}"),
        }
    }
}
