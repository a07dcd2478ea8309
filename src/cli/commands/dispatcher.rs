//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::PreflightTheme;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, rendering output with the given theme.
    fn execute(&self, theme: &PreflightTheme) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    /// Use bracketed status labels instead of glyphs.
    plain: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand runs the full check pass, the original contract of
    /// the tool.
    pub fn dispatch(&self, cli: &Cli, theme: &PreflightTheme) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => self.check(cli, args.clone(), theme),
            None => self.check(cli, CheckArgs::default(), theme),
            Some(Commands::Rules(args)) => {
                let cmd = super::rules::RulesCommand::new(args.clone());
                cmd.execute(theme)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(theme)
            }
        }
    }

    fn check(&self, cli: &Cli, args: CheckArgs, theme: &PreflightTheme) -> Result<CommandResult> {
        let cmd = super::check::CheckCommand::new(
            cli.env_file.clone(),
            args,
            cli.quiet,
            self.plain,
        );
        cmd.execute(theme)
    }
}
