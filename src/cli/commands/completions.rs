//! Shell completions generation.
//!
//! The `preflight completions` command generates shell completion scripts.

use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};
use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::PreflightTheme;

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _theme: &PreflightTheme) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "preflight", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
