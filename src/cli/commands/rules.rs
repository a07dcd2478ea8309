//! The rules command.
//!
//! Lists the configuration rule catalog so operators can see every key the
//! checker cares about without reading source.

use serde::Serialize;

use super::dispatcher::{Command, CommandResult};
use crate::cli::args::RulesArgs;
use crate::error::{PreflightError, Result};
use crate::rules::RuleRegistry;
use crate::ui::PreflightTheme;

/// The rules command implementation.
pub struct RulesCommand {
    args: RulesArgs,
}

#[derive(Serialize)]
struct RuleRow<'a> {
    key: &'a str,
    required: bool,
    format: Option<&'a str>,
    purpose: &'a str,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(args: RulesArgs) -> Self {
        Self { args }
    }
}

impl Command for RulesCommand {
    fn execute(&self, theme: &PreflightTheme) -> Result<CommandResult> {
        let registry = RuleRegistry::builtin();

        if self.args.json {
            let rows: Vec<RuleRow> = registry
                .rules()
                .iter()
                .map(|rule| RuleRow {
                    key: rule.key,
                    required: rule.required,
                    format: rule.format.as_ref().map(|f| f.description()),
                    purpose: rule.purpose,
                })
                .collect();
            let json = serde_json::to_string_pretty(&rows)
                .map_err(|err| PreflightError::Other(err.into()))?;
            println!("{json}");
            return Ok(CommandResult::success());
        }

        println!("{}", theme.format_header("Required"));
        for rule in registry.required_keys() {
            print_rule_line(theme, rule);
        }
        println!();
        println!("{}", theme.format_header("Optional"));
        for rule in registry.optional_keys() {
            print_rule_line(theme, rule);
        }

        Ok(CommandResult::success())
    }
}

fn print_rule_line(theme: &PreflightTheme, rule: &crate::rules::Rule) {
    let format = rule
        .format
        .as_ref()
        .map(|f| format!(" ({})", f.description()))
        .unwrap_or_default();
    println!(
        "  {} {}{}",
        theme.highlight.apply_to(rule.key),
        theme.dim.apply_to(rule.purpose),
        theme.dim.apply_to(format)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_rows_cover_every_rule() {
        let registry = RuleRegistry::builtin();
        let rows: Vec<RuleRow> = registry
            .rules()
            .iter()
            .map(|rule| RuleRow {
                key: rule.key,
                required: rule.required,
                format: rule.format.as_ref().map(|f| f.description()),
                purpose: rule.purpose,
            })
            .collect();

        let json = serde_json::to_string(&rows).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value.as_array().unwrap().len(),
            registry.rules().len()
        );
        assert_eq!(value[0]["key"], "OAUTH_CLIENT_ID");
        assert_eq!(value[0]["required"], true);
    }
}
