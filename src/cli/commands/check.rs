//! The check command.
//!
//! Orchestrates one full validation pass: load the configuration source,
//! audit it against the rule registry, run every service probe to the
//! join barrier, audit feature flags, then render the aggregated report.
//! The full report is always printed (the run never aborts on the first
//! finding) and the exit code is decided only at the very end.

use std::path::PathBuf;
use std::time::Duration;

use super::dispatcher::{Command, CommandResult};
use crate::audit::{EnvironmentAuditor, FeatureFlagAuditor};
use crate::cli::args::CheckArgs;
use crate::config::ConfigSource;
use crate::error::{PreflightError, Result};
use crate::probes::backend::{SupabaseProbe, SupabaseRestProbe};
use crate::probes::database::DatabaseProbe;
use crate::probes::graph::GraphProbe;
use crate::probes::llm::{AnthropicProbe, OpenAiProbe};
use crate::probes::mail::MailProbe;
use crate::probes::oauth::OAuthProbe;
use crate::probes::{ProbeClient, ProbeRunner};
use crate::report::{HumanFormatter, JsonFormatter, ReportFormatter, RunReport};
use crate::rules::RuleRegistry;
use crate::sanitize::SecretMasker;
use crate::ui::PreflightTheme;

/// The check command implementation.
pub struct CheckCommand {
    env_file: Option<PathBuf>,
    args: CheckArgs,
    quiet: bool,
    plain: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(env_file: Option<PathBuf>, args: CheckArgs, quiet: bool, plain: bool) -> Self {
        Self {
            env_file,
            args,
            quiet,
            plain,
        }
    }

    fn probe_client(&self) -> ProbeClient {
        match self.args.timeout {
            Some(seconds) => ProbeClient::with_timeout(Duration::from_secs(seconds)),
            None => ProbeClient::new(),
        }
    }

    /// Run every registered probe and collect results in display order.
    fn run_probes(&self, source: &ConfigSource) -> Vec<crate::report::ValidationResult> {
        let client = self.probe_client();
        let mut runner = ProbeRunner::new();

        runner.register(Box::new(DatabaseProbe::from_source(source)));
        let supabase = runner.register(Box::new(SupabaseProbe::from_source(
            source,
            client.clone(),
        )));
        runner.register_dependent(
            supabase,
            Box::new(SupabaseRestProbe::from_source(source, client.clone())),
        );
        runner.register(Box::new(OpenAiProbe::from_source(source, client.clone())));
        runner.register(Box::new(AnthropicProbe::from_source(source, client.clone())));
        runner.register(Box::new(GraphProbe::from_source(source)));
        runner.register(Box::new(OAuthProbe::from_source(source, client)));
        runner.register(Box::new(MailProbe::from_source(source)));

        runner.run()
    }

    /// Seed the masker with every configured secret value.
    fn build_masker(registry: &RuleRegistry, source: &ConfigSource) -> SecretMasker {
        let mut masker = SecretMasker::new();
        masker.add_secrets(
            registry
                .secret_keys()
                .filter_map(|rule| source.get(rule.key))
                .map(String::from),
        );
        masker
    }
}

impl Command for CheckCommand {
    fn execute(&self, theme: &PreflightTheme) -> Result<CommandResult> {
        let source = ConfigSource::load(self.env_file.as_deref())?;
        let registry = RuleRegistry::builtin();

        tracing::info!("starting readiness check");

        let mut report = RunReport::new();
        report.extend(EnvironmentAuditor::new(&registry).audit(&source));
        report.extend(self.run_probes(&source));
        report.push(FeatureFlagAuditor::audit(&source));

        let report = report.masked(&Self::build_masker(&registry, &source));

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if self.args.json {
            JsonFormatter.format(&report, &mut handle)
        } else {
            let formatter = HumanFormatter::new(theme.clone(), self.plain, self.quiet);
            formatter.format(&report, &mut handle)
        }
        .map_err(PreflightError::ReportWriteError)?;

        let summary = report.summary();
        tracing::info!(
            success = summary.success,
            warning = summary.warning,
            error = summary.error,
            "readiness check finished"
        );

        if report.is_ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
