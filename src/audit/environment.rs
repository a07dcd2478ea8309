//! Environment variable audit.
//!
//! Walks the rule registry against the configuration source and emits one
//! result per key. The audit never fails the process, since a missing or
//! malformed value is a reported outcome rather than an error, and it
//! collects every finding rather than stopping at the first, so a user can
//! fix an entire environment in one pass.

use crate::config::ConfigSource;
use crate::report::ValidationResult;
use crate::rules::{Rule, RuleRegistry};

/// Service name used for all environment audit results.
pub const SERVICE: &str = "Environment";

/// Audits configuration keys against the rule registry.
pub struct EnvironmentAuditor<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> EnvironmentAuditor<'a> {
    /// Create an auditor over the given registry.
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Evaluate every rule once, in declaration order.
    pub fn audit(&self, source: &ConfigSource) -> Vec<ValidationResult> {
        self.registry
            .rules()
            .iter()
            .map(|rule| evaluate_rule(rule, source))
            .collect()
    }
}

/// Evaluate a single rule against the source.
///
/// An empty-string value is treated as absent (the source already
/// normalizes this). Format checks run only when a value is present and a
/// pattern is registered.
fn evaluate_rule(rule: &Rule, source: &ConfigSource) -> ValidationResult {
    match source.get(rule.key) {
        None if rule.required => ValidationResult::error(
            SERVICE,
            format!("missing required variable {}", rule.key),
        )
        .with_details(format!("Set {} ({})", rule.key, rule.purpose)),
        None => ValidationResult::warning(
            SERVICE,
            format!("optional variable {} not set", rule.key),
        )
        .with_details(format!("{} stays disabled ({})", rule.key, rule.purpose)),
        Some(value) => match &rule.format {
            Some(format) if !format.matches(value) => ValidationResult::error(
                SERVICE,
                format!("invalid format for {}", rule.key),
            )
            .with_details(format!("Expected {}", format.description())),
            _ => ValidationResult::success(SERVICE, format!("{} set", rule.key)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;
    use std::collections::HashMap;

    fn source_of(pairs: &[(&str, &str)]) -> ConfigSource {
        ConfigSource::from_map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn audit(pairs: &[(&str, &str)]) -> Vec<ValidationResult> {
        let registry = RuleRegistry::builtin();
        EnvironmentAuditor::new(&registry).audit(&source_of(pairs))
    }

    /// A full, valid required set for tests that need a clean baseline.
    fn valid_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("OAUTH_CLIENT_ID", "client-123"),
            ("OAUTH_CLIENT_SECRET", "cs-abc"),
            ("OAUTH_ISSUER_URL", "https://auth.example.com"),
            ("SESSION_SECRET", "0123456789abcdef0123456789abcdef"),
            ("OPENAI_API_KEY", "sk-test-123"),
            ("ANTHROPIC_API_KEY", "sk-ant-test-123"),
            ("DATABASE_URL", "postgres://u:p@localhost:5432/app"),
            ("SUPABASE_URL", "https://proj.supabase.example"),
            ("SUPABASE_SERVICE_KEY", "service-key"),
            ("NEO4J_URI", "bolt://localhost:7687"),
            ("NEO4J_USERNAME", "neo4j"),
            ("NEO4J_PASSWORD", "graphpass"),
        ]
    }

    #[test]
    fn emits_exactly_one_result_per_rule() {
        let registry = RuleRegistry::builtin();
        let results = audit(&[]);
        assert_eq!(results.len(), registry.rules().len());
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let results = audit(&[]);
        let db = results
            .iter()
            .find(|r| r.message.contains("DATABASE_URL"))
            .unwrap();

        assert_eq!(db.status, Status::Error);
        assert!(db.message.contains("missing required variable"));
        assert!(db.details.as_deref().unwrap().contains("DATABASE_URL"));
    }

    #[test]
    fn missing_optional_key_is_a_warning() {
        let results = audit(&[]);
        let sentry = results
            .iter()
            .find(|r| r.message.contains("SENTRY_DSN"))
            .unwrap();

        assert_eq!(sentry.status, Status::Warning);
        assert!(sentry.message.contains("not set"));
    }

    #[test]
    fn all_valid_values_are_success() {
        let results = audit(&valid_pairs());
        let errors: Vec<_> = results
            .iter()
            .filter(|r| r.status == Status::Error)
            .collect();

        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn bad_format_is_an_error_even_when_present() {
        let mut pairs = valid_pairs();
        for pair in &mut pairs {
            if pair.0 == "DATABASE_URL" {
                pair.1 = "mysql://localhost/app";
            }
        }

        let results = audit(&pairs);
        let db = results
            .iter()
            .find(|r| r.message.contains("DATABASE_URL"))
            .unwrap();

        assert_eq!(db.status, Status::Error);
        assert!(db.message.contains("invalid format"));
        assert!(db.details.as_deref().unwrap().contains("postgres://"));
    }

    #[test]
    fn bad_format_on_optional_key_is_an_error() {
        let results = audit(&[("SMTP_PORT", "not-a-port")]);
        let port = results
            .iter()
            .find(|r| r.message.contains("SMTP_PORT"))
            .unwrap();

        assert_eq!(port.status, Status::Error);
    }

    #[test]
    fn empty_value_audits_like_absence() {
        let with_empty = audit(&[("SESSION_SECRET", "")]);
        let without = audit(&[]);

        let find = |results: &[ValidationResult]| {
            results
                .iter()
                .find(|r| r.message.contains("SESSION_SECRET"))
                .map(|r| (r.status, r.message.clone()))
                .unwrap()
        };

        assert_eq!(find(&with_empty), find(&without));
    }

    #[test]
    fn present_key_without_format_is_success() {
        let results = audit(&[("OAUTH_CLIENT_ID", "anything-goes")]);
        let id = results
            .iter()
            .find(|r| r.message.contains("OAUTH_CLIENT_ID"))
            .unwrap();

        assert_eq!(id.status, Status::Success);
    }

    #[test]
    fn results_carry_environment_service() {
        for result in audit(&[]) {
            assert_eq!(result.service, SERVICE);
        }
    }

    #[test]
    fn audit_is_deterministic() {
        let first = audit(&valid_pairs());
        let second = audit(&valid_pairs());

        let render = |results: &[ValidationResult]| {
            results
                .iter()
                .map(|r| format!("{:?}:{}", r.status, r.message))
                .collect::<Vec<_>>()
        };

        assert_eq!(render(&first), render(&second));
    }
}
