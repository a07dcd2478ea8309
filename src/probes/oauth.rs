//! OAuth provider probe.
//!
//! Fetches the issuer's OIDC discovery document. The document is public,
//! so this confirms the issuer URL is live and serving metadata; client
//! credentials themselves are validated by the environment audit and
//! exercised on first real login.

use super::client::ProbeClient;
use super::outcome::{missing_parameters, send_classified};
use super::Probe;
use crate::config::ConfigSource;
use crate::report::ValidationResult;

/// Service name for OAuth results.
pub const SERVICE: &str = "OAuth";

/// OIDC discovery probe against the configured issuer.
pub struct OAuthProbe {
    issuer: Option<String>,
    client: ProbeClient,
}

impl OAuthProbe {
    /// Build the probe from the configuration source.
    pub fn from_source(source: &ConfigSource, client: ProbeClient) -> Self {
        Self {
            issuer: source
                .get("OAUTH_ISSUER_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            client,
        }
    }

    /// Build against an explicit issuer URL. Used by tests.
    pub fn with_issuer(issuer: impl Into<String>, client: ProbeClient) -> Self {
        Self {
            issuer: Some(issuer.into().trim_end_matches('/').to_string()),
            client,
        }
    }
}

impl Probe for OAuthProbe {
    fn service(&self) -> &'static str {
        SERVICE
    }

    fn run(&self) -> ValidationResult {
        let Some(issuer) = &self.issuer else {
            return missing_parameters(SERVICE, &["OAUTH_ISSUER_URL"]);
        };
        let request = self
            .client
            .get(&format!("{issuer}/.well-known/openid-configuration"));
        send_classified(SERVICE, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;
    use std::collections::HashMap;

    #[test]
    fn missing_issuer_errors_without_network_call() {
        let probe = OAuthProbe::from_source(
            &ConfigSource::from_map(HashMap::new()),
            ProbeClient::new(),
        );
        let result = probe.run();

        assert_eq!(result.status, Status::Error);
        assert!(result
            .details
            .as_deref()
            .unwrap()
            .contains("OAUTH_ISSUER_URL"));
    }

    #[test]
    fn issuer_trailing_slash_is_normalized() {
        let probe = OAuthProbe::with_issuer("https://auth.example.com/", ProbeClient::new());
        assert_eq!(probe.issuer.as_deref(), Some("https://auth.example.com"));
    }
}
