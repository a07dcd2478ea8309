//! LLM provider key probes.
//!
//! Both providers expose a cheap authenticated listing endpoint
//! (`/v1/models`); a single GET confirms the key is accepted without
//! consuming tokens. Base URLs are overridable so tests can point the
//! probes at a local mock server.

use super::client::ProbeClient;
use super::outcome::{missing_parameters, send_classified};
use super::Probe;
use crate::config::ConfigSource;
use crate::report::ValidationResult;

/// Anthropic API version header value required by the models endpoint.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// OpenAI API key probe.
pub struct OpenAiProbe {
    api_key: Option<String>,
    base_url: String,
    client: ProbeClient,
}

impl OpenAiProbe {
    /// Build the probe from the configuration source.
    ///
    /// `OPENAI_BASE_URL` overrides the endpoint, matching the provider
    /// SDK convention for proxies and gateways.
    pub fn from_source(source: &ConfigSource, client: ProbeClient) -> Self {
        Self {
            api_key: source.get("OPENAI_API_KEY").map(String::from),
            base_url: source
                .get("OPENAI_BASE_URL")
                .unwrap_or("https://api.openai.com")
                .trim_end_matches('/')
                .to_string(),
            client,
        }
    }

    /// Override the base URL. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Probe for OpenAiProbe {
    fn service(&self) -> &'static str {
        "OpenAI"
    }

    fn run(&self) -> ValidationResult {
        let Some(key) = &self.api_key else {
            return missing_parameters(self.service(), &["OPENAI_API_KEY"]);
        };
        let request = self
            .client
            .get(&format!("{}/v1/models", self.base_url))
            .bearer_auth(key);
        send_classified(self.service(), request)
    }
}

/// Anthropic API key probe.
pub struct AnthropicProbe {
    api_key: Option<String>,
    base_url: String,
    client: ProbeClient,
}

impl AnthropicProbe {
    /// Build the probe from the configuration source.
    ///
    /// `ANTHROPIC_BASE_URL` overrides the endpoint, matching the provider
    /// SDK convention for proxies and gateways.
    pub fn from_source(source: &ConfigSource, client: ProbeClient) -> Self {
        Self {
            api_key: source.get("ANTHROPIC_API_KEY").map(String::from),
            base_url: source
                .get("ANTHROPIC_BASE_URL")
                .unwrap_or("https://api.anthropic.com")
                .trim_end_matches('/')
                .to_string(),
            client,
        }
    }

    /// Override the base URL. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Probe for AnthropicProbe {
    fn service(&self) -> &'static str {
        "Anthropic"
    }

    fn run(&self) -> ValidationResult {
        let Some(key) = &self.api_key else {
            return missing_parameters(self.service(), &["ANTHROPIC_API_KEY"]);
        };
        let request = self
            .client
            .get(&format!("{}/v1/models", self.base_url))
            .header("x-api-key", key)
            .header("anthropic-version", ANTHROPIC_VERSION);
        send_classified(self.service(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;
    use std::collections::HashMap;

    fn empty_source() -> ConfigSource {
        ConfigSource::from_map(HashMap::new())
    }

    #[test]
    fn openai_without_key_errors_without_network_call() {
        let probe = OpenAiProbe::from_source(&empty_source(), ProbeClient::new());
        let result = probe.run();

        assert_eq!(result.status, Status::Error);
        assert!(result.message.contains("not configured"));
        assert!(result.details.as_deref().unwrap().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn anthropic_without_key_errors_without_network_call() {
        let probe = AnthropicProbe::from_source(&empty_source(), ProbeClient::new());
        let result = probe.run();

        assert_eq!(result.status, Status::Error);
        assert!(result
            .details
            .as_deref()
            .unwrap()
            .contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn probes_report_their_service_names() {
        let openai = OpenAiProbe::from_source(&empty_source(), ProbeClient::new());
        let anthropic = AnthropicProbe::from_source(&empty_source(), ProbeClient::new());

        assert_eq!(openai.service(), "OpenAI");
        assert_eq!(anthropic.service(), "Anthropic");
    }
}
