//! Hosted backend probes.
//!
//! Two checks against the Supabase project: the auth health endpoint as
//! the primary reachability/credential probe, and the REST surface as a
//! dependent capability check. The REST probe only makes sense once the
//! primary has succeeded; the runner skips it otherwise, so a dead base
//! URL produces one connectivity error instead of two.

use super::client::ProbeClient;
use super::outcome::{missing_parameters, send_classified};
use super::Probe;
use crate::config::ConfigSource;
use crate::report::ValidationResult;

/// Service name shared by the primary and the REST sub-probe, so both
/// render under one group.
pub const SERVICE: &str = "Supabase";

fn read_params(source: &ConfigSource) -> Option<(String, String)> {
    let url = source.get("SUPABASE_URL")?.trim_end_matches('/').to_string();
    let key = source.get("SUPABASE_SERVICE_KEY")?.to_string();
    Some((url, key))
}

/// Primary probe: auth service health with the service key.
pub struct SupabaseProbe {
    params: Option<(String, String)>,
    client: ProbeClient,
}

impl SupabaseProbe {
    /// Build the probe from the configuration source.
    pub fn from_source(source: &ConfigSource, client: ProbeClient) -> Self {
        Self {
            params: read_params(source),
            client,
        }
    }

    /// Build against an explicit base URL and key. Used by tests.
    pub fn with_params(url: impl Into<String>, key: impl Into<String>, client: ProbeClient) -> Self {
        Self {
            params: Some((url.into().trim_end_matches('/').to_string(), key.into())),
            client,
        }
    }
}

impl Probe for SupabaseProbe {
    fn service(&self) -> &'static str {
        SERVICE
    }

    fn run(&self) -> ValidationResult {
        let Some((url, key)) = &self.params else {
            return missing_parameters(SERVICE, &["SUPABASE_URL", "SUPABASE_SERVICE_KEY"]);
        };
        let request = self
            .client
            .get(&format!("{url}/auth/v1/health"))
            .header("apikey", key)
            .bearer_auth(key);
        send_classified(SERVICE, request)
    }
}

/// Dependent sub-probe: REST API surface.
pub struct SupabaseRestProbe {
    params: Option<(String, String)>,
    client: ProbeClient,
}

impl SupabaseRestProbe {
    /// Build the probe from the configuration source.
    pub fn from_source(source: &ConfigSource, client: ProbeClient) -> Self {
        Self {
            params: read_params(source),
            client,
        }
    }

    /// Build against an explicit base URL and key. Used by tests.
    pub fn with_params(url: impl Into<String>, key: impl Into<String>, client: ProbeClient) -> Self {
        Self {
            params: Some((url.into().trim_end_matches('/').to_string(), key.into())),
            client,
        }
    }
}

impl Probe for SupabaseRestProbe {
    fn service(&self) -> &'static str {
        SERVICE
    }

    fn run(&self) -> ValidationResult {
        let Some((url, key)) = &self.params else {
            return missing_parameters(SERVICE, &["SUPABASE_URL", "SUPABASE_SERVICE_KEY"]);
        };
        let request = self
            .client
            .get(&format!("{url}/rest/v1/"))
            .header("apikey", key);
        send_classified(SERVICE, request)
    }
}
