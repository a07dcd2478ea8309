//! Graph database probe.
//!
//! This is a configuration-only degraded probe: the stack carries no bolt
//! driver, so the check validates the URI scheme and credential presence
//! and reports a Warning that live connectivity was not verified. A build
//! that gains a graph driver should upgrade this to a real connect; the
//! Warning keeps the limitation visible in every report until then.

use regex::Regex;

use super::outcome::missing_parameters;
use super::Probe;
use crate::config::ConfigSource;
use crate::report::ValidationResult;

/// Service name for graph database results.
pub const SERVICE: &str = "Neo4j";

/// Configuration-shape check for the graph database.
pub struct GraphProbe {
    uri: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl GraphProbe {
    /// Build the probe from the configuration source.
    pub fn from_source(source: &ConfigSource) -> Self {
        Self {
            uri: source.get("NEO4J_URI").map(String::from),
            username: source.get("NEO4J_USERNAME").map(String::from),
            password: source.get("NEO4J_PASSWORD").map(String::from),
        }
    }
}

impl Probe for GraphProbe {
    fn service(&self) -> &'static str {
        SERVICE
    }

    fn run(&self) -> ValidationResult {
        let mut missing = Vec::new();
        if self.uri.is_none() {
            missing.push("NEO4J_URI");
        }
        if self.username.is_none() {
            missing.push("NEO4J_USERNAME");
        }
        if self.password.is_none() {
            missing.push("NEO4J_PASSWORD");
        }
        if !missing.is_empty() {
            return missing_parameters(SERVICE, &missing);
        }

        let scheme = Regex::new(r"^(bolt|neo4j)(\+s(sc)?)?://").expect("invalid scheme pattern");
        let uri = self.uri.as_deref().unwrap_or_default();
        if !scheme.is_match(uri) {
            return ValidationResult::error(SERVICE, "unrecognized URI scheme")
                .with_details("Expected a bolt:// or neo4j:// URI");
        }

        ValidationResult::warning(SERVICE, "configuration present, connectivity not verified")
            .with_details("No graph driver in this build; checked URI scheme and credentials only")
    }
}
