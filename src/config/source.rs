//! Configuration source.
//!
//! [`ConfigSource`] is the single key lookup surface consumed by the
//! auditors and probes: the process environment, optionally layered over a
//! parsed env file. The process environment always wins, matching how the
//! application itself resolves configuration.
//!
//! An empty-string value is treated as absent everywhere: `KEY=` in an env
//! file or `export KEY=` in a shell is a placeholder, not a value.

use std::collections::HashMap;
use std::path::Path;

use super::env_file::EnvFileParser;
use crate::error::Result;

/// Read-only key-value view of the current configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    vars: HashMap<String, String>,
}

impl ConfigSource {
    /// Build a source from the process environment alone.
    pub fn from_process_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a source from an explicit map. Used by tests to avoid
    /// mutating the process environment.
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Load the configuration source, layering the process environment
    /// over an optional env file (process wins on conflicts).
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let mut vars = match env_file {
            Some(path) => {
                tracing::debug!("layering env file {}", path.display());
                EnvFileParser::load(path)?
            }
            None => HashMap::new(),
        };
        vars.extend(std::env::vars());
        Ok(Self { vars })
    }

    /// Look up a key. Empty-string values are reported as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether a key is present with a non-empty value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
