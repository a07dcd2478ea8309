//! Configuration audits.
//!
//! - [`environment`] - Presence and format checks against the rule registry
//! - [`features`] - Optional capability flag reporting

pub mod environment;
pub mod features;

pub use environment::EnvironmentAuditor;
pub use features::FeatureFlagAuditor;
