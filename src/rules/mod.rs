//! Static configuration rule catalog.

pub mod registry;

pub use registry::{KeyFormat, Rule, RuleRegistry};
