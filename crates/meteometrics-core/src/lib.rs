//! # meteometrics-core
//!
//! Foundation crate for the meteometrics comparison engine.
//! Defines the shared types, errors, configuration system, and tracing
//! setup. The engine crate depends on this and nothing here depends back.

pub mod config;
pub mod errors;
pub mod trace;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ConfigOverrides, FallbackPolicy, MeteoConfig};
pub use errors::{ComparisonError, ConfigError, UnknownMetric};
pub use types::{
    ComparisonResult, Direction, MetricBag, MetricRange, NormalizedVector, Winner,
};
