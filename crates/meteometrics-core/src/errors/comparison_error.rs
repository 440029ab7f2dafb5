//! Comparison errors.

use super::config_error::ConfigError;

/// Hard failures of a comparison call.
///
/// Everything else the engine encounters (missing metrics, unknown metrics,
/// out-of-range values, an empty intersection) is absorbed into the result's
/// diagnostics instead of failing the call.
#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("At least 2 entities are required for a comparison, got {found}")]
    InsufficientEntities { found: usize },

    #[error("Non-finite value for metric '{metric}' of entity '{entity}'")]
    NonFiniteValue { entity: String, metric: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Internal signal from the registry for a metric it has no entry for.
///
/// Recovered locally by the normalizer's fallback policy; never propagated
/// out of a comparison call.
#[derive(Debug, thiserror::Error)]
#[error("Unknown metric: {name}")]
pub struct UnknownMetric {
    pub name: String,
}
