//! Top-level meteometrics configuration with layered resolution.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ComparisonConfig, FallbackPolicy, MetricOverride};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`METEO_*`)
/// 3. Project config (`meteometrics.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MeteoConfig {
    pub comparison: ComparisonConfig,
    /// Per-metric registry overrides, keyed by metric name.
    pub metrics: HashMap<String, MetricOverride>,
}

/// Programmatic override arguments that can be applied on top of a config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub unknown_metric_fallback: Option<FallbackPolicy>,
    pub tie_epsilon: Option<f64>,
}

impl MeteoConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Programmatic overrides
    /// 2. Environment variables (`METEO_*`)
    /// 3. Project config (`meteometrics.toml` in `root`)
    /// 4. Compiled defaults
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_path = root.join("meteometrics.toml");
        if project_path.exists() {
            let contents =
                std::fs::read_to_string(&project_path).map_err(|e| ConfigError::ReadError {
                    path: project_path.display().to_string(),
                    message: e.to_string(),
                })?;
            config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: project_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): programmatic overrides
        if let Some(ov) = overrides {
            Self::apply_overrides(&mut config, ov);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn apply_env_overrides(config: &mut MeteoConfig) {
        if let Ok(val) = std::env::var("METEO_UNKNOWN_METRIC_FALLBACK") {
            match val.as_str() {
                "skip" => {
                    config.comparison.unknown_metric_fallback = Some(FallbackPolicy::Skip);
                }
                "observed-range" => {
                    config.comparison.unknown_metric_fallback = Some(FallbackPolicy::ObservedRange);
                }
                other => {
                    tracing::warn!(value = other, "ignoring invalid METEO_UNKNOWN_METRIC_FALLBACK");
                }
            }
        }
        if let Ok(val) = std::env::var("METEO_TIE_EPSILON") {
            match val.parse::<f64>() {
                Ok(eps) => config.comparison.tie_epsilon = Some(eps),
                Err(_) => {
                    tracing::warn!(value = %val, "ignoring invalid METEO_TIE_EPSILON");
                }
            }
        }
    }

    fn apply_overrides(config: &mut MeteoConfig, overrides: &ConfigOverrides) {
        if let Some(policy) = overrides.unknown_metric_fallback {
            config.comparison.unknown_metric_fallback = Some(policy);
        }
        if let Some(eps) = overrides.tie_epsilon {
            config.comparison.tie_epsilon = Some(eps);
        }
    }

    /// Validate the final merged configuration.
    ///
    /// Metric overrides are only shape-checked here; range invariants are
    /// re-validated when the registry materializes them, because an override
    /// may amend a curated entry it cannot see from this crate.
    pub fn validate(config: &MeteoConfig) -> Result<(), ConfigError> {
        if let Some(eps) = config.comparison.tie_epsilon {
            if !eps.is_finite() || eps <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "comparison.tie_epsilon".to_string(),
                    message: "must be a finite positive number".to_string(),
                });
            }
        }
        for (name, ov) in &config.metrics {
            if let (Some(min), Some(max)) = (ov.min, ov.max) {
                if !min.is_finite() || !max.is_finite() || min >= max {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("metrics.{name}"),
                        message: format!("range must satisfy min < max, got {min}..{max}"),
                    });
                }
            }
        }
        Ok(())
    }
}
