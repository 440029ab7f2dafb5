//! Comparison behavior configuration.

use serde::{Deserialize, Serialize};

/// What the normalizer does with a metric the registry has no entry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Drop the metric from the schema with a diagnostic. The default:
    /// preserves the dimensional invariant without inventing ranges.
    #[default]
    Skip,
    /// Min-max scale over the values observed in the current comparison.
    ObservedRange,
}

/// Configuration for the comparison subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Unknown-metric fallback policy. Default: skip.
    pub unknown_metric_fallback: Option<FallbackPolicy>,
    /// Tolerance for normalized-value ties in winner scoring. Default: 1e-9.
    pub tie_epsilon: Option<f64>,
}

impl ComparisonConfig {
    /// Returns the effective fallback policy, defaulting to skip.
    pub fn effective_fallback(&self) -> FallbackPolicy {
        self.unknown_metric_fallback.unwrap_or_default()
    }

    /// Returns the effective tie epsilon, defaulting to 1e-9.
    pub fn effective_tie_epsilon(&self) -> f64 {
        self.tie_epsilon.unwrap_or(1e-9)
    }
}
