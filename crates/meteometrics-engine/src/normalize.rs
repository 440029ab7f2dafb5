//! Normalizer: raw metric values onto the bounded 0..10 comparison scale.
//!
//! `10 * clamp((raw - min) / (max - min), 0, 1)`. Clamping is deliberate:
//! an extreme reading (a heatwave above the reference max) pins to the
//! scale boundary instead of distorting every other axis.

use meteometrics_core::errors::UnknownMetric;
use meteometrics_core::types::{MetricRange, SCALE_MAX};

use crate::registry::MetricRegistry;

/// Normalize a raw value against a reference range.
pub fn normalize(range: &MetricRange, raw: f64) -> f64 {
    let fraction = (raw - range.min) / range.span();
    SCALE_MAX * fraction.clamp(0.0, 1.0)
}

/// Normalize via a registry lookup. Unknown metrics signal instead of
/// guessing; the vector builder applies the configured fallback policy.
pub fn normalize_metric(
    registry: &MetricRegistry,
    name: &str,
    raw: f64,
) -> Result<f64, UnknownMetric> {
    Ok(normalize(registry.range_for(name)?, raw))
}

/// Fallback scaling for unknown metrics: min-max over the values observed
/// in the current comparison. A degenerate sample (all values equal) maps
/// everything to the scale midpoint.
pub fn normalize_observed(raw: f64, observed_min: f64, observed_max: f64) -> f64 {
    let span = observed_max - observed_min;
    if span <= 0.0 || !span.is_finite() {
        return SCALE_MAX / 2.0;
    }
    SCALE_MAX * ((raw - observed_min) / span).clamp(0.0, 1.0)
}
