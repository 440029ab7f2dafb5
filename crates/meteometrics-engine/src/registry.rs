//! MetricRegistry: reference ranges and directionality per metric.
//!
//! In standalone use, the curated table covers the common weather metrics.
//! Config `[metrics.<name>]` sections amend curated entries or introduce
//! metrics the table does not know.

use meteometrics_core::config::MeteoConfig;
use meteometrics_core::errors::{ConfigError, UnknownMetric};
use meteometrics_core::types::{Direction, MetricRange};
use rustc_hash::FxHashMap;

/// Process-wide lookup table: metric name → reference range.
/// Read-only after construction; pure lookups, no side effects.
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    ranges: FxHashMap<String, MetricRange>,
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::curated()
    }
}

impl MetricRegistry {
    /// The curated default table.
    ///
    /// Ranges are reference scales for normalization, not physical bounds;
    /// readings outside them clamp to the scale boundary. Directionality
    /// follows comfort: visibility up, pollutants and wind down, and
    /// temperature/humidity/pressure toward a comfort target.
    pub fn curated() -> Self {
        let entries = [
            ("temperature", -10.0, 40.0, Direction::Target, Some(21.0)),
            ("feels_like", -10.0, 40.0, Direction::Target, Some(21.0)),
            ("humidity", 0.0, 100.0, Direction::Target, Some(45.0)),
            ("wind_speed", 0.0, 30.0, Direction::Lower, None),
            ("pressure", 950.0, 1050.0, Direction::Target, Some(1013.0)),
            ("visibility", 0.0, 10.0, Direction::Higher, None),
            ("cloud_cover", 0.0, 100.0, Direction::Lower, None),
            ("air_quality", 0.0, 300.0, Direction::Lower, None),
            ("uv_index", 0.0, 11.0, Direction::Lower, None),
            ("dew_point", -10.0, 30.0, Direction::Target, Some(13.0)),
            ("precipitation", 0.0, 50.0, Direction::Lower, None),
        ];

        let mut ranges = FxHashMap::default();
        for (name, min, max, direction, target) in entries {
            // Curated constants satisfy the min < max and target-in-range
            // invariants; constructed directly to keep this infallible.
            ranges.insert(
                name.to_string(),
                MetricRange {
                    name: name.to_string(),
                    min,
                    max,
                    direction,
                    target,
                },
            );
        }
        Self { ranges }
    }

    /// Build a registry from the curated table plus config overrides.
    ///
    /// An override for a curated metric amends only the fields it sets; an
    /// override for a new metric must carry at least `min` and `max`.
    /// Every resulting entry is re-validated.
    pub fn from_config(config: &MeteoConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::curated();

        // Sorted for deterministic error reporting.
        let mut names: Vec<&String> = config.metrics.keys().collect();
        names.sort();

        for name in names {
            let ov = &config.metrics[name];
            let entry = match registry.ranges.get(name.as_str()) {
                Some(existing) => MetricRange::new(
                    name.clone(),
                    ov.min.unwrap_or(existing.min),
                    ov.max.unwrap_or(existing.max),
                    ov.direction.unwrap_or(existing.direction),
                    ov.target.or(existing.target),
                )?,
                None => {
                    let (Some(min), Some(max)) = (ov.min, ov.max) else {
                        return Err(ConfigError::ValidationFailed {
                            field: format!("metrics.{name}"),
                            message: "new metrics require both min and max".to_string(),
                        });
                    };
                    MetricRange::new(
                        name.clone(),
                        min,
                        max,
                        ov.direction.unwrap_or(Direction::Higher),
                        ov.target,
                    )?
                }
            };
            registry.ranges.insert(name.clone(), entry);
        }

        Ok(registry)
    }

    /// Look up the reference range for a metric.
    ///
    /// Unknown names signal `UnknownMetric` instead of guessing a range;
    /// the normalizer decides the fallback.
    pub fn range_for(&self, name: &str) -> Result<&MetricRange, UnknownMetric> {
        self.ranges.get(name).ok_or_else(|| UnknownMetric {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ranges.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
