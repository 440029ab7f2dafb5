//! MetricRange: a registry entry with reference range and directionality.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which raw values count as "better" for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher raw values win (e.g. visibility).
    Higher,
    /// Lower raw values win (e.g. air_quality index).
    Lower,
    /// Values nearer to a comfort target win (e.g. humidity around 45%).
    Target,
}

/// Reference range for a metric: the scale normalization maps onto,
/// plus the directionality policy used by the winner scorer.
///
/// Invariant: `min < max`, enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub direction: Direction,
    /// Ideal raw value, required for `Direction::Target` metrics.
    pub target: Option<f64>,
}

impl MetricRange {
    /// Create a range, validating `min < max` and that target metrics carry
    /// a finite target inside the range.
    pub fn new(
        name: impl Into<String>,
        min: f64,
        max: f64,
        direction: Direction,
        target: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::ValidationFailed {
                field: format!("metrics.{name}"),
                message: format!("range must satisfy min < max, got {min}..{max}"),
            });
        }
        match (direction, target) {
            (Direction::Target, None) => {
                return Err(ConfigError::ValidationFailed {
                    field: format!("metrics.{name}.target"),
                    message: "target direction requires a target value".to_string(),
                });
            }
            (_, Some(t)) if !t.is_finite() || t < min || t > max => {
                return Err(ConfigError::ValidationFailed {
                    field: format!("metrics.{name}.target"),
                    message: format!("target {t} must lie within {min}..{max}"),
                });
            }
            _ => {}
        }
        Ok(Self {
            name,
            min,
            max,
            direction,
            target,
        })
    }

    /// Width of the reference range. Positive by the `min < max` invariant.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        let r = MetricRange::new("humidity", 0.0, 100.0, Direction::Target, Some(45.0)).unwrap();
        assert_eq!(r.span(), 100.0);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = MetricRange::new("temperature", 40.0, -10.0, Direction::Higher, None);
        assert!(matches!(err, Err(ConfigError::ValidationFailed { .. })));
    }

    #[test]
    fn test_degenerate_range_rejected() {
        assert!(MetricRange::new("pressure", 1000.0, 1000.0, Direction::Higher, None).is_err());
    }

    #[test]
    fn test_target_required_for_target_direction() {
        assert!(MetricRange::new("humidity", 0.0, 100.0, Direction::Target, None).is_err());
    }

    #[test]
    fn test_target_outside_range_rejected() {
        assert!(MetricRange::new("humidity", 0.0, 100.0, Direction::Target, Some(120.0)).is_err());
    }
}
