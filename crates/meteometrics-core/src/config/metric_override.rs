//! Per-metric registry overrides.

use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// Override (or introduce) one metric's registry entry from config.
///
/// All fields are optional when amending a curated metric; a metric the
/// curated table does not know needs at least `min` and `max`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetricOverride {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub direction: Option<Direction>,
    pub target: Option<f64>,
}
