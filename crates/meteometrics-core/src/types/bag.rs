//! MetricBag: one entity's observed metrics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The metrics one entity exposes — metric name to raw numeric value.
///
/// Keys are not guaranteed identical across entities; a bag may be partial.
/// Owned by the caller (the retrieval layer) and borrowed read-only by the
/// engine for the duration of one comparison call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricBag(FxHashMap<String, f64>);

impl MetricBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a metric reading, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for MetricBag {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<FxHashMap<String, f64>> for MetricBag {
    fn from(map: FxHashMap<String, f64>) -> Self {
        Self(map)
    }
}
