//! ComparisonResult: the engine's output, packaged for a presentation layer.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Upper bound of the normalization scale: raw values map onto [0, SCALE_MAX].
pub const SCALE_MAX: f64 = 10.0;

/// One entity's normalized values, axis-aligned to the reconciled schema.
/// Metric counts are small and bounded, so the vector stays inline.
pub type NormalizedVector = SmallVec<[f64; 12]>;

/// Outcome of a category or of the overall comparison.
///
/// Serializes as the entity id, or the string `"tie"` — the exact shape the
/// downstream presentation contract consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    Entity(String),
    Tie,
}

impl Winner {
    pub fn is_tie(&self) -> bool {
        matches!(self, Winner::Tie)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Entity(id) => f.write_str(id),
            Winner::Tie => f.write_str("tie"),
        }
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Winner::Entity(id) => serializer.serialize_str(id),
            Winner::Tie => serializer.serialize_str("tie"),
        }
    }
}

impl<'de> Deserialize<'de> for Winner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WinnerVisitor;

        impl Visitor<'_> for WinnerVisitor {
            type Value = Winner;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an entity id or \"tie\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Winner, E> {
                if v == "tie" {
                    Ok(Winner::Tie)
                } else {
                    Ok(Winner::Entity(v.to_string()))
                }
            }
        }

        deserializer.deserialize_str(WinnerVisitor)
    }
}

/// Everything one comparison call produces.
///
/// The core dimensional-safety invariant: every vector in `vectors` has a
/// length equal to `schema.len()`, and index `i` of every vector refers to
/// `schema[i]`. Created fresh per call, discarded after the caller renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Metric names common to every compared entity, alphabetical.
    pub schema: Vec<String>,
    /// Chart-ready display labels, axis-aligned to `schema`
    /// (`wind_speed` becomes `Wind speed`).
    pub labels: Vec<String>,
    /// One normalized vector per entity, all equal length.
    pub vectors: FxHashMap<String, NormalizedVector>,
    /// Best entity per metric, or `tie`.
    pub category_winners: FxHashMap<String, Winner>,
    /// Entity with the most category points, or `tie`.
    pub overall_winner: Winner,
    /// Human-readable notes on metrics excluded from the comparison.
    pub diagnostics: Vec<String>,
}

impl ComparisonResult {
    /// True when the reconciled schema came out empty — nothing to plot,
    /// and `diagnostics` explains why.
    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
    }

    /// Radar/bar charts need at least two axes; singleton schemas are valid
    /// results but not chartable.
    pub fn is_chartable(&self) -> bool {
        self.schema.len() >= 2
    }
}
