//! ComparisonVectorBuilder: equal-length, equally-ordered vectors per entity.
//!
//! Orchestrates the reconciler and normalizer. The postcondition this whole
//! engine exists for: every returned vector has the same length as the
//! schema, by construction.

use meteometrics_core::config::FallbackPolicy;
use meteometrics_core::errors::ComparisonError;
use meteometrics_core::types::{Direction, MetricBag, MetricRange, NormalizedVector};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::normalize;
use crate::reconcile;
use crate::registry::MetricRegistry;

/// Per-metric scoring policy, resolved while building so the scorer never
/// has to consult the registry (observed-range metrics have no entry).
#[derive(Debug, Clone)]
pub struct MetricPolicy {
    pub name: String,
    pub direction: Direction,
    /// The ideal value on the normalized scale, for target metrics.
    pub target_norm: Option<f64>,
}

/// The builder's output: schema, labels, vectors, per-metric policies,
/// and diagnostics. `policies.len() == schema.len() == labels.len()`, and
/// every vector has `schema.len()` elements.
#[derive(Debug, Clone, Default)]
pub struct VectorSet {
    pub schema: Vec<String>,
    pub labels: Vec<String>,
    pub vectors: FxHashMap<String, NormalizedVector>,
    pub policies: Vec<MetricPolicy>,
    pub diagnostics: Vec<String>,
}

/// How one schema metric's raw values map onto the scale.
#[derive(Debug, Clone)]
enum NormSource {
    Curated(MetricRange),
    Observed { lo: f64, hi: f64 },
}

/// Build normalized vectors for `entities` (sorted by id by the facade).
pub fn build(
    entities: &[(&str, &MetricBag)],
    registry: &MetricRegistry,
    fallback: FallbackPolicy,
) -> Result<VectorSet, ComparisonError> {
    validate_finite(entities)?;

    let rec = reconcile::reconcile(entities);
    let mut diagnostics: Vec<String> = rec
        .partial
        .iter()
        .map(|p| {
            format!(
                "excluded: {} (missing for {})",
                p.name,
                p.missing_from.join(", ")
            )
        })
        .collect();

    // Resolve each schema metric to a scoring policy and a normalization
    // source; unknown metrics are skipped or fall back to observed-range
    // scaling per config. Keeping the sources axis-aligned with the schema
    // is what makes equal vector lengths hold by construction.
    let mut schema = Vec::with_capacity(rec.schema.len());
    let mut policies = Vec::with_capacity(rec.schema.len());
    let mut sources: Vec<NormSource> = Vec::with_capacity(rec.schema.len());

    for name in rec.schema {
        match registry.range_for(&name) {
            Ok(range) => {
                policies.push(MetricPolicy {
                    name: name.clone(),
                    direction: range.direction,
                    target_norm: range.target.map(|t| normalize::normalize(range, t)),
                });
                sources.push(NormSource::Curated(range.clone()));
                schema.push(name);
            }
            Err(_) => match fallback {
                FallbackPolicy::Skip => {
                    debug!(metric = %name, "skipping unknown metric");
                    diagnostics.push(format!("excluded: {name} (unknown metric)"));
                }
                FallbackPolicy::ObservedRange => {
                    let mut lo = f64::INFINITY;
                    let mut hi = f64::NEG_INFINITY;
                    for (_, bag) in entities {
                        // Present in every bag: the schema is the intersection.
                        let v = bag.get(&name).unwrap_or_default();
                        lo = lo.min(v);
                        hi = hi.max(v);
                    }
                    diagnostics.push(format!(
                        "normalized over observed range: {name} ({lo}..{hi})"
                    ));
                    // No curated direction exists for observed metrics.
                    policies.push(MetricPolicy {
                        name: name.clone(),
                        direction: Direction::Higher,
                        target_norm: None,
                    });
                    sources.push(NormSource::Observed { lo, hi });
                    schema.push(name);
                }
            },
        }
    }

    let mut vectors: FxHashMap<String, NormalizedVector> = FxHashMap::default();
    for (id, bag) in entities {
        let mut vector = NormalizedVector::with_capacity(schema.len());
        for (name, source) in schema.iter().zip(&sources) {
            let raw = bag.get(name).unwrap_or_default();
            vector.push(match source {
                NormSource::Curated(range) => normalize::normalize(range, raw),
                NormSource::Observed { lo, hi } => normalize::normalize_observed(raw, *lo, *hi),
            });
        }
        vectors.insert(id.to_string(), vector);
    }

    let labels = schema.iter().map(|s| display_label(s)).collect();

    Ok(VectorSet {
        schema,
        labels,
        vectors,
        policies,
        diagnostics,
    })
}

/// Reject NaN/infinite readings up front. Checked over every bag entry so
/// malformed input never passes silently, and in sorted order so the error
/// names the same offender on every run.
fn validate_finite(entities: &[(&str, &MetricBag)]) -> Result<(), ComparisonError> {
    for (id, bag) in entities {
        let mut names: Vec<&str> = bag.keys().collect();
        names.sort_unstable();
        for name in names {
            let value = bag.get(name).unwrap_or_default();
            if !value.is_finite() {
                return Err(ComparisonError::NonFiniteValue {
                    entity: id.to_string(),
                    metric: name.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Chart-ready display label: `wind_speed` → `Wind speed`.
pub fn display_label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
