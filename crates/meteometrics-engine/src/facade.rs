//! ComparisonFacade: the one entry point presentation layers call.
//!
//! Stateless between calls; each `compare()` is an independent pure
//! computation over its inputs, safe from any thread. The facade's
//! contract: it never propagates a dimension-mismatch fault downstream —
//! every result it returns has equal-length vectors, or an empty schema
//! plus diagnostics saying why.

use meteometrics_core::config::{FallbackPolicy, MeteoConfig};
use meteometrics_core::errors::{ComparisonError, ConfigError};
use meteometrics_core::types::{ComparisonResult, MetricBag, Winner};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::registry::MetricRegistry;
use crate::report;
use crate::scoring;
use crate::vectors;

/// A two-entity comparison with its rendered text report.
#[derive(Debug, Clone)]
pub struct PairComparison {
    pub result: ComparisonResult,
    pub report: String,
}

/// The comparison engine's public face.
pub struct ComparisonFacade {
    registry: MetricRegistry,
    fallback: FallbackPolicy,
    tie_epsilon: f64,
}

impl Default for ComparisonFacade {
    fn default() -> Self {
        Self::curated()
    }
}

impl ComparisonFacade {
    /// Facade over the curated registry with default policies.
    pub fn curated() -> Self {
        Self {
            registry: MetricRegistry::curated(),
            fallback: FallbackPolicy::default(),
            tie_epsilon: 1e-9,
        }
    }

    /// Facade configured from a loaded `MeteoConfig`.
    pub fn from_config(config: &MeteoConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: MetricRegistry::from_config(config)?,
            fallback: config.comparison.effective_fallback(),
            tie_epsilon: config.comparison.effective_tie_epsilon(),
        })
    }

    /// Facade over an explicit registry (for embedding and tests).
    pub fn with_registry(registry: MetricRegistry, fallback: FallbackPolicy, tie_epsilon: f64) -> Self {
        Self {
            registry,
            fallback,
            tie_epsilon,
        }
    }

    /// Compare N entities' metric bags.
    ///
    /// Requires at least 2 entities. An empty reconciled schema is a valid
    /// result (empty vectors, `"no common metrics"` diagnostic), not an
    /// error; check `ComparisonResult::is_empty` before rendering.
    pub fn compare(
        &self,
        entities: &FxHashMap<String, MetricBag>,
    ) -> Result<ComparisonResult, ComparisonError> {
        if entities.len() < 2 {
            return Err(ComparisonError::InsufficientEntities {
                found: entities.len(),
            });
        }

        let span = tracing::debug_span!("compare", entities = entities.len());
        let _enter = span.enter();

        // Sorted ids make schema ordering, diagnostics, and error reporting
        // independent of map iteration order.
        let mut ids: Vec<&str> = entities.keys().map(String::as_str).collect();
        ids.sort_unstable();
        let pairs: Vec<(&str, &MetricBag)> = ids.iter().map(|id| (*id, &entities[*id])).collect();

        let set = vectors::build(&pairs, &self.registry, self.fallback)?;
        debug!(
            schema_len = set.schema.len(),
            excluded = set.diagnostics.len(),
            "schema reconciled"
        );

        let mut diagnostics = set.diagnostics;
        let (category_winners, overall_winner) = if set.schema.is_empty() {
            warn!("no common metrics across entities");
            diagnostics.push("no common metrics".to_string());
            (FxHashMap::default(), Winner::Tie)
        } else {
            scoring::score(&ids, &set.vectors, &set.policies, self.tie_epsilon)
        };

        Ok(ComparisonResult {
            schema: set.schema,
            labels: set.labels,
            vectors: set.vectors,
            category_winners,
            overall_winner,
            diagnostics,
        })
    }

    /// Compare exactly two entities and render the text report.
    ///
    /// The original "manual fix" affordance is just a repeated `compare()`
    /// with the same inputs; no separate code path exists.
    pub fn compare_pair(
        &self,
        id_a: &str,
        bag_a: &MetricBag,
        id_b: &str,
        bag_b: &MetricBag,
    ) -> Result<PairComparison, ComparisonError> {
        let mut entities = FxHashMap::default();
        entities.insert(id_a.to_string(), bag_a.clone());
        entities.insert(id_b.to_string(), bag_b.clone());

        let result = self.compare(&entities)?;
        let report = report::pairwise_report(id_a, bag_a, id_b, bag_b, &result);
        Ok(PairComparison { result, report })
    }
}
