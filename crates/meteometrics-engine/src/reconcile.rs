//! SchemaReconciler: the common metric set across N entities.
//!
//! Strict key intersection, alphabetically sorted so axis ordering is
//! stable across calls and testable. An empty intersection is a valid
//! outcome, not an error; the facade turns it into a diagnostic result.

use meteometrics_core::types::MetricBag;

/// A metric present in some but not all bags, with the entities it is
/// missing from. Feeds the diagnostics so callers can explain omissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialMetric {
    pub name: String,
    pub missing_from: Vec<String>,
}

/// Outcome of reconciling N metric bags.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// Metric names present in every bag, alphabetical. May be empty.
    pub schema: Vec<String>,
    /// The almost-common set: metrics excluded for non-universal
    /// availability, alphabetical.
    pub partial: Vec<PartialMetric>,
}

/// Compute the ordered intersection of metric names over all bags.
///
/// `entities` is the caller's (id, bag) list; the facade passes it sorted
/// by id, which also orders each `missing_from` list deterministically.
pub fn reconcile(entities: &[(&str, &MetricBag)]) -> Reconciliation {
    let Some((_, first)) = entities.first() else {
        return Reconciliation::default();
    };

    let mut schema: Vec<String> = first
        .keys()
        .filter(|name| entities[1..].iter().all(|(_, bag)| bag.contains(name)))
        .map(str::to_string)
        .collect();
    schema.sort();

    // Union minus intersection, with the entities each metric is missing from.
    let mut union: Vec<&str> = entities
        .iter()
        .flat_map(|(_, bag)| bag.keys())
        .collect();
    union.sort_unstable();
    union.dedup();

    let partial = union
        .into_iter()
        .filter(|name| !schema.iter().any(|s| s == name))
        .map(|name| PartialMetric {
            name: name.to_string(),
            missing_from: entities
                .iter()
                .filter(|(_, bag)| !bag.contains(name))
                .map(|(id, _)| id.to_string())
                .collect(),
        })
        .collect();

    Reconciliation { schema, partial }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(names: &[&str]) -> MetricBag {
        names.iter().map(|n| (*n, 1.0)).collect()
    }

    #[test]
    fn test_intersection_is_sorted() {
        let a = bag(&["temperature", "humidity", "wind_speed"]);
        let b = bag(&["temperature", "humidity", "pressure"]);
        let c = bag(&["temperature", "humidity"]);
        let rec = reconcile(&[("A", &a), ("B", &b), ("C", &c)]);
        assert_eq!(rec.schema, vec!["humidity", "temperature"]);
    }

    #[test]
    fn test_input_order_does_not_change_schema() {
        let a = bag(&["temperature", "humidity", "wind_speed"]);
        let b = bag(&["temperature", "humidity", "pressure"]);
        let forward = reconcile(&[("A", &a), ("B", &b)]);
        let reversed = reconcile(&[("B", &b), ("A", &a)]);
        assert_eq!(forward.schema, reversed.schema);
    }

    #[test]
    fn test_empty_intersection() {
        let a = bag(&["temperature"]);
        let b = bag(&["pressure"]);
        let rec = reconcile(&[("A", &a), ("B", &b)]);
        assert!(rec.schema.is_empty());
        assert_eq!(rec.partial.len(), 2);
    }

    #[test]
    fn test_partial_records_missing_entities() {
        let a = bag(&["temperature", "humidity"]);
        let b = bag(&["temperature", "humidity", "pressure"]);
        let rec = reconcile(&[("A", &a), ("B", &b)]);
        assert_eq!(
            rec.partial,
            vec![PartialMetric {
                name: "pressure".to_string(),
                missing_from: vec!["A".to_string()],
            }]
        );
    }

    #[test]
    fn test_no_duplicates_in_schema() {
        let a = bag(&["humidity", "temperature"]);
        let b = bag(&["humidity", "temperature"]);
        let rec = reconcile(&[("A", &a), ("B", &b)]);
        let mut deduped = rec.schema.clone();
        deduped.dedup();
        assert_eq!(rec.schema, deduped);
        assert!(rec.partial.is_empty());
    }
}
