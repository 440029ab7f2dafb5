//! Pairwise comparison report: a plain-text per-metric breakdown for
//! exactly two entities, rendered from a finished comparison.

use std::fmt::Write;

use meteometrics_core::types::{ComparisonResult, MetricBag};

/// Render the report for a two-entity comparison.
///
/// One block per common metric (raw values, signed difference, which entity
/// is higher), then the excluded-metric diagnostics and the overall winner.
pub fn pairwise_report(
    id_a: &str,
    bag_a: &MetricBag,
    id_b: &str,
    bag_b: &MetricBag,
    result: &ComparisonResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Comparison: {id_a} vs {id_b}");
    let _ = writeln!(out, "{}", "=".repeat(40));

    if result.is_empty() {
        let _ = writeln!(out, "\nNo common metrics to compare.");
    }

    for (name, label) in result.schema.iter().zip(&result.labels) {
        let (Some(a), Some(b)) = (bag_a.get(name), bag_b.get(name)) else {
            continue;
        };
        let _ = writeln!(out, "\n{label}:");
        let _ = writeln!(out, "{id_a}: {a:.1}");
        let _ = writeln!(out, "{id_b}: {b:.1}");
        let diff = a - b;
        if diff.abs() < f64::EPSILON {
            let _ = writeln!(out, "Difference: none");
        } else {
            let leader = if diff > 0.0 { id_a } else { id_b };
            let _ = writeln!(out, "Difference: {:.1} (higher in {leader})", diff.abs());
        }
    }

    if !result.diagnostics.is_empty() {
        let _ = writeln!(out, "\nNotes:");
        for note in &result.diagnostics {
            let _ = writeln!(out, "- {note}");
        }
    }

    let _ = writeln!(out, "\nOverall winner: {}", result.overall_winner);
    out
}
