//! WinnerScorer: per-category points and the overall winner.
//!
//! One point per metric to the entity with the best normalized value under
//! that metric's directionality. Exact ties award no point. The overall
//! winner is the entity with the most points; equal points stay a tie;
//! no arbitrary tie-break is invented.

use meteometrics_core::types::{Direction, NormalizedVector, Winner};
use rustc_hash::FxHashMap;

use crate::vectors::MetricPolicy;

/// Score one comparison.
///
/// `entities` is the sorted id list; every id has a vector in `vectors`
/// of length `policies.len()`. Normalized-value comparisons within
/// `epsilon` of the best count as tied.
pub fn score(
    entities: &[&str],
    vectors: &FxHashMap<String, NormalizedVector>,
    policies: &[MetricPolicy],
    epsilon: f64,
) -> (FxHashMap<String, Winner>, Winner) {
    let mut points: FxHashMap<&str, u32> = entities.iter().map(|id| (*id, 0)).collect();
    let mut category_winners: FxHashMap<String, Winner> = FxHashMap::default();

    for (index, policy) in policies.iter().enumerate() {
        let winner = category_winner(entities, vectors, policy, index, epsilon);
        if let Winner::Entity(ref id) = winner {
            if let Some(tally) = points.get_mut(id.as_str()) {
                *tally += 1;
            }
        }
        category_winners.insert(policy.name.clone(), winner);
    }

    let overall = overall_winner(entities, &points);
    (category_winners, overall)
}

/// Best entity at one metric index, or a tie.
fn category_winner(
    entities: &[&str],
    vectors: &FxHashMap<String, NormalizedVector>,
    policy: &MetricPolicy,
    index: usize,
    epsilon: f64,
) -> Winner {
    let mut best_score = f64::NEG_INFINITY;
    let mut best_ids: Vec<&str> = Vec::new();

    for &id in entities {
        let Some(value) = vectors.get(id).and_then(|v| v.get(index)).copied() else {
            continue;
        };
        let score = directional_score(value, policy);

        if score > best_score + epsilon {
            best_score = score;
            best_ids.clear();
            best_ids.push(id);
        } else if (score - best_score).abs() <= epsilon {
            best_ids.push(id);
        }
    }

    match best_ids.as_slice() {
        [single] => Winner::Entity(single.to_string()),
        _ => Winner::Tie,
    }
}

/// Map a normalized value onto a "bigger wins" scale for its direction.
/// Target metrics score by closeness: smaller distance from the ideal wins.
fn directional_score(value: f64, policy: &MetricPolicy) -> f64 {
    match policy.direction {
        Direction::Higher => value,
        Direction::Lower => -value,
        Direction::Target => {
            let target = policy.target_norm.unwrap_or(0.0);
            -(value - target).abs()
        }
    }
}

fn overall_winner(entities: &[&str], points: &FxHashMap<&str, u32>) -> Winner {
    let best = entities
        .iter()
        .map(|id| points.get(id).copied().unwrap_or(0))
        .max()
        .unwrap_or(0);
    let leaders: Vec<&str> = entities
        .iter()
        .filter(|id| points.get(*id).copied().unwrap_or(0) == best)
        .copied()
        .collect();
    match leaders.as_slice() {
        [single] => Winner::Entity(single.to_string()),
        _ => Winner::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn policy(name: &str, direction: Direction, target_norm: Option<f64>) -> MetricPolicy {
        MetricPolicy {
            name: name.to_string(),
            direction,
            target_norm,
        }
    }

    fn vectors(entries: &[(&str, &[f64])]) -> FxHashMap<String, NormalizedVector> {
        entries
            .iter()
            .map(|(id, vals)| (id.to_string(), vals.iter().copied().collect()))
            .collect()
    }

    #[test]
    fn test_higher_direction() {
        let v = vectors(&[("A", &[3.0]), ("B", &[7.0])]);
        let (cats, overall) = score(
            &["A", "B"],
            &v,
            &[policy("visibility", Direction::Higher, None)],
            1e-9,
        );
        assert_eq!(cats["visibility"], Winner::Entity("B".to_string()));
        assert_eq!(overall, Winner::Entity("B".to_string()));
    }

    #[test]
    fn test_lower_direction() {
        let v = vectors(&[("A", &[3.0]), ("B", &[7.0])]);
        let (cats, overall) = score(
            &["A", "B"],
            &v,
            &[policy("wind_speed", Direction::Lower, None)],
            1e-9,
        );
        assert_eq!(cats["wind_speed"], Winner::Entity("A".to_string()));
        assert_eq!(overall, Winner::Entity("A".to_string()));
    }

    #[test]
    fn test_target_direction_prefers_closeness() {
        // Target at 4.5; A at 4.0 is closer than B at 8.0
        let v = vectors(&[("A", &[4.0]), ("B", &[8.0])]);
        let (cats, _) = score(
            &["A", "B"],
            &v,
            &[policy("humidity", Direction::Target, Some(4.5))],
            1e-9,
        );
        assert_eq!(cats["humidity"], Winner::Entity("A".to_string()));
    }

    #[test]
    fn test_identical_vectors_tie_everywhere() {
        let v = vectors(&[("A", &[5.0, 2.0]), ("B", &[5.0, 2.0])]);
        let policies = [
            policy("humidity", Direction::Higher, None),
            policy("wind_speed", Direction::Lower, None),
        ];
        let (cats, overall) = score(&["A", "B"], &v, &policies, 1e-9);
        assert!(cats.values().all(Winner::is_tie));
        assert_eq!(overall, Winner::Tie);
    }

    #[test]
    fn test_points_accumulate_across_categories() {
        let v = vectors(&[("A", &[9.0, 8.0, 1.0]), ("B", &[1.0, 2.0, 9.0])]);
        let policies = [
            policy("m1", Direction::Higher, None),
            policy("m2", Direction::Higher, None),
            policy("m3", Direction::Higher, None),
        ];
        let (_, overall) = score(&["A", "B"], &v, &policies, 1e-9);
        // A takes two categories to B's one
        assert_eq!(overall, Winner::Entity("A".to_string()));
    }

    #[test]
    fn test_equal_points_is_overall_tie() {
        let v = vectors(&[("A", &[9.0, 1.0]), ("B", &[1.0, 9.0])]);
        let policies = [
            policy("m1", Direction::Higher, None),
            policy("m2", Direction::Higher, None),
        ];
        let (cats, overall) = score(&["A", "B"], &v, &policies, 1e-9);
        assert_eq!(cats["m1"], Winner::Entity("A".to_string()));
        assert_eq!(cats["m2"], Winner::Entity("B".to_string()));
        assert_eq!(overall, Winner::Tie);
    }

    #[test]
    fn test_empty_schema_overall_tie() {
        let v = vectors(&[("A", &[]), ("B", &[])]);
        let (cats, overall) = score(&["A", "B"], &v, &[], 1e-9);
        assert!(cats.is_empty());
        assert_eq!(overall, Winner::Tie);
    }

    #[test]
    fn test_three_way_comparison() {
        let v: FxHashMap<String, NormalizedVector> = [
            ("A".to_string(), smallvec![9.0]),
            ("B".to_string(), smallvec![5.0]),
            ("C".to_string(), smallvec![1.0]),
        ]
        .into_iter()
        .collect();
        let (cats, overall) = score(
            &["A", "B", "C"],
            &v,
            &[policy("visibility", Direction::Higher, None)],
            1e-9,
        );
        assert_eq!(cats["visibility"], Winner::Entity("A".to_string()));
        assert_eq!(overall, Winner::Entity("A".to_string()));
    }
}
