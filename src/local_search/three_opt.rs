//! Restricted 3-opt improvement.
//!
//! # Algorithm
//!
//! For position triples `(i, j, k)` with minimum spacing (`i ≥ 1`,
//! `j ≥ i+2`, `k ≥ j+2`, all inside a closed tour), cut the three edges
//! `(i−1, i)`, `(j−1, j)`, `(k−1, k)` and reconnect by reversing the two
//! interior segments `[i..=j−1]` and `[j..=k−1]`. The move is applied only
//! when the three replacement boundary edges are strictly shorter.
//!
//! This is deliberately the double-reversal case only, not the full 3-opt
//! move set of seven reconnection patterns. Like 2-opt it optimizes raw
//! distance on a fixed-size tour.
//!
//! # Complexity
//!
//! O(n³) per pass.

use crate::distance::DistanceOracle;

/// Runs restricted 3-opt passes until no double-reversal move improves.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::{tour_distance, City};
/// use penalty_tsp::distance::DistanceOracle;
/// use penalty_tsp::local_search::three_opt_improve;
///
/// let cities: Vec<City> = (0..8)
///     .map(|i| City::new(i, (i % 4) as f64 * 2.0, (i / 4) as f64 * 3.0))
///     .collect();
/// let oracle = DistanceOracle::dense(&cities);
/// let tour = vec![0, 5, 2, 7, 4, 1, 6, 3, 0];
/// let improved = three_opt_improve(&tour, &oracle);
/// assert!(tour_distance(&improved, &oracle) <= tour_distance(&tour, &oracle));
/// ```
pub fn three_opt_improve(tour: &[usize], oracle: &DistanceOracle) -> Vec<usize> {
    let mut current = tour.to_vec();
    if current.len() < 7 {
        return current;
    }

    let mut improvement = true;
    while improvement {
        improvement = false;
        let len = current.len();
        for i in 1..len - 5 {
            for j in (i + 2)..len - 3 {
                for k in (j + 2)..len - 1 {
                    if let Some(next) = try_double_reversal(&current, oracle, i, j, k) {
                        current = next;
                        improvement = true;
                    }
                }
            }
        }
    }
    current
}

/// Reverses `[i..=j-1]` and `[j..=k-1]` and keeps the result if the three
/// boundary edges got strictly shorter.
fn try_double_reversal(
    tour: &[usize],
    oracle: &DistanceOracle,
    i: usize,
    j: usize,
    k: usize,
) -> Option<Vec<usize>> {
    let before = oracle.distance(tour[i - 1], tour[i])
        + oracle.distance(tour[j - 1], tour[j])
        + oracle.distance(tour[k - 1], tour[k]);

    let mut candidate = tour.to_vec();
    candidate[i..=j - 1].reverse();
    candidate[j..=k - 1].reverse();

    let after = oracle.distance(candidate[i - 1], candidate[i])
        + oracle.distance(candidate[j - 1], candidate[j])
        + oracle.distance(candidate[k - 1], candidate[k]);

    if after < before {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{tour_distance, City};

    fn scrambled_grid() -> (Vec<usize>, DistanceOracle) {
        let cities: Vec<City> = (0..8)
            .map(|i| City::new(i, (i % 4) as f64 * 2.0, (i / 4) as f64 * 3.0))
            .collect();
        (vec![0, 5, 2, 7, 4, 1, 6, 3, 0], DistanceOracle::dense(&cities))
    }

    #[test]
    fn test_three_opt_never_worsens() {
        let (tour, oracle) = scrambled_grid();
        let improved = three_opt_improve(&tour, &oracle);
        assert!(tour_distance(&improved, &oracle) <= tour_distance(&tour, &oracle));
    }

    #[test]
    fn test_three_opt_idempotent_at_local_optimum() {
        let (tour, oracle) = scrambled_grid();
        let once = three_opt_improve(&tour, &oracle);
        let twice = three_opt_improve(&once, &oracle);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_three_opt_preserves_cities_and_closure() {
        let (tour, oracle) = scrambled_grid();
        let improved = three_opt_improve(&tour, &oracle);
        assert_eq!(improved.len(), tour.len());
        assert_eq!(improved[0], improved[improved.len() - 1]);
        let mut sorted = improved[..improved.len() - 1].to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_three_opt_short_tour_unchanged() {
        let (_, oracle) = scrambled_grid();
        let short = vec![0, 1, 2, 3, 0];
        assert_eq!(three_opt_improve(&short, &oracle), short);
    }
}
