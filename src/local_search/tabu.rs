//! Tabu search over the swap neighborhood.
//!
//! # Algorithm
//!
//! Best-improvement tabu search: every iteration evaluates all position
//! swaps `1 ≤ i < j ≤ len−2`, skips moves whose city pair is still tabu
//! unless the move beats the best-known cost (aspiration), applies the
//! cheapest eligible swap, and forbids the swapped city pair for
//! [`TABU_TENURE`] iterations. Runs for a fixed iteration budget; there is
//! no convergence detection.
//!
//! The tabu matrix is sized to the oracle's city count rather than the
//! tour length, because pruning may hand this search a tour over a subset
//! of the cities. Costs are penalty-inclusive totals, so the search can
//! rank tours that leave cities out.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search — Part I", *ORSA Journal on Computing*
//! 1(3), 190-206.

use crate::distance::DistanceOracle;
use crate::models::tour_cost;

/// Iterations a reversed swap stays forbidden.
pub const TABU_TENURE: usize = 7;

/// Improves a tour by tabu search for a fixed number of iterations.
///
/// With `max_iterations == 0` the initial tour is returned unchanged.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::{tour_cost, City};
/// use penalty_tsp::distance::DistanceOracle;
/// use penalty_tsp::local_search::tabu_search;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 4.0),
///     City::new(2, 3.0, 0.0),
///     City::new(3, 3.0, 4.0),
/// ];
/// let oracle = DistanceOracle::dense(&cities);
/// let initial = vec![0, 1, 2, 3, 0];
/// let improved = tabu_search(&initial, &oracle, 100, 50);
/// assert!(tour_cost(&improved, &oracle, 100) <= tour_cost(&initial, &oracle, 100));
/// ```
pub fn tabu_search(
    initial: &[usize],
    oracle: &DistanceOracle,
    penalty: i64,
    max_iterations: usize,
) -> Vec<usize> {
    let n = initial.len();
    let city_count = oracle.num_cities();
    let mut best = initial.to_vec();
    if n < 4 || city_count == 0 || max_iterations == 0 {
        return best;
    }

    let mut current = initial.to_vec();
    let mut best_cost = tour_cost(&best, oracle, penalty);
    let mut tabu = vec![vec![0usize; city_count]; city_count];

    for iteration in 0..max_iterations {
        let mut best_neighbor_cost = i64::MAX;
        let mut best_swap: Option<(usize, usize)> = None;

        for i in 1..n - 2 {
            for j in (i + 1)..n - 1 {
                let mut neighbor = current.clone();
                neighbor.swap(i, j);
                let cost = tour_cost(&neighbor, oracle, penalty);

                let is_tabu = tabu[current[i]][current[j]] > iteration;
                if (!is_tabu || cost < best_cost) && cost < best_neighbor_cost {
                    best_neighbor_cost = cost;
                    best_swap = Some((i, j));
                }
            }
        }

        if let Some((i, j)) = best_swap {
            current.swap(i, j);
            let city_i = current[i];
            let city_j = current[j];
            tabu[city_i][city_j] = iteration + TABU_TENURE;
            tabu[city_j][city_i] = iteration + TABU_TENURE;

            let cost = tour_cost(&current, oracle, penalty);
            if cost < best_cost {
                best = current.clone();
                best_cost = cost;
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn rectangle() -> DistanceOracle {
        DistanceOracle::dense(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 4.0),
            City::new(2, 3.0, 0.0),
            City::new(3, 3.0, 4.0),
        ])
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let oracle = rectangle();
        let initial = vec![0, 1, 2, 3, 0];
        let result = tabu_search(&initial, &oracle, 100, 0);
        assert_eq!(result, initial);
        assert_eq!(
            tour_cost(&result, &oracle, 100),
            tour_cost(&initial, &oracle, 100)
        );
    }

    #[test]
    fn test_never_worse_than_initial() {
        let oracle = rectangle();
        let initial = vec![0, 1, 2, 3, 0];
        let result = tabu_search(&initial, &oracle, 100, 50);
        assert!(tour_cost(&result, &oracle, 100) <= tour_cost(&initial, &oracle, 100));
    }

    #[test]
    fn test_finds_uncrossed_rectangle() {
        let oracle = rectangle();
        // Crossed order costs 18; the perimeter costs 14.
        let result = tabu_search(&[0, 1, 2, 3, 0], &oracle, 1000, 50);
        assert_eq!(tour_cost(&result, &oracle, 1000), 14);
    }

    #[test]
    fn test_tabu_list_sized_to_oracle_not_tour() {
        let oracle = rectangle();
        // Tour over a subset of the cities: indices up to 3 must still be
        // valid tabu keys even though the tour has fewer positions.
        let subset = vec![0, 3, 2, 0];
        let result = tabu_search(&subset, &oracle, 5, 10);
        assert!(tour_cost(&result, &oracle, 5) <= tour_cost(&subset, &oracle, 5));
    }

    #[test]
    fn test_short_tour_returned_unchanged() {
        let oracle = rectangle();
        assert_eq!(tabu_search(&[0, 1, 0], &oracle, 10, 100), vec![0, 1, 0]);
    }
}
