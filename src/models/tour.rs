//! Tour cost functions.
//!
//! A tour is an ordered sequence of positional city indices. A closed tour
//! repeats its first index at the end; an open tour does not pay a return
//! edge. The penalty-inclusive total is the ground truth every optimizer
//! and pruning pass compares against:
//!
//! ```text
//! total = Σ d(t[i], t[i+1]) + penalty × (total cities − cities in tour)
//! ```

use crate::distance::DistanceOracle;

/// Sum of edge distances over consecutive tour positions.
///
/// The closing edge counts only when the tour explicitly repeats its first
/// index at the end.
pub fn tour_distance(tour: &[usize], oracle: &DistanceOracle) -> i64 {
    tour.windows(2).map(|w| oracle.distance(w[0], w[1])).sum()
}

/// Number of distinct cities a tour visits.
///
/// A closing duplicate of the first city is not counted twice.
pub fn visited_count(tour: &[usize]) -> usize {
    if tour.len() > 1 && tour[0] == tour[tour.len() - 1] {
        tour.len() - 1
    } else {
        tour.len()
    }
}

/// Penalty-inclusive total cost of a tour.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::{tour_cost, City};
/// use penalty_tsp::distance::DistanceOracle;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 6.0, 8.0),
/// ];
/// let oracle = DistanceOracle::dense(&cities);
/// // Visit 0 and 1, skip 2: edges 0→1→0 = 10, one skip at penalty 7.
/// assert_eq!(tour_cost(&[0, 1, 0], &oracle, 7), 17);
/// ```
pub fn tour_cost(tour: &[usize], oracle: &DistanceOracle, penalty: i64) -> i64 {
    let skipped = oracle.num_cities() - visited_count(tour);
    tour_distance(tour, oracle) + penalty * skipped as i64
}
