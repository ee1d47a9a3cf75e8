//! Nearest-neighbor constructive heuristic.
//!
//! # Algorithm
//!
//! Starting from a chosen city, always travel to the nearest unvisited
//! city; close the tour by returning to the start. Ties break toward the
//! lower index.
//!
//! # Complexity
//!
//! O(n²).
//!
//! # Reference
//!
//! The classic greedy TSP baseline; quality is typically 15-25% above
//! optimal but it is fast and a good seed for local search.

use crate::distance::DistanceOracle;

/// Builds a closed nearest-neighbor tour from the given start city.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::City;
/// use penalty_tsp::distance::DistanceOracle;
/// use penalty_tsp::constructive::nearest_neighbor_tour;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 10.0, 0.0),
///     City::new(2, 1.0, 0.0),
/// ];
/// let oracle = DistanceOracle::dense(&cities);
/// assert_eq!(nearest_neighbor_tour(&oracle, 0), vec![0, 2, 1, 0]);
/// ```
pub fn nearest_neighbor_tour(oracle: &DistanceOracle, start: usize) -> Vec<usize> {
    let n = oracle.num_cities();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n + 1);
    let mut current = start;
    tour.push(current);
    visited[current] = true;

    for _ in 1..n {
        let mut next = None;
        let mut min_distance = i64::MAX;
        for j in 0..n {
            if !visited[j] {
                let d = oracle.distance(current, j);
                if d < min_distance {
                    min_distance = d;
                    next = Some(j);
                }
            }
        }
        let Some(next) = next else { break };
        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour.push(start);
    tour
}

/// Builds an *open* nearest-neighbor tour, used by the large-instance
/// hybrid which compares open tours before pruning.
pub fn nearest_neighbor_open(oracle: &DistanceOracle, start: usize) -> Vec<usize> {
    let mut tour = nearest_neighbor_tour(oracle, start);
    if tour.len() > 1 {
        tour.pop();
    }
    tour
}
