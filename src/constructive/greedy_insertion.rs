//! Greedy cheapest-insertion tour construction.
//!
//! # Algorithm
//!
//! Grows a tour from city 0 by repeatedly inserting, over all remaining
//! cities and all insertion positions, the (city, position) pair with the
//! smallest detour cost `d(prev, c) + d(c, next) − d(prev, next)`.
//!
//! The result is left *open* (no closing duplicate); the large-instance
//! hybrid compares open tours and pruning handles closure-independent
//! costs.
//!
//! # Complexity
//!
//! O(n³) in this straightforward form; the hybrid only reaches for it on
//! very large instances where its tour quality beats nearest-neighbor.

use crate::distance::DistanceOracle;

/// Builds an open greedy-insertion tour starting from city 0.
pub fn greedy_insertion_tour(oracle: &DistanceOracle) -> Vec<usize> {
    let n = oracle.num_cities();
    if n == 0 {
        return Vec::new();
    }

    let mut tour = vec![0usize];
    let mut in_tour = vec![false; n];
    in_tour[0] = true;

    while tour.len() < n {
        let mut best: Option<(usize, usize)> = None;
        let mut best_cost = i64::MAX;

        for city in 0..n {
            if in_tour[city] {
                continue;
            }
            for pos in 1..=tour.len() {
                let prev = tour[pos - 1];
                let next = if pos < tour.len() { tour[pos] } else { tour[0] };
                let cost = oracle.distance(prev, city) + oracle.distance(city, next)
                    - oracle.distance(prev, next);
                if cost < best_cost {
                    best_cost = cost;
                    best = Some((city, pos));
                }
            }
        }

        let Some((city, pos)) = best else { break };
        tour.insert(pos, city);
        in_tour[city] = true;
    }

    tour
}
