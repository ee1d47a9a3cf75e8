//! Skip-set preprocessing.

use std::collections::HashSet;

use crate::distance::DistanceOracle;

/// Cities that are never worth visiting, regardless of tour shape.
///
/// The cheapest conceivable way to visit a city is a detour between its
/// two nearest neighbors; when the skip penalty is below even that, the
/// city can be excluded before any tour is built. Cities without two
/// neighbors (instances of fewer than three cities) have an unbounded
/// best-case detour and are always skipped.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::City;
/// use penalty_tsp::distance::DistanceOracle;
/// use penalty_tsp::pruning::always_skip_cities;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 2.0, 0.0),
///     City::new(3, 1.0, 80.0), // detour of ~160 through its neighbors
/// ];
/// let oracle = DistanceOracle::dense(&cities);
/// let skip = always_skip_cities(&oracle, 10);
/// assert!(skip.contains(&3));
/// assert!(!skip.contains(&1));
/// ```
pub fn always_skip_cities(oracle: &DistanceOracle, penalty: i64) -> HashSet<usize> {
    let n = oracle.num_cities();
    let mut skip = HashSet::new();

    for city in 0..n {
        let mut closest: Option<(usize, i64)> = None;
        let mut second: Option<(usize, i64)> = None;
        for other in 0..n {
            if other == city {
                continue;
            }
            let d = oracle.distance(city, other);
            match closest {
                Some((_, d1)) if d >= d1 => {
                    if second.map_or(true, |(_, d2)| d < d2) {
                        second = Some((other, d));
                    }
                }
                _ => {
                    second = closest;
                    closest = Some((other, d));
                }
            }
        }

        let best_detour = match (closest, second) {
            (Some((c1, d1)), Some((c2, d2))) => d1 + d2 - oracle.distance(c1, c2),
            _ => i64::MAX,
        };
        if penalty < best_detour {
            skip.insert(city);
        }
    }

    skip
}
