//! Bounded on-demand distance cache for large instances.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::models::City;

/// Memoizing distance oracle backend for instances too large for a dense
/// matrix.
///
/// Distances are computed on demand from stored coordinates and memoized
/// under the unordered city-index pair. When the map grows past its
/// capacity it is cleared wholesale; there is no per-entry eviction.
///
/// Interior mutability makes lookups take `&self`; the type is for
/// single-threaded use (it is not `Sync`). A parallelized caller must give
/// each worker its own cache.
#[derive(Debug)]
pub struct DistanceCache {
    coords: Vec<(f64, f64)>,
    cache: RefCell<HashMap<(usize, usize), i64>>,
    capacity: usize,
}

impl DistanceCache {
    /// Creates a cache over the given cities with a maximum entry count.
    pub fn new(cities: &[City], capacity: usize) -> Self {
        Self {
            coords: cities.iter().map(|c| (c.x(), c.y())).collect(),
            cache: RefCell::new(HashMap::new()),
            capacity,
        }
    }

    /// Rounded Euclidean distance between two city indices.
    pub fn distance(&self, i: usize, j: usize) -> i64 {
        if i == j {
            return 0;
        }
        let key = if i < j { (i, j) } else { (j, i) };
        if let Some(&d) = self.cache.borrow().get(&key) {
            return d;
        }
        let (xi, yi) = self.coords[key.0];
        let (xj, yj) = self.coords[key.1];
        let dx = xi - xj;
        let dy = yi - yj;
        let d = (dx * dx + dy * dy).sqrt().round() as i64;

        let mut cache = self.cache.borrow_mut();
        if cache.len() >= self.capacity {
            cache.clear();
        }
        cache.insert(key, d);
        d
    }

    /// Number of cities covered.
    pub fn num_cities(&self) -> usize {
        self.coords.len()
    }

    /// Current number of memoized entries.
    pub fn cached_entries(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cities() -> Vec<City> {
        vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 3.0, 4.0),
            City::new(2, 6.0, 8.0),
            City::new(3, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_distance_matches_direct_computation() {
        let cities = sample_cities();
        let cache = DistanceCache::new(&cities, 100);
        assert_eq!(cache.distance(0, 1), 5);
        assert_eq!(cache.distance(0, 2), 10);
        assert_eq!(cache.distance(1, 0), 5);
        assert_eq!(cache.distance(2, 2), 0);
    }

    #[test]
    fn test_memoization() {
        let cache = DistanceCache::new(&sample_cities(), 100);
        assert_eq!(cache.cached_entries(), 0);
        cache.distance(0, 1);
        cache.distance(1, 0); // same unordered pair
        assert_eq!(cache.cached_entries(), 1);
    }

    #[test]
    fn test_clear_all_eviction() {
        let cache = DistanceCache::new(&sample_cities(), 2);
        cache.distance(0, 1);
        cache.distance(0, 2);
        assert_eq!(cache.cached_entries(), 2);
        // Third insert overflows: the whole map is dropped first.
        cache.distance(0, 3);
        assert_eq!(cache.cached_entries(), 1);
        // Values are still correct after eviction.
        assert_eq!(cache.distance(0, 1), 5);
    }
}
