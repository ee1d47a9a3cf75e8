//! Distance oracles: dense matrix and bounded on-demand cache.
//!
//! Every algorithm in the crate reads pairwise distances through
//! [`DistanceOracle`], which hides whether the instance is small enough
//! for a precomputed matrix or falls back to memoized on-demand
//! computation. Distances are rounded Euclidean integers; the oracle is
//! symmetric and zero on the diagonal.

mod cache;
mod matrix;

pub use cache::DistanceCache;
pub use matrix::DistanceMatrix;

use crate::models::City;

/// Pairwise distance capability over a city set.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::City;
/// use penalty_tsp::distance::DistanceOracle;
///
/// let cities = vec![City::new(0, 0.0, 0.0), City::new(1, 3.0, 4.0)];
/// let oracle = DistanceOracle::dense(&cities);
/// assert_eq!(oracle.distance(0, 1), 5);
/// assert_eq!(oracle.num_cities(), 2);
/// ```
#[derive(Debug)]
pub enum DistanceOracle {
    /// Precomputed n×n matrix; exclusive to matrix-feasible instance sizes.
    Dense(DistanceMatrix),
    /// Bounded memoized cache with on-demand computation.
    Cached(DistanceCache),
}

impl DistanceOracle {
    /// Builds a dense-matrix oracle. Quadratic memory in the city count.
    pub fn dense(cities: &[City]) -> Self {
        Self::Dense(DistanceMatrix::from_cities(cities))
    }

    /// Builds a cached oracle with the given entry capacity.
    pub fn cached(cities: &[City], capacity: usize) -> Self {
        Self::Cached(DistanceCache::new(cities, capacity))
    }

    /// Distance between two city indices.
    pub fn distance(&self, i: usize, j: usize) -> i64 {
        match self {
            Self::Dense(m) => m.get(i, j),
            Self::Cached(c) => c.distance(i, j),
        }
    }

    /// Number of cities the oracle covers.
    pub fn num_cities(&self) -> usize {
        match self {
            Self::Dense(m) => m.size(),
            Self::Cached(c) => c.num_cities(),
        }
    }
}
