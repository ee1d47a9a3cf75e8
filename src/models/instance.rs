//! Problem instance: the city set and the skip penalty.

use serde::{Deserialize, Serialize};

use super::City;

/// A penalty TSP instance: cities plus the per-city skip penalty.
///
/// This is the explicit context object passed by reference into every
/// component; there is no process-global registry. Cost model: a tour pays
/// the distance of its edges plus `penalty` once per city it leaves out.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::{City, ProblemInstance};
///
/// let instance = ProblemInstance::new(
///     vec![City::new(0, 0.0, 0.0), City::new(1, 1.0, 3.0)],
///     50,
/// );
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.penalty(), 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInstance {
    cities: Vec<City>,
    penalty: i64,
}

impl ProblemInstance {
    /// Creates an instance from a city list and a skip penalty.
    pub fn new(cities: Vec<City>, penalty: i64) -> Self {
        Self { cities, penalty }
    }

    /// All cities, indexed positionally.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The city at the given positional index.
    pub fn city(&self, index: usize) -> &City {
        &self.cities[index]
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the instance has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Fixed cost charged per skipped city.
    pub fn penalty(&self) -> i64 {
        self.penalty
    }
}
