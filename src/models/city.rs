//! City type.

use serde::{Deserialize, Serialize};

/// A city in a penalty TSP instance.
///
/// Cities are immutable once created. The `id` is the identifier from the
/// instance file; algorithms work with positional indices into the
/// instance's city list and map back to ids only when writing output.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::City;
///
/// let a = City::new(0, 0.0, 0.0);
/// let b = City::new(1, 3.0, 4.0);
/// assert_eq!(a.distance_to(&b), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Identifier from the instance file.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rounded Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().round() as i64
    }
}
