//! Domain model types for the penalty TSP.
//!
//! Provides the core abstractions: cities with coordinates, the problem
//! instance (city set plus skip penalty), and tour cost functions.

mod city;
mod instance;
mod tour;

pub use city::City;
pub use instance::ProblemInstance;
pub use tour::{tour_cost, tour_distance, visited_count};
