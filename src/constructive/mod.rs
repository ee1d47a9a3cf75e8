//! Constructive heuristics: tour builders that start from nothing.
//!
//! - [`nearest_neighbor_tour`] — greedy nearest-unvisited walk
//! - [`greedy_insertion_tour`] — cheapest-insertion growth
//! - [`christofides_tour`] — MST + matching + Eulerian shortcut pipeline

mod christofides;
mod greedy_insertion;
mod nearest_neighbor;

pub use christofides::christofides_tour;
pub use greedy_insertion::greedy_insertion_tour;
pub use nearest_neighbor::{nearest_neighbor_open, nearest_neighbor_tour};
