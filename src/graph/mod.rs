//! Graph algorithms for the Christofides pipeline.
//!
//! - [`prim_mst`] — minimum spanning tree over the distance oracle
//! - [`perfect_matching`] — blossom matching on the odd-degree vertices
//! - [`Multigraph`] — union of MST and matching edges
//! - [`eulerian_circuit`] / [`shortcut_to_hamiltonian`] — circuit
//!   extraction and shortcutting into a closed tour

mod blossom;
mod eulerian;
mod mst;
mod multigraph;

pub use blossom::perfect_matching;
pub use eulerian::{eulerian_circuit, shortcut_to_hamiltonian};
pub use mst::{edges_weight, odd_degree_vertices, prim_mst};
pub use multigraph::Multigraph;
