//! Christofides-style tour construction.
//!
//! # Pipeline
//!
//! 1. Minimum spanning tree (Prim).
//! 2. Odd-degree vertices of the MST — always an even-sized set.
//! 3. Perfect matching over the odd set (blossom contraction; unweighted
//!    feasibility matching, see [`crate::graph::perfect_matching`]).
//! 4. Multigraph union of MST and matching edges: every degree even.
//! 5. Eulerian circuit, then shortcut repeated vertices into a closed
//!    Hamiltonian tour.

use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::graph::{
    eulerian_circuit, odd_degree_vertices, perfect_matching, prim_mst, shortcut_to_hamiltonian,
    Multigraph,
};

/// Builds a closed tour with the Christofides-style pipeline.
///
/// Degenerate instances short-circuit: zero cities yield an empty tour and
/// a single city yields `[0]`, without touching matching or Eulerian
/// logic.
///
/// # Errors
///
/// Propagates [`crate::SolverError::DisconnectedGraph`] and
/// [`crate::SolverError::ImperfectMatching`]; neither occurs for a
/// complete Euclidean oracle.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::City;
/// use penalty_tsp::distance::DistanceOracle;
/// use penalty_tsp::constructive::christofides_tour;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 3.0),
///     City::new(2, 4.0, 3.0),
///     City::new(3, 6.0, 1.0),
///     City::new(4, 3.0, 0.0),
/// ];
/// let oracle = DistanceOracle::dense(&cities);
/// let tour = christofides_tour(&oracle).unwrap();
/// assert_eq!(tour.len(), 6);
/// assert_eq!(tour.first(), tour.last());
/// ```
pub fn christofides_tour(oracle: &DistanceOracle) -> Result<Vec<usize>> {
    let n = oracle.num_cities();
    if n == 0 {
        return Ok(Vec::new());
    }
    if n == 1 {
        return Ok(vec![0]);
    }

    let mst = prim_mst(oracle)?;
    let odd = odd_degree_vertices(&mst, n);
    let matching = perfect_matching(&odd)?;
    let multigraph = Multigraph::compose(n, &mst, &matching);
    let circuit = eulerian_circuit(&multigraph);
    Ok(shortcut_to_hamiltonian(&circuit))
}
