//! Eulerian circuit extraction and Hamiltonian shortcutting.
//!
//! # Algorithm
//!
//! Depth-first edge consumption from vertex 0, implemented with an explicit
//! stack and a per-vertex cursor into the adjacency list so that instance
//! size never translates into recursion depth. A vertex is appended to the
//! output after all of its edges are consumed, producing the circuit in
//! post-order (reverse traversal order). Both directions of an undirected
//! edge are consumed together.
//!
//! Shortcutting reverses the post-order list and keeps only the first
//! occurrence of each vertex, then closes the tour by repeating the first
//! city.

use std::collections::HashSet;

use super::Multigraph;

/// Extracts an Eulerian circuit from the multigraph, starting at vertex 0.
///
/// The circuit is returned in post-order; callers normally feed it straight
/// into [`shortcut_to_hamiltonian`]. For a connected even-degree graph the
/// result has `edge_count() + 1` entries.
pub fn eulerian_circuit(graph: &Multigraph) -> Vec<usize> {
    let n = graph.num_vertices();
    if n == 0 {
        return Vec::new();
    }

    let mut cursor = vec![0usize; n];
    let mut consumed: HashSet<(usize, usize)> = HashSet::new();
    let mut stack = vec![0usize];
    let mut order = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&v) = stack.last() {
        let mut advanced = false;
        while cursor[v] < graph.degree(v) {
            let u = graph.neighbors(v)[cursor[v]];
            cursor[v] += 1;
            let key = if v < u { (v, u) } else { (u, v) };
            if consumed.insert(key) {
                stack.push(u);
                advanced = true;
                break;
            }
        }
        if !advanced {
            order.push(v);
            stack.pop();
        }
    }

    order
}

/// Shortcuts an Eulerian circuit into a closed Hamiltonian tour.
///
/// Reverses the post-order circuit into traversal order, emits each vertex
/// on first occurrence only, and appends the first city again to close.
///
/// # Examples
///
/// ```
/// use penalty_tsp::graph::{eulerian_circuit, shortcut_to_hamiltonian, Multigraph};
///
/// let graph = Multigraph::compose(3, &[(0, 1), (1, 2)], &[(0, 2)]);
/// let circuit = eulerian_circuit(&graph);
/// let tour = shortcut_to_hamiltonian(&circuit);
/// assert_eq!(tour.first(), tour.last());
/// assert_eq!(tour.len(), 4);
/// ```
pub fn shortcut_to_hamiltonian(circuit: &[usize]) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut tour: Vec<usize> = circuit
        .iter()
        .rev()
        .copied()
        .filter(|&v| seen.insert(v))
        .collect();
    if let Some(&first) = tour.first() {
        tour.push(first);
    }
    tour
}
