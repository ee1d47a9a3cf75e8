//! Minimum spanning tree via Prim's algorithm.
//!
//! # Algorithm
//!
//! Maintains `min_edge[v]` (cheapest known edge into the growing tree) and
//! `parent[v]`. Each round selects the unvisited vertex with the smallest
//! key — first index wins on ties — and relaxes its neighbors through the
//! distance oracle.
//!
//! # Complexity
//!
//! O(n²), which is optimal for the complete graphs this crate works on.

use crate::distance::DistanceOracle;
use crate::error::{Result, SolverError};

/// Builds the MST over all cities of the oracle.
///
/// Returns the tree as an edge list of `(parent, child)` index pairs;
/// exactly n−1 edges for n ≥ 1.
///
/// # Errors
///
/// [`SolverError::DisconnectedGraph`] if some vertex is unreachable. A
/// complete Euclidean oracle never triggers this; it guards the invariant
/// rather than a normal failure mode.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::City;
/// use penalty_tsp::distance::DistanceOracle;
/// use penalty_tsp::graph::prim_mst;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 2.0, 0.0),
/// ];
/// let oracle = DistanceOracle::dense(&cities);
/// let mst = prim_mst(&oracle).unwrap();
/// assert_eq!(mst.len(), 2);
/// ```
pub fn prim_mst(oracle: &DistanceOracle) -> Result<Vec<(usize, usize)>> {
    let n = oracle.num_cities();
    if n <= 1 {
        return Ok(Vec::new());
    }

    let mut in_tree = vec![false; n];
    let mut min_edge = vec![i64::MAX; n];
    let mut parent = vec![0usize; n];
    min_edge[0] = 0;

    for _ in 0..n {
        let mut u = None;
        for v in 0..n {
            if !in_tree[v] && u.map_or(true, |u: usize| min_edge[v] < min_edge[u]) {
                u = Some(v);
            }
        }
        let u = u.ok_or(SolverError::DisconnectedGraph)?;
        if min_edge[u] == i64::MAX {
            return Err(SolverError::DisconnectedGraph);
        }
        in_tree[u] = true;

        for v in 0..n {
            if !in_tree[v] {
                let d = oracle.distance(u, v);
                if d < min_edge[v] {
                    min_edge[v] = d;
                    parent[v] = u;
                }
            }
        }
    }

    Ok((1..n).map(|v| (parent[v], v)).collect())
}

/// Vertices with odd degree in the given edge list.
///
/// For any tree (or any graph at all) the returned set has even
/// cardinality, which is what makes a perfect matching over it possible.
pub fn odd_degree_vertices(edges: &[(usize, usize)], n: usize) -> Vec<usize> {
    let mut degree = vec![0usize; n];
    for &(u, v) in edges {
        degree[u] += 1;
        degree[v] += 1;
    }
    (0..n).filter(|&v| degree[v] % 2 == 1).collect()
}

/// Total weight of an edge list under the oracle.
pub fn edges_weight(edges: &[(usize, usize)], oracle: &DistanceOracle) -> i64 {
    edges.iter().map(|&(u, v)| oracle.distance(u, v)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn line_oracle() -> DistanceOracle {
        let cities = vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 10.0, 0.0),
            City::new(2, 1.0, 0.0),
            City::new(3, 11.0, 0.0),
        ];
        DistanceOracle::dense(&cities)
    }

    #[test]
    fn test_mst_edge_count() {
        let oracle = line_oracle();
        let mst = prim_mst(&oracle).expect("connected");
        assert_eq!(mst.len(), 3);
    }

    #[test]
    fn test_mst_weight_on_line() {
        let oracle = line_oracle();
        let mst = prim_mst(&oracle).expect("connected");
        // Optimal tree on the line 0-2 ... 1-3: 1 + 9 + 1 = 11.
        assert_eq!(edges_weight(&mst, &oracle), 11);
    }

    #[test]
    fn test_mst_is_connected() {
        let oracle = line_oracle();
        let mst = prim_mst(&oracle).expect("connected");
        let n = oracle.num_cities();
        let mut reach = vec![false; n];
        reach[0] = true;
        // n passes of edge relaxation reach every vertex of a tree.
        for _ in 0..n {
            for &(u, v) in &mst {
                if reach[u] || reach[v] {
                    reach[u] = true;
                    reach[v] = true;
                }
            }
        }
        assert!(reach.iter().all(|&r| r));
    }

    #[test]
    fn test_mst_trivial_instances() {
        let one = DistanceOracle::dense(&[City::new(0, 0.0, 0.0)]);
        assert!(prim_mst(&one).expect("trivial").is_empty());
        let none = DistanceOracle::dense(&[]);
        assert!(prim_mst(&none).expect("trivial").is_empty());
    }

    #[test]
    fn test_odd_degree_vertices() {
        // Path 0-1-2-3: endpoints odd, middle even.
        let edges = vec![(0, 1), (1, 2), (2, 3)];
        assert_eq!(odd_degree_vertices(&edges, 4), vec![0, 3]);
    }

    #[test]
    fn test_odd_set_even_cardinality() {
        let oracle = line_oracle();
        let mst = prim_mst(&oracle).expect("connected");
        let odd = odd_degree_vertices(&mst, oracle.num_cities());
        assert_eq!(odd.len() % 2, 0);
    }
}
