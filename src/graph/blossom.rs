//! Perfect matching on general graphs via augmenting paths with blossom
//! contraction.
//!
//! # Algorithm
//!
//! Repeated BFS for augmenting paths from each unmatched vertex, in index
//! order. When the search closes an odd cycle (a blossom), every vertex on
//! the cycle is contracted into the base of the lowest common ancestor and
//! the search continues on the contracted graph.
//!
//! The search is *unweighted*: edges are considered in index order, not by
//! weight, so the result is a feasible perfect matching rather than the
//! minimum-weight one. In the Christofides pipeline this trades the
//! textbook approximation bound for speed on the complete odd-vertex
//! graph. Kept as-built; do not weight-prioritize the edge scan.
//!
//! # Reference
//!
//! Edmonds, J. (1965). "Paths, trees, and flowers", *Canadian Journal of
//! Mathematics* 17, 449-467.

use std::collections::VecDeque;

use crate::error::{Result, SolverError};

/// Augmenting-path matcher over the complete graph on `n` vertices.
struct BlossomMatcher {
    n: usize,
    mate: Vec<Option<usize>>,
    parent: Vec<Option<usize>>,
    base: Vec<usize>,
    used: Vec<bool>,
}

impl BlossomMatcher {
    fn new(n: usize) -> Self {
        Self {
            n,
            mate: vec![None; n],
            parent: vec![None; n],
            base: (0..n).collect(),
            used: vec![false; n],
        }
    }

    /// Lowest common ancestor of `a` and `b` in the alternating tree,
    /// walking blossom bases and matched edges from each side until the
    /// walks meet.
    fn lca(&self, a: usize, b: usize) -> Option<usize> {
        let mut visited = vec![false; self.n];
        let mut a = a;
        loop {
            a = self.base[a];
            visited[a] = true;
            let Some(ma) = self.mate[a] else { break };
            let Some(pa) = self.parent[ma] else { break };
            a = pa;
        }
        let mut b = b;
        loop {
            b = self.base[b];
            if visited[b] {
                return Some(b);
            }
            let Some(mb) = self.mate[b] else { break };
            let Some(pb) = self.parent[mb] else { break };
            b = pb;
        }
        None
    }

    /// Marks every blossom base on the path from `v` down to base `b`,
    /// re-rooting parent pointers through `child` along the way.
    fn mark_path(&mut self, v: usize, b: usize, child: usize, blossom: &mut [bool]) {
        let mut v = v;
        let mut child = child;
        while self.base[v] != b {
            let Some(mv) = self.mate[v] else { break };
            blossom[self.base[v]] = true;
            blossom[self.base[mv]] = true;
            self.parent[v] = Some(child);
            child = mv;
            let Some(pmv) = self.parent[mv] else { break };
            v = pmv;
        }
    }

    /// BFS for an augmenting path from `root`. Returns the unmatched
    /// endpoint if one is found.
    fn find_path(&mut self, root: usize) -> Option<usize> {
        self.used = vec![false; self.n];
        self.parent = vec![None; self.n];
        self.base = (0..self.n).collect();

        let mut queue = VecDeque::new();
        queue.push_back(root);
        self.used[root] = true;

        while let Some(v) = queue.pop_front() {
            for u in 0..self.n {
                if u == v || self.base[v] == self.base[u] || self.mate[v] == Some(u) {
                    continue;
                }
                let closes_blossom =
                    u == root || self.mate[u].is_some_and(|mu| self.parent[mu].is_some());
                if closes_blossom {
                    let Some(cur_base) = self.lca(v, u) else { continue };
                    let mut blossom = vec![false; self.n];
                    self.mark_path(v, cur_base, u, &mut blossom);
                    self.mark_path(u, cur_base, v, &mut blossom);
                    for i in 0..self.n {
                        if blossom[self.base[i]] {
                            self.base[i] = cur_base;
                            if !self.used[i] {
                                self.used[i] = true;
                                queue.push_back(i);
                            }
                        }
                    }
                } else if self.parent[u].is_none() {
                    self.parent[u] = Some(v);
                    match self.mate[u] {
                        None => return Some(u),
                        Some(mu) => {
                            self.used[mu] = true;
                            queue.push_back(mu);
                        }
                    }
                }
            }
        }
        None
    }

    /// Flips matched/unmatched edges back along the parent chain from the
    /// augmenting path's endpoint. Returns `false` if no path exists.
    fn augment(&mut self, start: usize) -> bool {
        let Some(finish) = self.find_path(start) else {
            return false;
        };
        let mut u = finish;
        while let Some(pv) = self.parent[u] {
            let ppv = self.mate[pv];
            self.mate[u] = Some(pv);
            self.mate[pv] = Some(u);
            match ppv {
                Some(next) => u = next,
                None => break,
            }
        }
        true
    }
}

/// Finds a perfect matching over the given vertex set.
///
/// `vertices` are original city indices (typically the odd-degree vertices
/// of an MST); the complete graph over them is searched. Each matched pair
/// is emitted once, lower local index first.
///
/// # Errors
///
/// [`SolverError::ImperfectMatching`] if some vertex remains uncovered.
/// For a complete graph over an even-sized set this cannot happen.
///
/// # Examples
///
/// ```
/// use penalty_tsp::graph::perfect_matching;
///
/// let matching = perfect_matching(&[2, 5, 7, 9]).unwrap();
/// assert_eq!(matching.len(), 2);
/// ```
pub fn perfect_matching(vertices: &[usize]) -> Result<Vec<(usize, usize)>> {
    let n = vertices.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if n % 2 != 0 {
        return Err(SolverError::ImperfectMatching);
    }

    let mut matcher = BlossomMatcher::new(n);
    for i in 0..n {
        if matcher.mate[i].is_none() {
            matcher.augment(i);
        }
    }

    let mut pairs = Vec::with_capacity(n / 2);
    for i in 0..n {
        match matcher.mate[i] {
            Some(m) if i < m => pairs.push((vertices[i], vertices[m])),
            Some(_) => {}
            None => return Err(SolverError::ImperfectMatching),
        }
    }
    Ok(pairs)
}
