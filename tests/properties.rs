//! Property tests for the structural invariants behind the pipeline:
//! spanning trees span, matchings cover, Eulerian circuits consume every
//! edge, and local search never makes a tour worse.

use std::collections::HashSet;

use proptest::prelude::*;

use penalty_tsp::constructive::{christofides_tour, nearest_neighbor_tour};
use penalty_tsp::distance::DistanceOracle;
use penalty_tsp::graph::{
    edges_weight, eulerian_circuit, odd_degree_vertices, perfect_matching, prim_mst, Multigraph,
};
use penalty_tsp::local_search::{three_opt_improve, two_opt_improve};
use penalty_tsp::models::{tour_cost, tour_distance, visited_count, City};
use penalty_tsp::pruning::{prune_advanced, prune_single};

fn cities(min: usize, max: usize) -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), min..=max).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| City::new(i, x, y))
            .collect()
    })
}

/// True when the edge set connects all of 0..n.
fn spans(edges: &[(usize, usize)], n: usize) -> bool {
    let mut adjacency = vec![Vec::new(); n];
    for &(u, v) in edges {
        adjacency[u].push(v);
        adjacency[v].push(u);
    }
    let mut seen = vec![false; n];
    let mut stack = vec![0];
    seen[0] = true;
    while let Some(v) = stack.pop() {
        for &w in &adjacency[v] {
            if !seen[w] {
                seen[w] = true;
                stack.push(w);
            }
        }
    }
    seen.into_iter().all(|s| s)
}

proptest! {
    /// A spanning tree of n vertices has n-1 edges and reaches everything.
    #[test]
    fn prop_mst_spans(cities in cities(2, 30)) {
        let oracle = DistanceOracle::dense(&cities);
        let edges = prim_mst(&oracle).unwrap();
        prop_assert_eq!(edges.len(), cities.len() - 1);
        prop_assert!(spans(&edges, cities.len()));
    }

    /// No spanning tree beats the MST; the star from vertex 0 certainly
    /// does not.
    #[test]
    fn prop_mst_not_heavier_than_star(cities in cities(2, 25)) {
        let oracle = DistanceOracle::dense(&cities);
        let mst = prim_mst(&oracle).unwrap();
        let star: Vec<(usize, usize)> = (1..cities.len()).map(|v| (0, v)).collect();
        prop_assert!(edges_weight(&mst, &oracle) <= edges_weight(&star, &oracle));
    }

    /// On tiny instances, exhaustive enumeration over all spanning edge
    /// subsets confirms the tree is minimum.
    #[test]
    fn prop_mst_minimum_on_tiny_instances(cities in cities(2, 5)) {
        let n = cities.len();
        let oracle = DistanceOracle::dense(&cities);
        let mst_weight = edges_weight(&prim_mst(&oracle).unwrap(), &oracle);

        let all_edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .collect();
        let m = all_edges.len();
        let mut best = i64::MAX;
        for mask in 0u32..(1 << m) {
            if mask.count_ones() as usize != n - 1 {
                continue;
            }
            let subset: Vec<(usize, usize)> = (0..m)
                .filter(|&e| mask & (1 << e) != 0)
                .map(|e| all_edges[e])
                .collect();
            if spans(&subset, n) {
                best = best.min(edges_weight(&subset, &oracle));
            }
        }
        prop_assert_eq!(mst_weight, best);
    }

    /// Composing MST and matching edges leaves every vertex with even
    /// degree, provided no matching edge coincides with a tree edge (the
    /// composer deduplicates coinciding pairs).
    #[test]
    fn prop_multigraph_degrees_even(cities in cities(3, 25)) {
        let n = cities.len();
        let oracle = DistanceOracle::dense(&cities);
        let mst = prim_mst(&oracle).unwrap();
        let matching = perfect_matching(&odd_degree_vertices(&mst, n)).unwrap();

        let normalize = |(u, v): (usize, usize)| if u < v { (u, v) } else { (v, u) };
        let tree: HashSet<(usize, usize)> = mst.iter().copied().map(normalize).collect();
        prop_assume!(!matching.iter().any(|&e| tree.contains(&normalize(e))));

        let graph = Multigraph::compose(n, &mst, &matching);
        prop_assert!(graph.all_degrees_even());
    }

    /// Handshake lemma: the odd-degree vertex set is always even-sized.
    #[test]
    fn prop_odd_degree_set_is_even(cities in cities(2, 30)) {
        let oracle = DistanceOracle::dense(&cities);
        let mst = prim_mst(&oracle).unwrap();
        let odd = odd_degree_vertices(&mst, cities.len());
        prop_assert_eq!(odd.len() % 2, 0);
    }

    /// Matching an even vertex set pairs every vertex exactly once.
    #[test]
    fn prop_matching_covers_even_sets(ids in prop::collection::hash_set(0usize..100, 2..12)) {
        let mut vertices: Vec<usize> = ids.into_iter().collect();
        if vertices.len() % 2 == 1 {
            vertices.pop();
        }
        vertices.sort_unstable();
        let pairs = perfect_matching(&vertices).unwrap();
        prop_assert_eq!(pairs.len(), vertices.len() / 2);
        let mut covered = HashSet::new();
        for (u, v) in pairs {
            prop_assert!(covered.insert(u));
            prop_assert!(covered.insert(v));
        }
        prop_assert_eq!(covered, vertices.into_iter().collect::<HashSet<_>>());
    }

    /// An Eulerian circuit of a simple cycle walks every edge exactly once
    /// and returns to its start.
    #[test]
    fn prop_eulerian_circuit_covers_cycles(n in 3usize..40) {
        let cycle: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
        let graph = Multigraph::compose(n, &cycle, &[]);
        prop_assert!(graph.all_degrees_even());
        let circuit = eulerian_circuit(&graph);
        prop_assert_eq!(circuit.len(), graph.edge_count() + 1);
        prop_assert_eq!(circuit.first(), circuit.last());
    }

    /// 2-opt never lengthens a tour, and a second application of it
    /// cannot improve on a 2-opt fixed point.
    #[test]
    fn prop_two_opt_monotone_and_stable(cities in cities(4, 20)) {
        let oracle = DistanceOracle::dense(&cities);
        let tour = nearest_neighbor_tour(&oracle, 0);
        let improved = two_opt_improve(&tour, &oracle);
        prop_assert!(tour_distance(&improved, &oracle) <= tour_distance(&tour, &oracle));
        let again = two_opt_improve(&improved, &oracle);
        prop_assert_eq!(tour_distance(&again, &oracle), tour_distance(&improved, &oracle));
    }

    /// Restricted 3-opt never lengthens a tour.
    #[test]
    fn prop_three_opt_monotone(cities in cities(4, 20)) {
        let oracle = DistanceOracle::dense(&cities);
        let tour = nearest_neighbor_tour(&oracle, 0);
        let improved = three_opt_improve(&tour, &oracle);
        prop_assert!(tour_distance(&improved, &oracle) <= tour_distance(&tour, &oracle));
    }

    /// Pruning commits on the penalty-inclusive total, so it can never
    /// increase it.
    #[test]
    fn prop_pruning_monotone(cities in cities(3, 15), penalty in 0i64..500) {
        let oracle = DistanceOracle::dense(&cities);
        let tour = nearest_neighbor_tour(&oracle, 0);
        let base = tour_cost(&tour, &oracle, penalty);
        prop_assert!(tour_cost(&prune_single(&tour, &oracle, penalty), &oracle, penalty) <= base);
        prop_assert!(tour_cost(&prune_advanced(&tour, &oracle, penalty), &oracle, penalty) <= base);
    }

    /// Christofides produces a closed tour visiting every city once.
    #[test]
    fn prop_christofides_visits_everything(cities in cities(2, 25)) {
        let oracle = DistanceOracle::dense(&cities);
        let tour = christofides_tour(&oracle).unwrap();
        prop_assert_eq!(tour.first(), tour.last());
        prop_assert_eq!(visited_count(&tour), cities.len());
    }

    /// Nearest neighbor produces a closed tour visiting every city once.
    #[test]
    fn prop_nearest_neighbor_visits_everything(cities in cities(1, 25)) {
        let oracle = DistanceOracle::dense(&cities);
        let tour = nearest_neighbor_tour(&oracle, 0);
        prop_assert_eq!(visited_count(&tour), cities.len());
    }
}
