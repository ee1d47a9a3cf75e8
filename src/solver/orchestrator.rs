//! Multi-candidate orchestration for small and medium instances.
//!
//! Runs a fixed sequence of candidate pipelines over the same oracle and
//! keeps the first strictly cheaper result. A candidate that fails is
//! logged and excluded; the remaining candidates still run.

use std::collections::HashSet;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constructive::{christofides_tour, nearest_neighbor_tour};
use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::local_search::{
    randomized_two_opt, tabu_search, three_opt_improve, two_opt_improve,
};
use crate::models::tour_cost;
use crate::pruning::{always_skip_cities, prune_advanced, prune_single};
use crate::solver::{Algorithm, SolverConfig, SolverResult};

/// Runs every candidate in order and returns the cheapest result.
pub(crate) fn run_candidates<R: Rng>(
    oracle: &DistanceOracle,
    penalty: i64,
    config: &SolverConfig,
    rng: &mut R,
) -> Result<SolverResult> {
    let n = oracle.num_cities();
    let sampled = n > config.matrix_threshold;
    let mut best: Option<SolverResult> = None;

    // 1. Nearest neighbor with single-city pruning.
    let nn_pruned = prune_single(&nearest_neighbor_tour(oracle, 0), oracle, penalty);
    consider(&mut best, Algorithm::NearestNeighbor, nn_pruned.clone(), oracle, penalty);

    // 2. The pruned nearest-neighbor tour, polished and pruned again.
    let polished = three_opt_improve(&two_opt_improve(&nn_pruned, oracle), oracle);
    let polished = prune_advanced(&polished, oracle, penalty);
    consider(&mut best, Algorithm::NearestNeighborOpt, polished, oracle, penalty);

    // 3. Christofides (or its sampled stand-in on medium instances).
    match christofides_candidate(oracle, penalty, config, sampled, rng) {
        Ok(tour) => consider(&mut best, Algorithm::Christofides, tour, oracle, penalty),
        Err(e) => warn!("christofides candidate failed: {e}"),
    }

    // 4. Tabu search seeded from the incumbent.
    if let Some(incumbent) = best.as_ref().map(|r| r.tour.clone()) {
        let tour = tabu_search(&incumbent, oracle, penalty, config.tabu_iterations);
        let tour = prune_advanced(&tour, oracle, penalty);
        consider(&mut best, Algorithm::TabuSearch, tour, oracle, penalty);
    }

    // 5. Multi-start optimization over the preprocessed city set.
    let tour = preprocessing_candidate(oracle, penalty, config.multi_start_attempts, rng);
    consider(&mut best, Algorithm::SkipPreprocessing, tour, oracle, penalty);

    // Candidate 1 is infallible, so a winner always exists here.
    best.ok_or_else(|| {
        crate::error::SolverError::InvalidInput("no candidate produced a tour".into())
    })
}

fn consider(
    best: &mut Option<SolverResult>,
    algorithm: Algorithm,
    tour: Vec<usize>,
    oracle: &DistanceOracle,
    penalty: i64,
) {
    let cost = tour_cost(&tour, oracle, penalty);
    debug!("candidate {algorithm}: cost {cost}");
    let beats = best.as_ref().map_or(true, |b| cost < b.cost);
    if beats {
        *best = Some(SolverResult { tour, cost, algorithm });
    }
}

/// Full Christofides on small instances; on medium ones the matching step
/// is too expensive, so a nearest-neighbor tour refined by sampling 2-opt
/// stands in for it.
fn christofides_candidate<R: Rng>(
    oracle: &DistanceOracle,
    penalty: i64,
    config: &SolverConfig,
    sampled: bool,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let n = oracle.num_cities();
    let base = if sampled {
        let tour = nearest_neighbor_tour(oracle, 0);
        randomized_two_opt(&tour, oracle, (n / 10).min(1_000), rng)
    } else {
        christofides_tour(oracle)?
    };

    let tour = two_opt_improve(&base, oracle);
    let tour = if n <= config.three_opt_limit {
        three_opt_improve(&tour, oracle)
    } else {
        tour
    };
    Ok(prune_advanced(&tour, oracle, penalty))
}

/// Drops the always-skip set up front, then runs a small multi-start
/// search over the remaining cities: one shuffled start and
/// nearest-neighbor starts for the rest, each polished by 2-opt and 3-opt.
fn preprocessing_candidate<R: Rng>(
    oracle: &DistanceOracle,
    penalty: i64,
    attempts: usize,
    rng: &mut R,
) -> Vec<usize> {
    let skip = always_skip_cities(oracle, penalty);
    let included: Vec<usize> = (0..oracle.num_cities())
        .filter(|c| !skip.contains(c))
        .collect();
    debug!(
        "preprocessing skips {} of {} cities",
        skip.len(),
        oracle.num_cities()
    );
    if included.is_empty() {
        return Vec::new();
    }

    let mut best: Option<(Vec<usize>, i64)> = None;
    for attempt in 0..attempts.max(1) {
        let initial = if attempt == 0 && included.len() > 1 {
            let mut tour = included.clone();
            tour.shuffle(rng);
            tour.push(tour[0]);
            tour
        } else {
            restricted_nearest_neighbor(oracle, &included)
        };

        let tour = three_opt_improve(&two_opt_improve(&initial, oracle), oracle);
        let cost = tour_cost(&tour, oracle, penalty);
        if best.as_ref().map_or(true, |(_, c)| cost < *c) {
            best = Some((tour, cost));
        }
    }
    best.map(|(tour, _)| tour).unwrap_or_default()
}

/// Nearest-neighbor walk confined to an allowed subset of cities.
fn restricted_nearest_neighbor(oracle: &DistanceOracle, included: &[usize]) -> Vec<usize> {
    let start = included[0];
    let mut remaining: HashSet<usize> = included.iter().copied().collect();
    remaining.remove(&start);

    let mut tour = Vec::with_capacity(included.len() + 1);
    tour.push(start);
    let mut current = start;
    while !remaining.is_empty() {
        let mut next: Option<(usize, i64)> = None;
        for &candidate in included {
            if !remaining.contains(&candidate) {
                continue;
            }
            let d = oracle.distance(current, candidate);
            if next.map_or(true, |(_, nd)| d < nd) {
                next = Some((candidate, d));
            }
        }
        if let Some((city, _)) = next {
            tour.push(city);
            remaining.remove(&city);
            current = city;
        }
    }
    tour.push(start);
    tour
}
