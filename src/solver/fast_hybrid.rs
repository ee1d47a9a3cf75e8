//! Fast hybrid path for very large instances.
//!
//! Everything here is budgeted: a handful of constructive starts, sampling
//! 2-opt with pass limits tied to the instance size, a short segment
//! perturbation phase, and the cheap pruner. No phase scans all O(n²)
//! moves.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constructive::{greedy_insertion_tour, nearest_neighbor_open};
use crate::distance::DistanceOracle;
use crate::local_search::{limited_two_opt, randomized_two_opt};
use crate::models::{tour_cost, tour_distance};
use crate::pruning::prune_aggressive;

const PERTURBATION_ROUNDS: usize = 4;
const PERTURBATION_WINDOW: usize = 8;

/// Produces an open tour for an instance too large for the orchestrator.
pub(crate) fn solve<R: Rng>(oracle: &DistanceOracle, penalty: i64, rng: &mut R) -> Vec<usize> {
    let n = oracle.num_cities();

    info!("fast hybrid: building initial tours");
    let mut candidates = vec![
        nearest_neighbor_open(oracle, 0),
        nearest_neighbor_open(oracle, n / 2),
        nearest_neighbor_open(oracle, n - 1),
    ];
    if n > 10_000 {
        candidates.push(greedy_insertion_tour(oracle));
    }
    let mut best = candidates
        .into_iter()
        .min_by_key(|tour| tour_cost(tour, oracle, penalty))
        .unwrap_or_default();
    debug!(
        "fast hybrid: best initial cost {}",
        tour_cost(&best, oracle, penalty)
    );

    best = randomized_two_opt(&best, oracle, (n / 10).min(1_000), rng);
    best = perturb_segments(&best, oracle, rng);
    best = prune_aggressive(&best, oracle, penalty);
    best = randomized_two_opt(&best, oracle, (n / 20).min(500), rng);

    debug!(
        "fast hybrid: final cost {}",
        tour_cost(&best, oracle, penalty)
    );
    best
}

/// Escapes shallow local optima by shuffling a short window of the tour,
/// repairing it with pass-bounded 2-opt, and keeping the result only when
/// it is strictly shorter.
fn perturb_segments<R: Rng>(tour: &[usize], oracle: &DistanceOracle, rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    let window = PERTURBATION_WINDOW.min(n / 4);
    if window < 3 {
        return tour.to_vec();
    }

    let mut best = tour.to_vec();
    let mut best_len = tour_distance(&best, oracle);
    for _ in 0..PERTURBATION_ROUNDS {
        let start = rng.random_range(1..n - window);
        let mut candidate = best.clone();
        candidate[start..start + window].shuffle(rng);
        let candidate = limited_two_opt(&candidate, oracle, 50);
        let len = tour_distance(&candidate, oracle);
        if len < best_len {
            best = candidate;
            best_len = len;
        }
    }
    best
}
