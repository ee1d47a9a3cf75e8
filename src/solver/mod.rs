//! Top-level solver: strategy selection and candidate orchestration.
//!
//! [`solve`] picks the execution strategy from the instance size — dense
//! matrix plus full multi-candidate comparison for small instances, cached
//! oracle with a sampled Christofides for medium ones, and the fast hybrid
//! path for very large ones — and returns the cheapest tour found together
//! with the label of the algorithm that produced it.

mod fast_hybrid;
mod orchestrator;

use std::fmt;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::models::{tour_cost, ProblemInstance};

/// Tuning knobs for the solver.
///
/// The defaults mirror the thresholds the algorithms were designed
/// around; `seed` makes every randomized phase reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Largest instance that gets a dense distance matrix; anything above
    /// uses the bounded on-demand cache.
    pub matrix_threshold: usize,
    /// Largest instance the multi-candidate orchestrator handles; anything
    /// above goes down the fast hybrid path.
    pub hybrid_threshold: usize,
    /// Iteration budget for the tabu search candidate.
    pub tabu_iterations: usize,
    /// Largest instance on which the Christofides candidate also runs
    /// 3-opt.
    pub three_opt_limit: usize,
    /// Starts tried by the skip-preprocessing candidate.
    pub multi_start_attempts: usize,
    /// Entry capacity of the cached oracle before clear-all eviction.
    pub cache_capacity: usize,
    /// Seed for all randomized phases.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            matrix_threshold: 5_000,
            hybrid_threshold: 15_000,
            tabu_iterations: 1_000,
            three_opt_limit: 1_000,
            multi_start_attempts: 3,
            cache_capacity: 2_000_000,
            seed: 42,
        }
    }
}

/// Which candidate produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    NearestNeighbor,
    NearestNeighborOpt,
    Christofides,
    TabuSearch,
    SkipPreprocessing,
    FastHybrid,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NearestNeighbor => "nearest-neighbor",
            Self::NearestNeighborOpt => "nearest-neighbor + 2-opt + 3-opt",
            Self::Christofides => "christofides",
            Self::TabuSearch => "tabu-search",
            Self::SkipPreprocessing => "skip-preprocessing",
            Self::FastHybrid => "fast-hybrid",
        };
        f.write_str(name)
    }
}

/// The winning tour, its penalty-inclusive cost, and the producing
/// algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverResult {
    /// Tour as positional city indices, closed when it repeats its first
    /// entry; cities absent from it are skipped.
    pub tour: Vec<usize>,
    /// Penalty-inclusive total cost.
    pub cost: i64,
    /// Candidate that produced the tour.
    pub algorithm: Algorithm,
}

/// Solves an instance end to end.
///
/// Degenerate instances (zero or one city) return trivial tours without
/// touching the pipeline.
///
/// # Examples
///
/// ```
/// use penalty_tsp::models::{City, ProblemInstance};
/// use penalty_tsp::solver::{solve, SolverConfig};
///
/// let instance = ProblemInstance::new(
///     vec![
///         City::new(0, 0.0, 0.0),
///         City::new(1, 1.0, 3.0),
///         City::new(2, 4.0, 3.0),
///         City::new(3, 6.0, 1.0),
///         City::new(4, 3.0, 0.0),
///     ],
///     100,
/// );
/// let result = solve(&instance, &SolverConfig::default()).unwrap();
/// assert_eq!(result.cost, 15);
/// ```
pub fn solve(instance: &ProblemInstance, config: &SolverConfig) -> Result<SolverResult> {
    let n = instance.len();
    if n <= 1 {
        let tour = if n == 0 { Vec::new() } else { vec![0] };
        return Ok(SolverResult {
            tour,
            cost: 0,
            algorithm: Algorithm::NearestNeighbor,
        });
    }

    let oracle = if n <= config.matrix_threshold {
        DistanceOracle::dense(instance.cities())
    } else {
        info!("instance of {n} cities exceeds matrix threshold; using cached oracle");
        DistanceOracle::cached(instance.cities(), config.cache_capacity)
    };
    let penalty = instance.penalty();
    let mut rng = StdRng::seed_from_u64(config.seed);

    if n > config.hybrid_threshold {
        info!("large instance ({n} cities): fast hybrid path");
        let tour = fast_hybrid::solve(&oracle, penalty, &mut rng);
        let cost = tour_cost(&tour, &oracle, penalty);
        return Ok(SolverResult {
            tour,
            cost,
            algorithm: Algorithm::FastHybrid,
        });
    }

    orchestrator::run_candidates(&oracle, penalty, config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    #[test]
    fn test_solve_empty_instance() {
        let instance = ProblemInstance::new(vec![], 10);
        let result = solve(&instance, &SolverConfig::default()).expect("trivial");
        assert!(result.tour.is_empty());
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_solve_single_city() {
        let instance = ProblemInstance::new(vec![City::new(0, 3.0, 3.0)], 10);
        let result = solve(&instance, &SolverConfig::default()).expect("trivial");
        assert_eq!(result.tour, vec![0]);
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_solve_small_instance_visits_all_under_big_penalty() {
        let instance = ProblemInstance::new(
            vec![
                City::new(0, 0.0, 0.0),
                City::new(1, 1.0, 3.0),
                City::new(2, 4.0, 3.0),
                City::new(3, 6.0, 1.0),
                City::new(4, 3.0, 0.0),
            ],
            1_000,
        );
        let result = solve(&instance, &SolverConfig::default()).expect("solvable");
        assert_eq!(crate::models::visited_count(&result.tour), 5);
        assert_eq!(result.cost, 15);
    }

    #[test]
    fn test_solve_zero_penalty_skips_everything() {
        let instance = ProblemInstance::new(
            vec![
                City::new(0, 0.0, 0.0),
                City::new(1, 1.0, 3.0),
                City::new(2, 4.0, 3.0),
                City::new(3, 6.0, 1.0),
                City::new(4, 3.0, 0.0),
            ],
            0,
        );
        let result = solve(&instance, &SolverConfig::default()).expect("solvable");
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_config_default_thresholds() {
        let config = SolverConfig::default();
        assert!(config.matrix_threshold < config.hybrid_threshold);
        assert_eq!(config.tabu_iterations, 1_000);
    }
}
