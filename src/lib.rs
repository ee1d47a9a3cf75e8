//! # penalty-tsp
//!
//! Approximation engine for the penalty traveling salesman problem: a tour
//! may skip any city by paying a fixed per-city penalty, and the objective
//! is the tour's edge distance plus the penalties of everything skipped.
//!
//! ## Modules
//!
//! - [`models`] — Cities, problem instances, and tour cost accounting
//! - [`distance`] — Dense matrix and bounded-cache distance oracles
//! - [`graph`] — MST, blossom matching, multigraph, and Eulerian circuit
//! - [`constructive`] — Nearest neighbor, greedy insertion, Christofides
//! - [`local_search`] — 2-opt variants, restricted 3-opt, tabu search
//! - [`pruning`] — Penalty-aware city removal and skip preprocessing
//! - [`solver`] — Strategy selection and candidate orchestration
//! - [`io`] — Plain-text instance and solution formats
//!
//! ## Quick start
//!
//! ```
//! use penalty_tsp::models::{City, ProblemInstance};
//! use penalty_tsp::solver::{solve, SolverConfig};
//!
//! let instance = ProblemInstance::new(
//!     vec![
//!         City::new(0, 0.0, 0.0),
//!         City::new(1, 4.0, 0.0),
//!         City::new(2, 4.0, 3.0),
//!         City::new(3, 0.0, 3.0),
//!     ],
//!     100,
//! );
//! let result = solve(&instance, &SolverConfig::default()).unwrap();
//! assert_eq!(result.cost, 14);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod graph;
pub mod io;
pub mod local_search;
pub mod models;
pub mod pruning;
pub mod solver;

pub use error::{Result, SolverError};
pub use models::{City, ProblemInstance};
pub use solver::{solve, Algorithm, SolverConfig, SolverResult};
