//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`] / [`limited_two_opt`] / [`randomized_two_opt`] —
//!   2-opt edge exchange (exhaustive, pass-bounded, and sampling flavors)
//! - [`three_opt_improve`] — restricted 3-opt (double segment reversal)
//! - [`tabu_search`] — best-improvement swap search with tabu memory

mod tabu;
mod three_opt;
mod two_opt;

pub use tabu::{tabu_search, TABU_TENURE};
pub use three_opt::three_opt_improve;
pub use two_opt::{limited_two_opt, randomized_two_opt, two_opt_improve};
