//! Penalty-aware pruning: trading visits for skip penalties.
//!
//! - [`prune_single`] — drop one city at a time while the total improves
//! - [`prune_advanced`] — detour-gated singles plus contiguous runs
//! - [`prune_aggressive`] — cheaper variant for the large-instance hybrid
//! - [`always_skip_cities`] — preprocessing skip set from best-case detours

mod penalty;
mod preprocess;

pub use penalty::{prune_advanced, prune_aggressive, prune_single};
pub use preprocess::always_skip_cities;
