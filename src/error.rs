//! Error types for the solver.

use thiserror::Error;

/// Errors produced by the solver pipeline.
///
/// Candidate algorithms return these instead of panicking; the orchestrator
/// logs and skips a failing candidate rather than aborting the run.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The distance graph turned out to be disconnected during MST
    /// construction. For a complete Euclidean instance this is an invariant
    /// violation, not a recoverable condition.
    #[error("distance graph is disconnected")]
    DisconnectedGraph,

    /// The blossom matcher could not cover every odd-degree vertex. Cannot
    /// happen for a complete graph over an even-sized vertex set.
    #[error("no perfect matching covers the odd-degree vertex set")]
    ImperfectMatching,

    /// Malformed instance text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, SolverError>;
