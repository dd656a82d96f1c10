//! Error types for the graphinv library.

use thiserror::Error;

/// Errors that can occur while computing a graph invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantError {
    /// A parameter is outside its valid range (e.g. `k = 0` where a
    /// positive integer is required).
    #[error("bad parameter: {0}")]
    BadParameter(String),

    /// The invariant requires a connected graph.
    #[error("graph is not connected")]
    NotConnected,

    /// No witness of the requested kind exists for this graph.
    #[error("infeasible: {0}")]
    Infeasible(String),

    /// The external solver finished without an optimal solution.
    #[error("solver returned a non-optimal status: {0}")]
    NoOptimal(String),

    /// The input is not a finite simple undirected graph.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// The graph exceeds the size limit of an exhaustive-search routine.
    #[error("graph too large for exhaustive search: {order} vertices (limit {limit})")]
    TooLarge { order: usize, limit: usize },
}

/// Result type alias for graphinv operations.
pub type Result<T> = std::result::Result<T, InvariantError>;
