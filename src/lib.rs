//! # graphinv
//!
//! Exact combinatorial invariants of finite simple undirected graphs.
//!
//! Three algorithmic families cover the invariant surface:
//!
//! - **Closure / forcing invariants**: zero forcing, k-forcing, total and
//!   connected variants, positive-semidefinite forcing, and power
//!   domination. A monotone color-change rule is iterated to its fixed
//!   point, and a brute-force search finds the smallest seed whose
//!   closure is the whole vertex set.
//! - **ILP-backed invariants**: independence, clique, proper coloring,
//!   matching, vertex cover, and the domination family (ordinary, total,
//!   independent, restrained, Roman, double Roman, rainbow). Each is a
//!   0/1 linear program handed to an external solver through `good_lp`.
//! - **Degree-sequence invariants**: Slater number, sub-k-domination,
//!   annihilation number, Havel–Hakimi residue, harmonic index.
//!
//! All routines return exact optima or witnesses; errors (bad parameters,
//! disconnected input where connectivity is required, infeasible
//! instances, solver failures) surface as [`InvariantError`].
//!
//! ## Example
//!
//! ```
//! use graphinv::prelude::*;
//!
//! let graph = SimpleGraph::path(4);
//! // one endpoint forces the whole path
//! assert_eq!(zero_forcing_number(&graph).unwrap(), 1);
//! assert_eq!(slater(&graph).unwrap(), 2);
//! assert_eq!(residue(&graph), 2);
//! ```
//!
//! The ILP-backed invariants need one of the `ilp-*` backend features;
//! the default enables HiGHS.

pub mod closure;
pub mod error;
pub mod graph;
pub mod ilp;
pub mod invariants;
pub mod search;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::closure::{close, is_forcing_set, ClosureEngine, ForcingRule};
    pub use crate::error::{InvariantError, Result};
    pub use crate::graph::{properties, small_graphs, SimpleGraph};
    #[cfg(feature = "ilp-solver")]
    pub use crate::ilp::{IlpSolver, SolverConfig};
    pub use crate::invariants::*;
    pub use crate::search::{minimum_vertex_set, KSubsets};
}

// Re-export commonly used items at crate root
pub use closure::{close, is_forcing_set, ClosureEngine, ForcingRule};
pub use error::{InvariantError, Result};
pub use graph::SimpleGraph;
