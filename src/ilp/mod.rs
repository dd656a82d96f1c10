//! 0/1 linear programming support for the LP-backed invariants.
//!
//! Split in two layers, so formulations stay testable without a solver:
//!
//! - [`model`]: the solver-independent [`BinaryProgram`] description,
//! - [`solve`]: the `good_lp` solving layer (needs an `ilp-*` feature).

pub mod model;
#[cfg(feature = "ilp-solver")]
pub mod solve;

pub use model::{BinaryProgram, Comparison, LinearConstraint, ObjectiveSense};
#[cfg(feature = "ilp-solver")]
pub use solve::{IlpSolver, SolverConfig};
