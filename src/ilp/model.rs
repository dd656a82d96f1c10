//! Solver-independent 0/1 linear program model.
//!
//! Every LP-backed invariant in this crate builds a [`BinaryProgram`]
//! first and hands it to the solving layer afterwards. The model can
//! evaluate and feasibility-check candidate assignments on its own,
//! which is what the unit tests exercise without touching a solver.

use serde::{Deserialize, Serialize};

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// Less than or equal (<=).
    Le,
    /// Greater than or equal (>=).
    Ge,
    /// Equal (==).
    Eq,
}

impl Comparison {
    /// Check if the comparison holds between lhs and rhs.
    pub fn holds(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::Le => lhs <= rhs,
            Comparison::Ge => lhs >= rhs,
            Comparison::Eq => (lhs - rhs).abs() < 1e-9,
        }
    }
}

/// A linear constraint: sum of (coefficient * variable) {<=, >=, ==} rhs.
///
/// Stored sparsely; only non-zero coefficients appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    /// Sparse representation: (var_index, coefficient) pairs.
    pub terms: Vec<(usize, f64)>,
    /// Comparison operator.
    pub cmp: Comparison,
    /// Right-hand side constant.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Create a new linear constraint.
    pub fn new(terms: Vec<(usize, f64)>, cmp: Comparison, rhs: f64) -> Self {
        Self { terms, cmp, rhs }
    }

    /// Create a less-than-or-equal constraint.
    pub fn le(terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self::new(terms, Comparison::Le, rhs)
    }

    /// Create a greater-than-or-equal constraint.
    pub fn ge(terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self::new(terms, Comparison::Ge, rhs)
    }

    /// Create an equality constraint.
    pub fn eq(terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self::new(terms, Comparison::Eq, rhs)
    }

    /// Evaluate the left-hand side for a 0/1 assignment.
    pub fn evaluate_lhs(&self, assignment: &[u8]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * f64::from(assignment.get(var).copied().unwrap_or(0)))
            .sum()
    }

    /// Check whether a 0/1 assignment satisfies the constraint.
    pub fn is_satisfied(&self, assignment: &[u8]) -> bool {
        self.cmp.holds(self.evaluate_lhs(assignment), self.rhs)
    }
}

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveSense {
    /// Maximize the objective function.
    Maximize,
    /// Minimize the objective function.
    Minimize,
}

/// A 0/1 integer linear program.
///
/// # Example
///
/// ```
/// use graphinv::ilp::{BinaryProgram, LinearConstraint, ObjectiveSense};
///
/// // maximize x0 + x1 subject to x0 + x1 <= 1
/// let program = BinaryProgram::new(
///     2,
///     vec![LinearConstraint::le(vec![(0, 1.0), (1, 1.0)], 1.0)],
///     vec![(0, 1.0), (1, 1.0)],
///     ObjectiveSense::Maximize,
/// );
/// assert!(program.is_feasible(&[1, 0]));
/// assert!(!program.is_feasible(&[1, 1]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryProgram {
    /// Number of 0/1 variables.
    pub num_vars: usize,
    /// Linear constraints.
    pub constraints: Vec<LinearConstraint>,
    /// Sparse objective coefficients: (var_index, coefficient).
    pub objective: Vec<(usize, f64)>,
    /// Optimization direction.
    pub sense: ObjectiveSense,
}

impl BinaryProgram {
    /// Create a new binary program.
    pub fn new(
        num_vars: usize,
        constraints: Vec<LinearConstraint>,
        objective: Vec<(usize, f64)>,
        sense: ObjectiveSense,
    ) -> Self {
        Self {
            num_vars,
            constraints,
            objective,
            sense,
        }
    }

    /// Evaluate the objective for a 0/1 assignment.
    pub fn evaluate_objective(&self, assignment: &[u8]) -> f64 {
        self.objective
            .iter()
            .map(|&(var, coef)| coef * f64::from(assignment.get(var).copied().unwrap_or(0)))
            .sum()
    }

    /// Check whether a 0/1 assignment satisfies every constraint.
    pub fn is_feasible(&self, assignment: &[u8]) -> bool {
        assignment.len() == self.num_vars
            && assignment.iter().all(|&x| x <= 1)
            && self.constraints.iter().all(|c| c.is_satisfied(assignment))
    }
}

#[cfg(test)]
#[path = "../tests_unit/ilp/model.rs"]
mod tests;
