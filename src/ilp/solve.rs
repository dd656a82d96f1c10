//! Solving layer over `good_lp`.
//!
//! One batched solve per invariant call; no warm starts. A proved-infeasible
//! program surfaces as [`InvariantError::Infeasible`], every other
//! non-optimal outcome as [`InvariantError::NoOptimal`].

use crate::error::{InvariantError, Result};
use crate::ilp::model::{BinaryProgram, Comparison, ObjectiveSense};
use good_lp::{default_solver, variable, Expression, ProblemVariables, Solution, SolverModel, Variable};
use std::sync::atomic::{AtomicBool, Ordering};

static DEFAULT_VERBOSE: AtomicBool = AtomicBool::new(false);

/// Process-wide solver configuration.
///
/// Solver output is suppressed unless `verbose` is set, either here for
/// the whole process or per call via [`IlpSolver::with_config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Let the backend print its log.
    pub verbose: bool,
}

impl SolverConfig {
    /// Install this configuration as the process-wide default.
    pub fn install(self) {
        DEFAULT_VERBOSE.store(self.verbose, Ordering::Relaxed);
    }

    /// The currently installed process-wide configuration.
    pub fn current() -> Self {
        Self {
            verbose: DEFAULT_VERBOSE.load(Ordering::Relaxed),
        }
    }
}

/// Solves [`BinaryProgram`]s through the `good_lp` backend selected by the
/// crate's `ilp-*` feature.
///
/// # Example
///
/// ```no_run
/// use graphinv::ilp::{BinaryProgram, IlpSolver, LinearConstraint, ObjectiveSense};
///
/// let program = BinaryProgram::new(
///     2,
///     vec![LinearConstraint::le(vec![(0, 1.0), (1, 1.0)], 1.0)],
///     vec![(0, 1.0), (1, 2.0)],
///     ObjectiveSense::Maximize,
/// );
/// let assignment = IlpSolver::new().solve(&program).unwrap();
/// assert_eq!(assignment, vec![0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IlpSolver {
    config: SolverConfig,
}

impl IlpSolver {
    /// Create a solver using the process-wide configuration.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::current(),
        }
    }

    /// Create a solver with an explicit per-call configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration this solver runs with.
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Solve the program to optimality and return the 0/1 assignment.
    ///
    /// # Errors
    ///
    /// [`InvariantError::Infeasible`] if the program is proved infeasible,
    /// [`InvariantError::NoOptimal`] on any other non-optimal solver
    /// outcome.
    pub fn solve(&self, program: &BinaryProgram) -> Result<Vec<u8>> {
        if program.num_vars == 0 {
            return Ok(vec![]);
        }

        let mut vars_builder = ProblemVariables::new();
        let vars: Vec<Variable> = (0..program.num_vars)
            .map(|_| vars_builder.add(variable().binary()))
            .collect();

        let objective: Expression = program
            .objective
            .iter()
            .map(|&(var_idx, coef)| coef * vars[var_idx])
            .sum();

        let unsolved = match program.sense {
            ObjectiveSense::Maximize => vars_builder.maximise(&objective),
            ObjectiveSense::Minimize => vars_builder.minimise(&objective),
        };

        let mut model = unsolved.using(default_solver);

        // CBC chatters by default; HiGHS stays quiet unless asked.
        #[cfg(feature = "ilp-coin-cbc")]
        model.set_parameter("logLevel", if self.config.verbose { "1" } else { "0" });

        for constraint in &program.constraints {
            let lhs: Expression = constraint
                .terms
                .iter()
                .map(|&(var_idx, coef)| coef * vars[var_idx])
                .sum();
            let good_lp_constraint = match constraint.cmp {
                Comparison::Le => lhs.leq(constraint.rhs),
                Comparison::Ge => lhs.geq(constraint.rhs),
                Comparison::Eq => lhs.eq(constraint.rhs),
            };
            model = model.with(good_lp_constraint);
        }

        match model.solve() {
            Ok(solution) => Ok(vars
                .iter()
                .map(|v| u8::from(solution.value(*v) > 0.5))
                .collect()),
            Err(good_lp::ResolutionError::Infeasible) => Err(InvariantError::Infeasible(
                "the program has no feasible assignment".into(),
            )),
            Err(other) => Err(InvariantError::NoOptimal(other.to_string())),
        }
    }
}
