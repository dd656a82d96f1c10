//! Monotone color-change closure engine.
//!
//! All forcing-style invariants in this crate are built on one closure
//! operator: starting from a seed set of colored vertices, a
//! [`ForcingRule`] is applied in batched rounds until nothing new is
//! colored. The rules are monotone, so the fixed point is unique and
//! independent of the order in which simultaneous forces are resolved;
//! each non-idempotent round strictly grows the colored set, so at most
//! `n` rounds run.
//!
//! [`ClosureEngine`] precomputes one neighborhood bitset per vertex and
//! reuses its scratch bitsets across rounds, so testing many seeds on the
//! same graph (as the brute-force search does) never re-derives the
//! adjacency structure.

use crate::error::{InvariantError, Result};
use crate::graph::SimpleGraph;
use bitvec::prelude::*;

/// A color-change rule for the closure operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcingRule {
    /// A colored vertex with between 1 and `k` uncolored neighbors
    /// colors all of them.
    KForcing {
        /// Maximum number of uncolored neighbors a vertex may force at
        /// once. Must be at least 1.
        k: usize,
    },
    /// Positive-semidefinite rule: a colored vertex with exactly one
    /// uncolored neighbor inside some connected component of the
    /// uncolored subgraph colors that neighbor.
    PositiveSemidefinite,
    /// Power domination: the seed is first saturated with its closed
    /// neighborhood, then `KForcing` with the same `k` runs to its fixed
    /// point.
    PowerDomination {
        /// Forcing parameter of the second phase. Must be at least 1.
        k: usize,
    },
}

impl ForcingRule {
    /// The classic zero forcing rule (`KForcing` with k = 1).
    pub fn zero_forcing() -> Self {
        ForcingRule::KForcing { k: 1 }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            ForcingRule::KForcing { k: 0 } | ForcingRule::PowerDomination { k: 0 } => Err(
                InvariantError::BadParameter("forcing parameter k must be at least 1".into()),
            ),
            _ => Ok(()),
        }
    }
}

/// Closure evaluator for one graph.
///
/// # Example
///
/// ```
/// use bitvec::prelude::*;
/// use graphinv::{ClosureEngine, ForcingRule, SimpleGraph};
///
/// let graph = SimpleGraph::path(4);
/// let mut engine = ClosureEngine::new(&graph);
/// let seed = bitvec![1, 0, 0, 0];
/// // One endpoint forces the whole path.
/// assert!(engine.is_forcing_set(&seed, &ForcingRule::zero_forcing()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ClosureEngine {
    order: usize,
    neighbors: Vec<BitVec>,
    // scratch reused across rounds and across calls
    white: BitVec,
    forced: BitVec,
    scratch: BitVec,
    component: BitVec,
    seen: BitVec,
    stack: Vec<usize>,
    colored_buf: BitVec,
}

impl ClosureEngine {
    /// Precomputes the neighborhood bitsets of `graph`.
    pub fn new(graph: &SimpleGraph) -> Self {
        let n = graph.order();
        let mut neighbors = vec![bitvec![0; n]; n];
        for (u, v) in graph.edges() {
            neighbors[u].set(v, true);
            neighbors[v].set(u, true);
        }
        Self {
            order: n,
            neighbors,
            white: bitvec![0; n],
            forced: bitvec![0; n],
            scratch: bitvec![0; n],
            component: bitvec![0; n],
            seen: bitvec![0; n],
            stack: Vec::new(),
            colored_buf: bitvec![0; n],
        }
    }

    /// Number of vertices of the underlying graph.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the fixed point of `rule` reached from `seed`.
    ///
    /// # Errors
    ///
    /// [`InvariantError::BadParameter`] if the rule's parameter is 0.
    ///
    /// # Panics
    ///
    /// Panics if `seed.len()` differs from the graph order.
    pub fn derived_set(&mut self, seed: &BitSlice, rule: &ForcingRule) -> Result<BitVec> {
        rule.validate()?;
        assert_eq!(seed.len(), self.order, "seed length must equal the graph order");
        let mut colored = seed.to_bitvec();
        self.run(&mut colored, rule);
        Ok(colored)
    }

    /// Checks whether `seed` forces the entire vertex set under `rule`.
    pub fn is_forcing_set(&mut self, seed: &BitSlice, rule: &ForcingRule) -> Result<bool> {
        Ok(self.derived_set(seed, rule)?.count_ones() == self.order)
    }

    /// Allocation-free forcing test for a `u64` seed mask. The rule must
    /// already be validated.
    pub(crate) fn mask_forces_all(&mut self, mask: u64, rule: &ForcingRule) -> bool {
        let mut colored = std::mem::take(&mut self.colored_buf);
        colored.fill(false);
        let mut m = mask;
        while m != 0 {
            let v = m.trailing_zeros() as usize;
            colored.set(v, true);
            m &= m - 1;
        }
        self.run(&mut colored, rule);
        let covers = colored.count_ones() == self.order;
        self.colored_buf = colored;
        covers
    }

    fn run(&mut self, colored: &mut BitVec, rule: &ForcingRule) {
        match *rule {
            ForcingRule::KForcing { k } => self.k_forcing_rounds(colored, k),
            ForcingRule::PositiveSemidefinite => self.psd_rounds(colored),
            ForcingRule::PowerDomination { k } => {
                self.saturate_closed_neighborhood(colored);
                self.k_forcing_rounds(colored, k);
            }
        }
    }

    /// Replaces the colored set by its closed neighborhood.
    fn saturate_closed_neighborhood(&mut self, colored: &mut BitVec) {
        let Self {
            neighbors, forced, ..
        } = self;
        forced.fill(false);
        for v in colored.iter_ones() {
            *forced |= neighbors[v].as_bitslice();
        }
        *colored |= forced.as_bitslice();
    }

    /// Rule R1: every colored vertex with 1..=k white neighbors forces
    /// all of them. Whole rounds are batched; order within a round does
    /// not affect the fixed point.
    fn k_forcing_rounds(&mut self, colored: &mut BitVec, k: usize) {
        let Self {
            neighbors,
            white,
            forced,
            scratch,
            ..
        } = self;
        white.clear();
        white.extend(colored.iter().by_vals().map(|b| !b));
        loop {
            forced.fill(false);
            for v in colored.iter_ones() {
                scratch.copy_from_bitslice(neighbors[v].as_bitslice());
                *scratch &= white.as_bitslice();
                let white_neighbors = scratch.count_ones();
                if (1..=k).contains(&white_neighbors) {
                    *forced |= scratch.as_bitslice();
                }
            }
            if forced.not_any() {
                return;
            }
            for v in forced.iter_ones() {
                colored.set(v, true);
                white.set(v, false);
            }
        }
    }

    /// Rule R2: per connected component of the white subgraph, a colored
    /// vertex with exactly one white neighbor in that component forces it.
    fn psd_rounds(&mut self, colored: &mut BitVec) {
        let Self {
            neighbors,
            white,
            forced,
            scratch,
            component,
            seen,
            stack,
            ..
        } = self;
        white.clear();
        white.extend(colored.iter().by_vals().map(|b| !b));
        loop {
            forced.fill(false);
            seen.fill(false);
            for start in white.iter_ones() {
                if seen[start] {
                    continue;
                }
                // flood-fill one white component
                component.fill(false);
                component.set(start, true);
                seen.set(start, true);
                stack.push(start);
                while let Some(v) = stack.pop() {
                    for u in neighbors[v].iter_ones() {
                        if white[u] && !component[u] {
                            component.set(u, true);
                            seen.set(u, true);
                            stack.push(u);
                        }
                    }
                }
                for v in colored.iter_ones() {
                    scratch.copy_from_bitslice(neighbors[v].as_bitslice());
                    *scratch &= component.as_bitslice();
                    if scratch.count_ones() == 1 {
                        *forced |= scratch.as_bitslice();
                    }
                }
            }
            if forced.not_any() {
                return;
            }
            for v in forced.iter_ones() {
                colored.set(v, true);
                white.set(v, false);
            }
        }
    }
}

/// Computes the closure of `seed` under `rule` and returns it as a
/// sorted vertex list.
///
/// One-shot convenience over [`ClosureEngine`]; build the engine directly
/// when evaluating many seeds on the same graph.
pub fn close(graph: &SimpleGraph, seed: &[usize], rule: &ForcingRule) -> Result<Vec<usize>> {
    let mut engine = ClosureEngine::new(graph);
    let bits = seed_bits(graph.order(), seed)?;
    Ok(engine.derived_set(&bits, rule)?.iter_ones().collect())
}

/// Checks whether `seed` is a forcing set of `graph` under `rule`.
pub fn is_forcing_set(graph: &SimpleGraph, seed: &[usize], rule: &ForcingRule) -> Result<bool> {
    let mut engine = ClosureEngine::new(graph);
    let bits = seed_bits(graph.order(), seed)?;
    engine.is_forcing_set(&bits, rule)
}

fn seed_bits(order: usize, seed: &[usize]) -> Result<BitVec> {
    let mut bits = bitvec![0; order];
    for &v in seed {
        if v >= order {
            return Err(InvariantError::BadParameter(format!(
                "seed vertex {v} is not a vertex of the graph"
            )));
        }
        bits.set(v, true);
    }
    Ok(bits)
}

#[cfg(test)]
#[path = "tests_unit/closure.rs"]
mod tests;
