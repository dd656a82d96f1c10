//! Degree-sequence invariants: index-threshold bounds and the
//! Havel–Hakimi residue.
//!
//! Everything here is a sort plus a linear scan; the threshold tests are
//! done in integer arithmetic (the 1/k factor of sub-k-domination is
//! cleared by multiplying through by k).

use crate::error::{InvariantError, Result};
use crate::graph::SimpleGraph;

fn descending_degrees(graph: &SimpleGraph) -> Vec<usize> {
    let mut degrees = graph.degree_sequence();
    degrees.sort_unstable_by(|a, b| b.cmp(a));
    degrees
}

/// Returns the sub-k-domination number: the smallest t with
/// t + (1/k) Σ_{i=1..t} d_i >= n over the nonincreasing degree sequence.
///
/// # Errors
///
/// [`InvariantError::BadParameter`] if `k` is 0.
///
/// # Example
///
/// ```
/// use graphinv::invariants::sub_k_domination_number;
/// use graphinv::SimpleGraph;
///
/// assert_eq!(sub_k_domination_number(&SimpleGraph::cycle(4), 1).unwrap(), 2);
/// ```
pub fn sub_k_domination_number(graph: &SimpleGraph, k: usize) -> Result<usize> {
    if k == 0 {
        return Err(InvariantError::BadParameter(
            "sub-k-domination needs k >= 1".into(),
        ));
    }
    let degrees = descending_degrees(graph);
    let n = degrees.len();
    let mut prefix = 0;
    for t in 0..=n {
        if t > 0 {
            prefix += degrees[t - 1];
        }
        // t + prefix/k >= n, cleared of the division
        if k * t + prefix >= k * n {
            return Ok(t);
        }
    }
    // t = n always satisfies the threshold
    Ok(n)
}

/// Returns the Slater number sl(G), a lower bound on the domination
/// number: sub-k-domination with k = 1.
///
/// # Example
///
/// ```
/// use graphinv::invariants::slater;
/// use graphinv::SimpleGraph;
///
/// assert_eq!(slater(&SimpleGraph::path(5)).unwrap(), 2);
/// assert_eq!(slater(&SimpleGraph::complete(5)).unwrap(), 1);
/// ```
pub fn slater(graph: &SimpleGraph) -> Result<usize> {
    sub_k_domination_number(graph, 1)
}

/// Returns the sub-total-domination number: the smallest t with
/// Σ_{i=1..t} d_i >= n over the nonincreasing degree sequence.
///
/// # Errors
///
/// [`InvariantError::Infeasible`] if the whole degree sum stays below n
/// (2m < n), so no prefix can reach the threshold.
pub fn sub_total_domination_number(graph: &SimpleGraph) -> Result<usize> {
    let degrees = descending_degrees(graph);
    let n = degrees.len();
    let mut prefix = 0;
    for t in 0..=n {
        if t > 0 {
            prefix += degrees[t - 1];
        }
        if prefix >= n {
            return Ok(t);
        }
    }
    Err(InvariantError::Infeasible(
        "the degree sum never reaches the graph order".into(),
    ))
}

/// Returns the annihilation number: the largest t such that the t
/// smallest degrees sum to at most m.
///
/// # Example
///
/// ```
/// use graphinv::invariants::annihilation_number;
/// use graphinv::SimpleGraph;
///
/// assert_eq!(annihilation_number(&SimpleGraph::cycle(6)), 3);
/// assert_eq!(annihilation_number(&SimpleGraph::path(5)), 3);
/// ```
pub fn annihilation_number(graph: &SimpleGraph) -> usize {
    let mut degrees = graph.degree_sequence();
    degrees.sort_unstable();
    let m = graph.size();
    let mut prefix = 0;
    let mut best = 0;
    for (i, &d) in degrees.iter().enumerate() {
        prefix += d;
        if prefix > m {
            break;
        }
        best = i + 1;
    }
    best
}

/// Returns the residue: the number of zeros left when the Havel–Hakimi
/// process finishes.
///
/// Each step removes the largest degree d and decrements the next d
/// entries; the sequence stays graphical throughout, so the decrements
/// never underflow.
///
/// # Example
///
/// ```
/// use graphinv::invariants::residue;
/// use graphinv::SimpleGraph;
///
/// assert_eq!(residue(&SimpleGraph::path(4)), 2);
/// assert_eq!(residue(&SimpleGraph::complete(4)), 1);
/// ```
pub fn residue(graph: &SimpleGraph) -> usize {
    let mut degrees = descending_degrees(graph);
    while degrees.first().is_some_and(|&d| d > 0) {
        let max_degree = degrees.remove(0);
        debug_assert!(max_degree <= degrees.len());
        for d in degrees.iter_mut().take(max_degree) {
            *d -= 1;
        }
        degrees.sort_unstable_by(|a, b| b.cmp(a));
    }
    degrees.len()
}

/// Returns the harmonic index H(G) = Σ_{uv ∈ E} 2 / (d(u) + d(v)).
///
/// Isolated vertices contribute nothing (the sum runs over edges only).
pub fn harmonic_index(graph: &SimpleGraph) -> f64 {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| 2.0 / (graph.degree(u) + graph.degree(v)) as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_k_domination() {
        let cycle = SimpleGraph::cycle(4);
        assert_eq!(sub_k_domination_number(&cycle, 1).unwrap(), 2);
        assert_eq!(sub_k_domination_number(&cycle, 2).unwrap(), 2);
        assert!(matches!(
            sub_k_domination_number(&cycle, 0),
            Err(InvariantError::BadParameter(_))
        ));
    }

    #[test]
    fn test_slater() {
        assert_eq!(slater(&SimpleGraph::path(4)).unwrap(), 2);
        assert_eq!(slater(&SimpleGraph::path(5)).unwrap(), 2);
        assert_eq!(slater(&SimpleGraph::complete(4)).unwrap(), 1);
        assert_eq!(slater(&SimpleGraph::complete(5)).unwrap(), 1);
        assert_eq!(slater(&SimpleGraph::star(5)).unwrap(), 1);
    }

    #[test]
    fn test_sub_total_domination() {
        assert_eq!(sub_total_domination_number(&SimpleGraph::cycle(6)).unwrap(), 3);
        assert_eq!(sub_total_domination_number(&SimpleGraph::path(4)).unwrap(), 2);
        assert_eq!(
            sub_total_domination_number(&SimpleGraph::complete(5)).unwrap(),
            2
        );
        // edgeless: the degree sum never reaches n
        assert!(matches!(
            sub_total_domination_number(&SimpleGraph::empty(3)),
            Err(InvariantError::Infeasible(_))
        ));
    }

    #[test]
    fn test_annihilation_number() {
        assert_eq!(annihilation_number(&SimpleGraph::cycle(6)), 3);
        assert_eq!(annihilation_number(&SimpleGraph::cycle(4)), 2);
        assert_eq!(annihilation_number(&SimpleGraph::path(4)), 2);
        assert_eq!(annihilation_number(&SimpleGraph::path(5)), 3);
        assert_eq!(annihilation_number(&SimpleGraph::complete(5)), 2);
        // with no edges every prefix sums to 0 <= 0
        assert_eq!(annihilation_number(&SimpleGraph::empty(3)), 3);
    }

    #[test]
    fn test_residue() {
        assert_eq!(residue(&SimpleGraph::path(4)), 2);
        assert_eq!(residue(&SimpleGraph::complete(4)), 1);
        assert_eq!(residue(&SimpleGraph::cycle(5)), 2);
        // already all-zero sequence
        assert_eq!(residue(&SimpleGraph::empty(4)), 4);
    }

    #[test]
    fn test_residue_bounds_independence() {
        // residue is a lower bound on the independence number; on the
        // star the independent leaves keep it at n - 1
        assert_eq!(residue(&SimpleGraph::star(5)), 4);
    }

    #[test]
    fn test_harmonic_index() {
        let path = SimpleGraph::path(4);
        assert!((harmonic_index(&path) - 11.0 / 6.0).abs() < 1e-12);
        let triangle = SimpleGraph::complete(3);
        assert!((harmonic_index(&triangle) - 1.5).abs() < 1e-12);
        assert_eq!(harmonic_index(&SimpleGraph::empty(3)), 0.0);
    }

    #[test]
    fn test_degree_sum_equals_twice_size() {
        let graph = SimpleGraph::grid(3, 3);
        let total: usize = graph.degree_sequence().iter().sum();
        assert_eq!(total, 2 * graph.size());
    }
}
