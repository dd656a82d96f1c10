//! Forcing-type invariants: zero forcing, k-forcing, total and connected
//! variants, positive-semidefinite forcing, and power domination.
//!
//! All of these wrap one brute-force search: subsets are tried in
//! nondecreasing size, and each candidate seed is closed under the
//! appropriate [`ForcingRule`]. The closure engine is built once per
//! invariant call and reused across every candidate.

use crate::closure::{self, ClosureEngine, ForcingRule};
use crate::error::{InvariantError, Result};
use crate::graph::SimpleGraph;
use crate::search::{mask_connected, minimum_vertex_set, neighbor_masks, MAX_BRUTE_ORDER};

/// Search for a smallest forcing seed, with an extra per-candidate filter.
fn smallest_forcing_set<F>(
    graph: &SimpleGraph,
    rule: ForcingRule,
    lower_bound: usize,
    mut extra: F,
) -> Result<Vec<usize>>
where
    F: FnMut(u64) -> bool,
{
    rule.validate()?;
    let mut engine = ClosureEngine::new(graph);
    minimum_vertex_set(graph, lower_bound, |mask| {
        extra(mask) && engine.mask_forces_all(mask, &rule)
    })
}

/// Checks whether `seed` is a zero forcing set of `graph`.
///
/// # Example
///
/// ```
/// use graphinv::invariants::is_zero_forcing_set;
/// use graphinv::SimpleGraph;
///
/// let graph = SimpleGraph::path(4);
/// assert!(is_zero_forcing_set(&graph, &[0]).unwrap());
/// assert!(!is_zero_forcing_set(&graph, &[1]).unwrap());
/// ```
pub fn is_zero_forcing_set(graph: &SimpleGraph, seed: &[usize]) -> Result<bool> {
    closure::is_forcing_set(graph, seed, &ForcingRule::zero_forcing())
}

/// Returns a smallest k-forcing set.
///
/// The search starts at δ(G) for k = 1 (zero forcing is bounded below by
/// the minimum degree) and at 1 otherwise.
pub fn minimum_k_forcing_set(graph: &SimpleGraph, k: usize) -> Result<Vec<usize>> {
    let lower = if k == 1 {
        graph.min_degree().unwrap_or(0)
    } else {
        usize::from(graph.order() > 0)
    };
    smallest_forcing_set(graph, ForcingRule::KForcing { k }, lower, |_| true)
}

/// Returns the k-forcing number F_k(G).
pub fn k_forcing_number(graph: &SimpleGraph, k: usize) -> Result<usize> {
    Ok(minimum_k_forcing_set(graph, k)?.len())
}

/// Returns a smallest zero forcing set.
pub fn minimum_zero_forcing_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    minimum_k_forcing_set(graph, 1)
}

/// Returns the zero forcing number Z(G).
///
/// # Example
///
/// ```
/// use graphinv::invariants::zero_forcing_number;
/// use graphinv::SimpleGraph;
///
/// assert_eq!(zero_forcing_number(&SimpleGraph::path(4)).unwrap(), 1);
/// assert_eq!(zero_forcing_number(&SimpleGraph::cycle(4)).unwrap(), 2);
/// ```
pub fn zero_forcing_number(graph: &SimpleGraph) -> Result<usize> {
    k_forcing_number(graph, 1)
}

/// Returns the 2-forcing number F_2(G).
pub fn two_forcing_number(graph: &SimpleGraph) -> Result<usize> {
    k_forcing_number(graph, 2)
}

/// Returns a smallest total zero forcing set: a zero forcing set whose
/// induced subgraph has no isolated vertex.
///
/// # Errors
///
/// [`InvariantError::Infeasible`] when no such set exists (e.g. the graph
/// has an isolated vertex).
pub fn minimum_total_zero_forcing_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let n = graph.order();
    if n > MAX_BRUTE_ORDER {
        return Err(InvariantError::TooLarge {
            order: n,
            limit: MAX_BRUTE_ORDER,
        });
    }
    let open = neighbor_masks(graph);
    smallest_forcing_set(graph, ForcingRule::zero_forcing(), 2, |mask| {
        let mut m = mask;
        while m != 0 {
            let v = m.trailing_zeros() as usize;
            if open[v] & mask == 0 {
                return false;
            }
            m &= m - 1;
        }
        true
    })
}

/// Returns the total zero forcing number Z_t(G).
pub fn total_zero_forcing_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(minimum_total_zero_forcing_set(graph)?.len())
}

/// Returns a smallest connected k-forcing set: a k-forcing set whose
/// induced subgraph is connected.
///
/// # Errors
///
/// [`InvariantError::NotConnected`] if `graph` itself is disconnected.
pub fn minimum_connected_k_forcing_set(graph: &SimpleGraph, k: usize) -> Result<Vec<usize>> {
    ForcingRule::KForcing { k }.validate()?;
    if !graph.is_connected() {
        return Err(InvariantError::NotConnected);
    }
    let n = graph.order();
    if n > MAX_BRUTE_ORDER {
        return Err(InvariantError::TooLarge {
            order: n,
            limit: MAX_BRUTE_ORDER,
        });
    }
    let open = neighbor_masks(graph);
    smallest_forcing_set(graph, ForcingRule::KForcing { k }, 1, |mask| {
        mask_connected(&open, mask)
    })
}

/// Returns the connected k-forcing number.
pub fn connected_k_forcing_number(graph: &SimpleGraph, k: usize) -> Result<usize> {
    Ok(minimum_connected_k_forcing_set(graph, k)?.len())
}

/// Returns a smallest connected zero forcing set.
pub fn minimum_connected_zero_forcing_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    minimum_connected_k_forcing_set(graph, 1)
}

/// Returns the connected zero forcing number.
pub fn connected_zero_forcing_number(graph: &SimpleGraph) -> Result<usize> {
    connected_k_forcing_number(graph, 1)
}

/// Returns a smallest positive-semidefinite zero forcing set.
pub fn minimum_psd_zero_forcing_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let lower = usize::from(graph.order() > 0);
    smallest_forcing_set(graph, ForcingRule::PositiveSemidefinite, lower, |_| true)
}

/// Returns the positive-semidefinite zero forcing number Z₊(G).
pub fn positive_semidefinite_zero_forcing_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(minimum_psd_zero_forcing_set(graph)?.len())
}

/// Checks whether `seed` is a k-power dominating set: its closed
/// neighborhood k-forces the whole graph.
pub fn is_k_power_dominating_set(graph: &SimpleGraph, seed: &[usize], k: usize) -> Result<bool> {
    closure::is_forcing_set(graph, seed, &ForcingRule::PowerDomination { k })
}

/// Returns a smallest k-power dominating set.
pub fn minimum_k_power_dominating_set(graph: &SimpleGraph, k: usize) -> Result<Vec<usize>> {
    let lower = usize::from(graph.order() > 0);
    smallest_forcing_set(graph, ForcingRule::PowerDomination { k }, lower, |_| true)
}

/// Returns the k-power domination number γ_P^k(G).
pub fn k_power_domination_number(graph: &SimpleGraph, k: usize) -> Result<usize> {
    Ok(minimum_k_power_dominating_set(graph, k)?.len())
}

/// Returns a smallest power dominating set.
pub fn minimum_power_dominating_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    minimum_k_power_dominating_set(graph, 1)
}

/// Returns the power domination number γ_P(G).
pub fn power_domination_number(graph: &SimpleGraph) -> Result<usize> {
    k_power_domination_number(graph, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::small_graphs;

    #[test]
    fn test_zero_forcing_number_small_graphs() {
        assert_eq!(zero_forcing_number(&SimpleGraph::path(4)).unwrap(), 1);
        assert_eq!(zero_forcing_number(&SimpleGraph::cycle(4)).unwrap(), 2);
        assert_eq!(zero_forcing_number(&SimpleGraph::complete(4)).unwrap(), 3);
        assert_eq!(zero_forcing_number(&SimpleGraph::star(5)).unwrap(), 3);
    }

    #[test]
    fn test_zero_forcing_witness_forces() {
        let graph = small_graphs::bull();
        let set = minimum_zero_forcing_set(&graph).unwrap();
        assert!(is_zero_forcing_set(&graph, &set).unwrap());
    }

    #[test]
    fn test_two_forcing_number() {
        assert_eq!(two_forcing_number(&SimpleGraph::path(4)).unwrap(), 1);
        assert_eq!(two_forcing_number(&SimpleGraph::cycle(4)).unwrap(), 1);
    }

    #[test]
    fn test_k_zero_rejected() {
        assert!(matches!(
            k_forcing_number(&SimpleGraph::path(3), 0),
            Err(InvariantError::BadParameter(_))
        ));
    }

    #[test]
    fn test_total_zero_forcing() {
        assert_eq!(total_zero_forcing_number(&SimpleGraph::path(4)).unwrap(), 2);
        assert_eq!(total_zero_forcing_number(&SimpleGraph::cycle(4)).unwrap(), 2);
        assert_eq!(total_zero_forcing_number(&SimpleGraph::star(5)).unwrap(), 4);
    }

    #[test]
    fn test_total_zero_forcing_isolated_vertex_infeasible() {
        let graph = SimpleGraph::new(3, vec![(0, 1)]);
        assert!(matches!(
            total_zero_forcing_number(&graph),
            Err(InvariantError::Infeasible(_))
        ));
    }

    #[test]
    fn test_connected_zero_forcing() {
        assert_eq!(
            connected_zero_forcing_number(&SimpleGraph::path(4)).unwrap(),
            1
        );
        assert_eq!(
            connected_zero_forcing_number(&SimpleGraph::cycle(4)).unwrap(),
            2
        );
    }

    #[test]
    fn test_connected_forcing_needs_connected_graph() {
        let graph = SimpleGraph::new(4, vec![(0, 1), (2, 3)]);
        assert!(matches!(
            connected_zero_forcing_number(&graph),
            Err(InvariantError::NotConnected)
        ));
    }

    #[test]
    fn test_psd_zero_forcing() {
        assert_eq!(
            positive_semidefinite_zero_forcing_number(&SimpleGraph::path(4)).unwrap(),
            1
        );
        assert_eq!(
            positive_semidefinite_zero_forcing_number(&SimpleGraph::cycle(4)).unwrap(),
            2
        );
        // one black vertex of K_n never has a unique white neighbor
        assert_eq!(
            positive_semidefinite_zero_forcing_number(&SimpleGraph::complete(4)).unwrap(),
            3
        );
    }

    #[test]
    fn test_power_domination() {
        assert_eq!(power_domination_number(&SimpleGraph::path(4)).unwrap(), 1);
        assert_eq!(power_domination_number(&SimpleGraph::star(5)).unwrap(), 1);
        assert_eq!(
            power_domination_number(&small_graphs::petersen()).unwrap(),
            2
        );
    }

    #[test]
    fn test_k_power_domination() {
        let path = SimpleGraph::path(5);
        assert!(is_k_power_dominating_set(&path, &[0], 2).unwrap());
        assert_eq!(k_power_domination_number(&path, 2).unwrap(), 1);
    }

    #[test]
    fn test_null_graph() {
        let graph = SimpleGraph::empty(0);
        assert_eq!(zero_forcing_number(&graph).unwrap(), 0);
        assert_eq!(power_domination_number(&graph).unwrap(), 0);
    }
}
