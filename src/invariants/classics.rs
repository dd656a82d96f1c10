//! Classic set invariants: independence, clique, coloring, vertex cover,
//! matching, edge cover.
//!
//! Independence, coloring, and matching are solved through 0/1 programs;
//! clique and vertex cover are derived from independence (complement
//! identities); the edge cover delegates to petgraph's maximum matching
//! and extends it greedily.

use crate::error::{InvariantError, Result};
use crate::graph::SimpleGraph;
use crate::ilp::solve::IlpSolver;
use crate::ilp::{BinaryProgram, LinearConstraint, ObjectiveSense};
use petgraph::algo::maximum_matching as blossom_matching;
use std::collections::BTreeMap;

fn selected_vertices(assignment: &[u8]) -> Vec<usize> {
    assignment
        .iter()
        .enumerate()
        .filter(|&(_, &x)| x == 1)
        .map(|(v, _)| v)
        .collect()
}

fn normalized(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

/// The maximum-independent-set program: maximize Σ x_v subject to
/// x_u + x_v <= 1 for every edge.
fn independent_set_program(graph: &SimpleGraph) -> BinaryProgram {
    let n = graph.order();
    let constraints = graph
        .edges()
        .into_iter()
        .map(|(u, v)| LinearConstraint::le(vec![(u, 1.0), (v, 1.0)], 1.0))
        .collect();
    let objective = (0..n).map(|v| (v, 1.0)).collect();
    BinaryProgram::new(n, constraints, objective, ObjectiveSense::Maximize)
}

/// Returns a largest independent set of `graph`, as a sorted vertex list.
///
/// # Example
///
/// ```no_run
/// use graphinv::invariants::maximum_independent_set;
/// use graphinv::SimpleGraph;
///
/// let graph = SimpleGraph::path(4);
/// assert_eq!(maximum_independent_set(&graph).unwrap().len(), 2);
/// ```
pub fn maximum_independent_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let assignment = IlpSolver::new().solve(&independent_set_program(graph))?;
    Ok(selected_vertices(&assignment))
}

/// Returns the independence number α(G).
pub fn independence_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(maximum_independent_set(graph)?.len())
}

/// Returns a largest clique of `graph`: a maximum independent set of the
/// complement.
pub fn maximum_clique(graph: &SimpleGraph) -> Result<Vec<usize>> {
    maximum_independent_set(&graph.complement())
}

/// Returns the clique number ω(G) = α(Ḡ).
pub fn clique_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(maximum_clique(graph)?.len())
}

/// Returns a smallest vertex cover: the complement of a maximum
/// independent set.
pub fn minimum_vertex_cover(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let independent = maximum_independent_set(graph)?;
    let mut in_set = vec![false; graph.order()];
    for v in independent {
        in_set[v] = true;
    }
    Ok((0..graph.order()).filter(|&v| !in_set[v]).collect())
}

/// Returns the vertex cover number τ(G) = n − α(G).
pub fn vertex_cover_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(graph.order() - independence_number(graph)?)
}

/// The proper-coloring program over n candidate colors.
///
/// Variables: `c_i` (color i used, index i) and `y_{v,i}` (vertex v gets
/// color i, index `n + v*n + i`). Minimize Σ c_i subject to
/// (a) Σ_i y_{v,i} = 1, (b) y_{u,i} + y_{v,i} <= 1 per edge and color,
/// (c) y_{v,i} <= c_i.
fn coloring_program(graph: &SimpleGraph) -> BinaryProgram {
    let n = graph.order();
    let color_used = |i: usize| i;
    let assigned = |v: usize, i: usize| n + v * n + i;

    let mut constraints = Vec::new();
    for v in 0..n {
        let terms: Vec<(usize, f64)> = (0..n).map(|i| (assigned(v, i), 1.0)).collect();
        constraints.push(LinearConstraint::eq(terms, 1.0));
    }
    for (u, v) in graph.edges() {
        for i in 0..n {
            constraints.push(LinearConstraint::le(
                vec![(assigned(u, i), 1.0), (assigned(v, i), 1.0)],
                1.0,
            ));
        }
    }
    for v in 0..n {
        for i in 0..n {
            constraints.push(LinearConstraint::le(
                vec![(assigned(v, i), 1.0), (color_used(i), -1.0)],
                0.0,
            ));
        }
    }

    let objective = (0..n).map(|i| (color_used(i), 1.0)).collect();
    BinaryProgram::new(n + n * n, constraints, objective, ObjectiveSense::Minimize)
}

/// Returns an optimal proper coloring as a map from color index
/// (compacted to `0..χ`) to the vertices of that color class.
///
/// Color classes are pairwise disjoint and cover the vertex set.
pub fn optimal_proper_coloring(graph: &SimpleGraph) -> Result<BTreeMap<usize, Vec<usize>>> {
    let n = graph.order();
    if n == 0 {
        return Ok(BTreeMap::new());
    }
    let assignment = IlpSolver::new().solve(&coloring_program(graph))?;

    let mut classes: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for v in 0..n {
        for i in 0..n {
            if assignment[n + v * n + i] == 1 {
                classes.entry(i).or_default().push(v);
                break;
            }
        }
    }
    // compact the surviving color indices to 0..χ
    Ok(classes
        .into_values()
        .enumerate()
        .collect())
}

/// Returns the chromatic number χ(G).
///
/// # Example
///
/// ```no_run
/// use graphinv::invariants::chromatic_number;
/// use graphinv::SimpleGraph;
///
/// assert_eq!(chromatic_number(&SimpleGraph::complete(4)).unwrap(), 4);
/// assert_eq!(chromatic_number(&SimpleGraph::cycle(5)).unwrap(), 3);
/// ```
pub fn chromatic_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(optimal_proper_coloring(graph)?.len())
}

/// The maximum-matching program: one variable per edge, at most one
/// selected edge incident to each vertex.
fn matching_program(graph: &SimpleGraph) -> (BinaryProgram, Vec<(usize, usize)>) {
    let edges = graph.edges();
    let m = edges.len();
    let mut constraints = Vec::new();
    for v in 0..graph.order() {
        let incident: Vec<(usize, f64)> = edges
            .iter()
            .enumerate()
            .filter(|&(_, &(a, b))| a == v || b == v)
            .map(|(e, _)| (e, 1.0))
            .collect();
        if !incident.is_empty() {
            constraints.push(LinearConstraint::le(incident, 1.0));
        }
    }
    let objective = (0..m).map(|e| (e, 1.0)).collect();
    (
        BinaryProgram::new(m, constraints, objective, ObjectiveSense::Maximize),
        edges,
    )
}

/// Returns a maximum matching as a sorted list of edges.
pub fn maximum_matching(graph: &SimpleGraph) -> Result<Vec<(usize, usize)>> {
    let (program, edges) = matching_program(graph);
    let assignment = IlpSolver::new().solve(&program)?;
    let mut matched: Vec<(usize, usize)> = edges
        .into_iter()
        .zip(&assignment)
        .filter(|&(_, &x)| x == 1)
        .map(|(e, _)| e)
        .collect();
    matched.sort_unstable();
    Ok(matched)
}

/// Returns the matching number μ(G).
pub fn matching_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(maximum_matching(graph)?.len())
}

/// Returns a smallest edge cover as a sorted list of edges.
///
/// Computed the standard way: a maximum matching (petgraph's Gabow
/// implementation) extended with one incident edge per exposed vertex.
///
/// # Errors
///
/// [`InvariantError::Infeasible`] if the graph has an isolated vertex.
pub fn minimum_edge_cover(graph: &SimpleGraph) -> Result<Vec<(usize, usize)>> {
    let n = graph.order();
    let matching = blossom_matching(graph.as_petgraph());
    let mut cover: Vec<(usize, usize)> = Vec::new();
    let mut covered = vec![false; n];
    for (a, b) in matching.edges() {
        cover.push(normalized(a.index(), b.index()));
        covered[a.index()] = true;
        covered[b.index()] = true;
    }
    for v in 0..n {
        if covered[v] {
            continue;
        }
        let u = graph.neighbors(v).into_iter().min().ok_or_else(|| {
            InvariantError::Infeasible(format!("vertex {v} is isolated; no edge cover exists"))
        })?;
        cover.push(normalized(u, v));
        covered[v] = true;
        covered[u] = true;
    }
    cover.sort_unstable();
    Ok(cover)
}

/// Returns the edge cover number ρ(G).
pub fn edge_cover_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(minimum_edge_cover(graph)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::small_graphs;

    #[test]
    fn test_independent_set_program_structure() {
        let graph = SimpleGraph::complete(3);
        let program = independent_set_program(&graph);
        assert_eq!(program.num_vars, 3);
        assert_eq!(program.constraints.len(), 3);
        assert_eq!(program.sense, ObjectiveSense::Maximize);
        assert!(program.is_feasible(&[1, 0, 0]));
        assert!(!program.is_feasible(&[1, 1, 0]));
    }

    #[test]
    fn test_independence_number_small_graphs() {
        assert_eq!(independence_number(&SimpleGraph::path(4)).unwrap(), 2);
        assert_eq!(independence_number(&SimpleGraph::complete(4)).unwrap(), 1);
        assert_eq!(independence_number(&SimpleGraph::cycle(5)).unwrap(), 2);
        assert_eq!(independence_number(&SimpleGraph::star(5)).unwrap(), 4);
    }

    #[test]
    fn test_maximum_independent_set_is_independent() {
        let graph = small_graphs::petersen();
        let set = maximum_independent_set(&graph).unwrap();
        assert_eq!(set.len(), 4);
        for (i, &u) in set.iter().enumerate() {
            for &v in &set[i + 1..] {
                assert!(!graph.has_edge(u, v));
            }
        }
    }

    #[test]
    fn test_clique_number() {
        assert_eq!(clique_number(&SimpleGraph::complete(4)).unwrap(), 4);
        assert_eq!(clique_number(&SimpleGraph::path(4)).unwrap(), 2);
        assert_eq!(clique_number(&small_graphs::petersen()).unwrap(), 2);
    }

    #[test]
    fn test_maximum_clique_is_complete() {
        let graph = small_graphs::bull();
        let clique = maximum_clique(&graph).unwrap();
        assert_eq!(clique.len(), 3);
        for (i, &u) in clique.iter().enumerate() {
            for &v in &clique[i + 1..] {
                assert!(graph.has_edge(u, v));
            }
        }
    }

    #[test]
    fn test_vertex_cover_complements_independent_set() {
        let graph = SimpleGraph::path(4);
        assert_eq!(vertex_cover_number(&graph).unwrap(), 2);
        let cover = minimum_vertex_cover(&graph).unwrap();
        for (u, v) in graph.edges() {
            assert!(cover.contains(&u) || cover.contains(&v));
        }
    }

    #[test]
    fn test_coloring_program_structure() {
        let graph = SimpleGraph::path(3);
        let program = coloring_program(&graph);
        // n c-vars + n*n y-vars
        assert_eq!(program.num_vars, 3 + 9);
        // n assignment + m*n edge + n*n linking constraints
        assert_eq!(program.constraints.len(), 3 + 2 * 3 + 9);
        assert_eq!(program.sense, ObjectiveSense::Minimize);
    }

    #[test]
    fn test_chromatic_number_small_graphs() {
        assert_eq!(chromatic_number(&SimpleGraph::path(4)).unwrap(), 2);
        assert_eq!(chromatic_number(&SimpleGraph::complete(4)).unwrap(), 4);
        assert_eq!(chromatic_number(&SimpleGraph::cycle(4)).unwrap(), 2);
        assert_eq!(chromatic_number(&SimpleGraph::cycle(5)).unwrap(), 3);
    }

    #[test]
    fn test_coloring_is_proper_partition() {
        let graph = small_graphs::petersen();
        let coloring = optimal_proper_coloring(&graph).unwrap();
        assert_eq!(coloring.len(), 3);
        let mut seen = vec![0usize; graph.order()];
        for class in coloring.values() {
            for (i, &u) in class.iter().enumerate() {
                seen[u] += 1;
                for &v in &class[i + 1..] {
                    assert!(!graph.has_edge(u, v));
                }
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_matching_number_small_graphs() {
        assert_eq!(matching_number(&SimpleGraph::path(4)).unwrap(), 2);
        assert_eq!(matching_number(&SimpleGraph::complete(4)).unwrap(), 2);
        assert_eq!(matching_number(&SimpleGraph::star(5)).unwrap(), 1);
    }

    #[test]
    fn test_maximum_matching_has_disjoint_endpoints() {
        let graph = SimpleGraph::cycle(6);
        let matching = maximum_matching(&graph).unwrap();
        assert_eq!(matching.len(), 3);
        let mut used = vec![false; 6];
        for (u, v) in matching {
            assert!(!used[u] && !used[v]);
            used[u] = true;
            used[v] = true;
        }
    }

    #[test]
    fn test_edge_cover() {
        assert_eq!(edge_cover_number(&SimpleGraph::complete(4)).unwrap(), 2);
        assert_eq!(edge_cover_number(&SimpleGraph::star(5)).unwrap(), 4);
        let graph = SimpleGraph::path(5);
        let cover = minimum_edge_cover(&graph).unwrap();
        let mut covered = vec![false; 5];
        for (u, v) in &cover {
            covered[*u] = true;
            covered[*v] = true;
        }
        assert!(covered.iter().all(|&c| c));
        assert_eq!(cover.len(), 3);
    }

    #[test]
    fn test_edge_cover_isolated_vertex_infeasible() {
        let graph = SimpleGraph::new(3, vec![(0, 1)]);
        assert!(matches!(
            minimum_edge_cover(&graph),
            Err(InvariantError::Infeasible(_))
        ));
    }

    #[test]
    fn test_null_graph() {
        let graph = SimpleGraph::empty(0);
        assert_eq!(independence_number(&graph).unwrap(), 0);
        assert_eq!(chromatic_number(&graph).unwrap(), 0);
        assert_eq!(matching_number(&graph).unwrap(), 0);
        assert_eq!(edge_cover_number(&graph).unwrap(), 0);
    }
}
