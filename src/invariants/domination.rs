//! Domination-type invariants.
//!
//! Ordinary, total, independent, and restrained domination (plus the
//! Roman, double Roman, and rainbow variants) are 0/1 programs.
//! Outer-connected domination has no LP here and goes through the
//! brute-force subset search; the minimum maximal matching number reuses
//! the domination program on the line graph.

use crate::error::{InvariantError, Result};
use crate::graph::SimpleGraph;
use crate::ilp::solve::IlpSolver;
use crate::ilp::{BinaryProgram, LinearConstraint, ObjectiveSense};
use crate::search::{
    closed_neighbor_masks, mask_connected, minimum_vertex_set, neighbor_masks, MAX_BRUTE_ORDER,
};

fn selected_vertices(assignment: &[u8]) -> Vec<usize> {
    assignment
        .iter()
        .enumerate()
        .filter(|&(_, &x)| x == 1)
        .map(|(v, _)| v)
        .collect()
}

/// The domination program: minimize Σ x_v with one coverage constraint
/// per vertex, over the closed (ordinary) or open (total) neighborhood.
fn domination_program(graph: &SimpleGraph, closed: bool) -> BinaryProgram {
    let n = graph.order();
    let mut constraints = Vec::with_capacity(n);
    for v in 0..n {
        let mut terms: Vec<(usize, f64)> =
            graph.neighbors(v).into_iter().map(|u| (u, 1.0)).collect();
        if closed {
            terms.push((v, 1.0));
        }
        // an isolated vertex under the open rule yields 0 >= 1, which is
        // exactly the infeasibility the invariant calls for
        constraints.push(LinearConstraint::ge(terms, 1.0));
    }
    let objective = (0..n).map(|v| (v, 1.0)).collect();
    BinaryProgram::new(n, constraints, objective, ObjectiveSense::Minimize)
}

/// Returns a smallest dominating set: every vertex is in the set or
/// adjacent to it.
///
/// # Example
///
/// ```no_run
/// use graphinv::invariants::minimum_dominating_set;
/// use graphinv::SimpleGraph;
///
/// // the star's center dominates everything
/// assert_eq!(minimum_dominating_set(&SimpleGraph::star(5)).unwrap(), vec![0]);
/// ```
pub fn minimum_dominating_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let assignment = IlpSolver::new().solve(&domination_program(graph, true))?;
    Ok(selected_vertices(&assignment))
}

/// Returns the domination number γ(G).
pub fn domination_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(minimum_dominating_set(graph)?.len())
}

/// Returns a smallest total dominating set: every vertex, selected or
/// not, has a neighbor in the set.
///
/// # Errors
///
/// [`InvariantError::Infeasible`] if the graph has an isolated vertex.
pub fn minimum_total_dominating_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let assignment = IlpSolver::new().solve(&domination_program(graph, false))?;
    Ok(selected_vertices(&assignment))
}

/// Returns the total domination number γ_t(G).
pub fn total_domination_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(minimum_total_dominating_set(graph)?.len())
}

/// Returns a smallest independent dominating set: the domination program
/// plus the independence constraints x_u + x_v <= 1 per edge.
pub fn minimum_independent_dominating_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let mut program = domination_program(graph, true);
    for (u, v) in graph.edges() {
        program
            .constraints
            .push(LinearConstraint::le(vec![(u, 1.0), (v, 1.0)], 1.0));
    }
    let assignment = IlpSolver::new().solve(&program)?;
    Ok(selected_vertices(&assignment))
}

/// Returns the independent domination number i(G).
pub fn independent_domination_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(minimum_independent_dominating_set(graph)?.len())
}

/// Returns a smallest restrained dominating set: dominating, and every
/// non-selected vertex keeps a non-selected neighbor.
///
/// The second condition Σ_{u ∈ N(v)} (1 − x_u) >= 1 − x_v is linearized
/// to x_v − Σ_{u ∈ N(v)} x_u >= 1 − deg(v).
pub fn minimum_restrained_dominating_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let mut program = domination_program(graph, true);
    for v in 0..graph.order() {
        let neighbors = graph.neighbors(v);
        let mut terms: Vec<(usize, f64)> = vec![(v, 1.0)];
        terms.extend(neighbors.iter().map(|&u| (u, -1.0)));
        program
            .constraints
            .push(LinearConstraint::ge(terms, 1.0 - neighbors.len() as f64));
    }
    let assignment = IlpSolver::new().solve(&program)?;
    Ok(selected_vertices(&assignment))
}

/// Returns the restrained domination number γ_r(G).
pub fn restrained_domination_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(minimum_restrained_dominating_set(graph)?.len())
}

/// Returns a smallest outer-connected dominating set: dominating, with a
/// connected complement (the empty complement counts as connected).
///
/// Found by subset search, smallest size first.
pub fn minimum_outer_connected_dominating_set(graph: &SimpleGraph) -> Result<Vec<usize>> {
    let n = graph.order();
    if n > MAX_BRUTE_ORDER {
        return Err(InvariantError::TooLarge {
            order: n,
            limit: MAX_BRUTE_ORDER,
        });
    }
    let closed = closed_neighbor_masks(graph);
    let open = neighbor_masks(graph);
    let full = if n == 64 { u64::MAX } else { (1u64 << n) - 1 };
    minimum_vertex_set(graph, 0, |mask| {
        let mut dominated = 0u64;
        let mut m = mask;
        while m != 0 {
            let v = m.trailing_zeros() as usize;
            dominated |= closed[v];
            m &= m - 1;
        }
        dominated == full && mask_connected(&open, full & !mask)
    })
}

/// Returns the outer-connected domination number γ̃(G).
pub fn outer_connected_domination_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(minimum_outer_connected_dominating_set(graph)?.len())
}

/// The Roman domination program.
///
/// Labels: x_v = "assigned 1" (index v), y_v = "assigned 2" (index n+v).
/// Minimize Σ (x_v + 2 y_v) subject to, per vertex,
/// x_v + y_v + Σ_{u ∈ N(v)} y_u >= 1 and x_v + y_v <= 1.
fn roman_program(graph: &SimpleGraph) -> BinaryProgram {
    let n = graph.order();
    let one = |v: usize| v;
    let two = |v: usize| n + v;

    let mut constraints = Vec::new();
    for v in 0..n {
        let mut terms = vec![(one(v), 1.0), (two(v), 1.0)];
        terms.extend(graph.neighbors(v).into_iter().map(|u| (two(u), 1.0)));
        constraints.push(LinearConstraint::ge(terms, 1.0));
        constraints.push(LinearConstraint::le(
            vec![(one(v), 1.0), (two(v), 1.0)],
            1.0,
        ));
    }
    let objective = (0..n)
        .map(|v| (one(v), 1.0))
        .chain((0..n).map(|v| (two(v), 2.0)))
        .collect();
    BinaryProgram::new(2 * n, constraints, objective, ObjectiveSense::Minimize)
}

/// Returns an optimal Roman dominating function as per-vertex labels in
/// {0, 1, 2}: every 0-labeled vertex has a 2-labeled neighbor.
pub fn roman_domination(graph: &SimpleGraph) -> Result<Vec<u8>> {
    let n = graph.order();
    let assignment = IlpSolver::new().solve(&roman_program(graph))?;
    Ok((0..n)
        .map(|v| {
            if assignment[n + v] == 1 {
                2
            } else {
                assignment[v]
            }
        })
        .collect())
}

/// Returns the Roman domination number γ_R(G), the minimum total weight
/// of a Roman dominating function.
pub fn roman_domination_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(roman_domination(graph)?.iter().map(|&l| l as usize).sum())
}

/// The double Roman domination program.
///
/// Labels: x_v = 1 (index v), y_v = 2 (index n+v), z_v = 3 (index 2n+v).
/// Minimize Σ (x_v + 2 y_v + 3 z_v) subject to, per vertex,
/// (a) x_v + y_v + z_v + ½ Σ_{u ∈ N(v)} y_u + Σ_{u ∈ N(v)} z_u >= 1,
/// (b) Σ_{u ∈ N(v)} (y_u + z_u) >= x_v,
/// (c) x_v + y_v + z_v <= 1.
/// The ½ coefficient is exact; feasibility is evaluated on integer
/// variables, so the program still has an integral optimum.
fn double_roman_program(graph: &SimpleGraph) -> BinaryProgram {
    let n = graph.order();
    let one = |v: usize| v;
    let two = |v: usize| n + v;
    let three = |v: usize| 2 * n + v;

    let mut constraints = Vec::new();
    for v in 0..n {
        let neighbors = graph.neighbors(v);

        let mut defense = vec![(one(v), 1.0), (two(v), 1.0), (three(v), 1.0)];
        defense.extend(neighbors.iter().map(|&u| (two(u), 0.5)));
        defense.extend(neighbors.iter().map(|&u| (three(u), 1.0)));
        constraints.push(LinearConstraint::ge(defense, 1.0));

        let mut support: Vec<(usize, f64)> =
            neighbors.iter().map(|&u| (two(u), 1.0)).collect();
        support.extend(neighbors.iter().map(|&u| (three(u), 1.0)));
        support.push((one(v), -1.0));
        constraints.push(LinearConstraint::ge(support, 0.0));

        constraints.push(LinearConstraint::le(
            vec![(one(v), 1.0), (two(v), 1.0), (three(v), 1.0)],
            1.0,
        ));
    }
    let objective = (0..n)
        .map(|v| (one(v), 1.0))
        .chain((0..n).map(|v| (two(v), 2.0)))
        .chain((0..n).map(|v| (three(v), 3.0)))
        .collect();
    BinaryProgram::new(3 * n, constraints, objective, ObjectiveSense::Minimize)
}

/// Returns an optimal double Roman dominating function as per-vertex
/// labels in {0, 1, 2, 3}.
pub fn double_roman_domination(graph: &SimpleGraph) -> Result<Vec<u8>> {
    let n = graph.order();
    let assignment = IlpSolver::new().solve(&double_roman_program(graph))?;
    Ok((0..n)
        .map(|v| {
            if assignment[2 * n + v] == 1 {
                3
            } else if assignment[n + v] == 1 {
                2
            } else {
                assignment[v]
            }
        })
        .collect())
}

/// Returns the double Roman domination number γ_dR(G).
pub fn double_roman_domination_number(graph: &SimpleGraph) -> Result<usize> {
    Ok(double_roman_domination(graph)?
        .iter()
        .map(|&l| l as usize)
        .sum())
}

/// The k-rainbow domination program.
///
/// Variables: f_{v,i} = "v carries color i" (index v*k + i - 1) and
/// x_v = "v uncolored" (index n*k + v). Minimize Σ f_{v,i} subject to
/// Σ_i f_{v,i} + x_v = 1 per vertex, and per vertex and color
/// Σ_{u ∈ N(v)} f_{u,i} >= x_v.
fn rainbow_program(graph: &SimpleGraph, k: usize) -> BinaryProgram {
    let n = graph.order();
    let colored = |v: usize, i: usize| v * k + (i - 1);
    let uncolored = |v: usize| n * k + v;

    let mut constraints = Vec::new();
    for v in 0..n {
        let mut terms: Vec<(usize, f64)> = (1..=k).map(|i| (colored(v, i), 1.0)).collect();
        terms.push((uncolored(v), 1.0));
        constraints.push(LinearConstraint::eq(terms, 1.0));
    }
    for v in 0..n {
        for i in 1..=k {
            let mut terms: Vec<(usize, f64)> = graph
                .neighbors(v)
                .into_iter()
                .map(|u| (colored(u, i), 1.0))
                .collect();
            terms.push((uncolored(v), -1.0));
            constraints.push(LinearConstraint::ge(terms, 0.0));
        }
    }
    let objective = (0..n)
        .flat_map(|v| (1..=k).map(move |i| (colored(v, i), 1.0)))
        .collect();
    BinaryProgram::new(n * k + n, constraints, objective, ObjectiveSense::Minimize)
}

/// Returns an optimal k-rainbow domination assignment: `Some(i)` when the
/// vertex carries color `i` (1-based), `None` when it is uncolored.
///
/// # Errors
///
/// [`InvariantError::BadParameter`] if `k` is 0.
pub fn rainbow_domination(graph: &SimpleGraph, k: usize) -> Result<Vec<Option<usize>>> {
    if k == 0 {
        return Err(InvariantError::BadParameter(
            "rainbow domination needs at least one color".into(),
        ));
    }
    let n = graph.order();
    let assignment = IlpSolver::new().solve(&rainbow_program(graph, k))?;
    Ok((0..n)
        .map(|v| (1..=k).find(|&i| assignment[v * k + (i - 1)] == 1))
        .collect())
}

/// Returns the k-rainbow domination number, the number of colored
/// vertices in an optimal assignment.
pub fn k_rainbow_domination_number(graph: &SimpleGraph, k: usize) -> Result<usize> {
    Ok(rainbow_domination(graph, k)?
        .iter()
        .filter(|c| c.is_some())
        .count())
}

/// Returns the 2-rainbow domination number.
pub fn two_rainbow_domination_number(graph: &SimpleGraph) -> Result<usize> {
    k_rainbow_domination_number(graph, 2)
}

/// Returns the 3-rainbow domination number.
pub fn three_rainbow_domination_number(graph: &SimpleGraph) -> Result<usize> {
    k_rainbow_domination_number(graph, 3)
}

/// Returns the minimum maximal matching number: the domination number of
/// the line graph L(G).
pub fn minimum_maximal_matching_number(graph: &SimpleGraph) -> Result<usize> {
    let (line, _) = graph.line_graph();
    domination_number(&line)
}
