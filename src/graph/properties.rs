//! Structural graph properties: distances and boolean predicates.
//!
//! Distance invariants (diameter, radius, average shortest path length)
//! require a connected graph and fail with
//! [`InvariantError::NotConnected`] otherwise.

use crate::error::{InvariantError, Result};
use crate::graph::SimpleGraph;
use std::collections::VecDeque;

/// BFS distances from `source`; `None` marks unreachable vertices.
fn bfs_distances(graph: &SimpleGraph, source: usize) -> Vec<Option<usize>> {
    let n = graph.order();
    let mut dist = vec![None; n];
    dist[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        let d = dist[v].unwrap_or(0);
        for u in graph.neighbors(v) {
            if dist[u].is_none() {
                dist[u] = Some(d + 1);
                queue.push_back(u);
            }
        }
    }
    dist
}

/// Eccentricity of every vertex, requiring connectivity.
fn eccentricities(graph: &SimpleGraph) -> Result<Vec<usize>> {
    if !graph.is_connected() {
        return Err(InvariantError::NotConnected);
    }
    (0..graph.order())
        .map(|v| {
            bfs_distances(graph, v)
                .into_iter()
                .map(|d| d.ok_or(InvariantError::NotConnected))
                .try_fold(0, |acc, d| d.map(|d| acc.max(d)))
        })
        .collect()
}

/// Returns the diameter: the maximum shortest-path distance over all
/// vertex pairs.
///
/// # Example
///
/// ```
/// use graphinv::SimpleGraph;
/// use graphinv::graph::properties::diameter;
///
/// assert_eq!(diameter(&SimpleGraph::path(4)).unwrap(), 3);
/// ```
pub fn diameter(graph: &SimpleGraph) -> Result<usize> {
    Ok(eccentricities(graph)?.into_iter().max().unwrap_or(0))
}

/// Returns the radius: the minimum eccentricity over all vertices.
pub fn radius(graph: &SimpleGraph) -> Result<usize> {
    Ok(eccentricities(graph)?.into_iter().min().unwrap_or(0))
}

/// Returns the average shortest-path length over all ordered vertex
/// pairs, `Σ d(u, v) / (n (n − 1))`.
pub fn average_shortest_path_length(graph: &SimpleGraph) -> Result<f64> {
    if !graph.is_connected() {
        return Err(InvariantError::NotConnected);
    }
    let n = graph.order();
    if n < 2 {
        return Ok(0.0);
    }
    let mut total = 0usize;
    for v in 0..n {
        for d in bfs_distances(graph, v).into_iter().flatten() {
            total += d;
        }
    }
    Ok(total as f64 / (n * (n - 1)) as f64)
}

/// Checks whether the graph is a tree (connected with `m = n − 1`).
pub fn is_tree(graph: &SimpleGraph) -> bool {
    graph.is_connected() && graph.size() + 1 == graph.order()
}

/// Checks whether the graph is connected and bipartite.
pub fn connected_and_bipartite(graph: &SimpleGraph) -> bool {
    if !graph.is_connected() {
        return false;
    }
    // 2-color by BFS from vertex 0; connectivity reaches everything.
    let n = graph.order();
    let mut color = vec![None; n];
    color[0] = Some(false);
    let mut queue = VecDeque::from([0]);
    while let Some(v) = queue.pop_front() {
        let side = color[v].unwrap_or(false);
        for u in graph.neighbors(v) {
            match color[u] {
                None => {
                    color[u] = Some(!side);
                    queue.push_back(u);
                }
                Some(c) if c == side => return false,
                Some(_) => {}
            }
        }
    }
    true
}

/// Checks whether the graph is connected and regular (all degrees equal).
pub fn connected_and_regular(graph: &SimpleGraph) -> bool {
    graph.is_connected() && graph.min_degree() == graph.max_degree()
}

/// Checks whether the graph is connected and cubic (3-regular).
///
/// # Example
///
/// ```
/// use graphinv::graph::{properties::connected_and_cubic, small_graphs};
///
/// assert!(connected_and_cubic(&small_graphs::petersen()));
/// ```
pub fn connected_and_cubic(graph: &SimpleGraph) -> bool {
    graph.is_connected() && graph.min_degree() == Some(3) && graph.max_degree() == Some(3)
}

/// Checks whether the graph is connected and subcubic (maximum degree
/// at most 3).
pub fn connected_and_subcubic(graph: &SimpleGraph) -> bool {
    graph.is_connected() && graph.max_degree().is_some_and(|d| d <= 3)
}

/// Checks whether the graph is connected and Eulerian (every degree
/// even).
pub fn connected_and_eulerian(graph: &SimpleGraph) -> bool {
    graph.is_connected() && graph.degree_sequence().iter().all(|d| d % 2 == 0)
}

/// Checks whether the graph contains no induced claw (K_{1,3}).
///
/// A claw centered at `v` is a triple of pairwise non-adjacent
/// neighbors of `v`.
pub fn is_claw_free(graph: &SimpleGraph) -> bool {
    for v in 0..graph.order() {
        let nbrs = graph.neighbors(v);
        for i in 0..nbrs.len() {
            for j in (i + 1)..nbrs.len() {
                if graph.has_edge(nbrs[i], nbrs[j]) {
                    continue;
                }
                for k in (j + 1)..nbrs.len() {
                    if !graph.has_edge(nbrs[i], nbrs[k]) && !graph.has_edge(nbrs[j], nbrs[k]) {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// Checks whether the graph contains no triangle.
pub fn is_triangle_free(graph: &SimpleGraph) -> bool {
    for (u, v) in graph.edges() {
        for w in graph.neighbors(u) {
            if w != v && graph.has_edge(v, w) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
#[path = "../tests_unit/graph/properties.rs"]
mod tests;
