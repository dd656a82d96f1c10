//! The `SimpleGraph` value type.
//!
//! A thin wrapper around petgraph's `UnGraph` that fixes the vertex set to
//! `0..n` and enforces simple-graph invariants (no self-loops, no parallel
//! edges). All invariant computations in this crate consume this type and
//! never mutate it.

use crate::error::{InvariantError, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};

/// A finite simple undirected graph on vertices `0..n`.
///
/// # Example
///
/// ```
/// use graphinv::SimpleGraph;
///
/// let graph = SimpleGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
/// assert_eq!(graph.order(), 4);
/// assert_eq!(graph.size(), 3);
/// assert!(graph.has_edge(0, 1));
/// assert!(!graph.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleGraph {
    inner: UnGraph<(), ()>,
}

impl SimpleGraph {
    /// Creates a graph from an edge list. Duplicate edges are kept once.
    ///
    /// # Panics
    ///
    /// Panics on self-loops and out-of-range endpoints; see
    /// [`SimpleGraph::try_new`] for the fallible variant.
    pub fn new(num_vertices: usize, edges: Vec<(usize, usize)>) -> Self {
        Self::try_new(num_vertices, edges).expect("invalid edge list for a simple graph")
    }

    /// Creates a graph from an edge list, rejecting input that cannot be
    /// a simple graph. An edge listed more than once (in either
    /// orientation) is kept once.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::UnsupportedInput`] if an edge is a
    /// self-loop or references a vertex index `>= num_vertices`.
    pub fn try_new(num_vertices: usize, edges: Vec<(usize, usize)>) -> Result<Self> {
        let mut inner = UnGraph::new_undirected();
        for _ in 0..num_vertices {
            inner.add_node(());
        }
        for (u, v) in edges {
            if u >= num_vertices || v >= num_vertices {
                return Err(InvariantError::UnsupportedInput(format!(
                    "edge ({u}, {v}) references a vertex >= {num_vertices}"
                )));
            }
            if u == v {
                return Err(InvariantError::UnsupportedInput(format!(
                    "self-loop at vertex {u}"
                )));
            }
            let (a, b) = (NodeIndex::new(u), NodeIndex::new(v));
            if inner.find_edge(a, b).is_none() {
                inner.add_edge(a, b, ());
            }
        }
        Ok(Self { inner })
    }

    /// Creates an edgeless graph with the given number of vertices.
    pub fn empty(num_vertices: usize) -> Self {
        Self::new(num_vertices, vec![])
    }

    /// Creates a complete graph (all vertices pairwise adjacent).
    pub fn complete(num_vertices: usize) -> Self {
        let mut edges = Vec::new();
        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                edges.push((i, j));
            }
        }
        Self::new(num_vertices, edges)
    }

    /// Creates a path graph `0-1-2-...-(n-1)`.
    pub fn path(num_vertices: usize) -> Self {
        let edges: Vec<_> = (0..num_vertices.saturating_sub(1))
            .map(|i| (i, i + 1))
            .collect();
        Self::new(num_vertices, edges)
    }

    /// Creates a cycle graph `0-1-...-(n-1)-0`.
    pub fn cycle(num_vertices: usize) -> Self {
        if num_vertices < 3 {
            return Self::path(num_vertices);
        }
        let mut edges: Vec<_> = (0..num_vertices - 1).map(|i| (i, i + 1)).collect();
        edges.push((num_vertices - 1, 0));
        Self::new(num_vertices, edges)
    }

    /// Creates a star graph (vertex 0 adjacent to all others).
    pub fn star(num_vertices: usize) -> Self {
        let edges: Vec<_> = (1..num_vertices).map(|i| (0, i)).collect();
        Self::new(num_vertices, edges)
    }

    /// Creates a grid graph with the given dimensions.
    ///
    /// Vertices are numbered row by row: vertex `r * cols + c` is at row
    /// `r`, column `c`.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let num_vertices = rows * cols;
        let mut edges = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                let v = r * cols + c;
                if c + 1 < cols {
                    edges.push((v, v + 1));
                }
                if r + 1 < rows {
                    edges.push((v, v + cols));
                }
            }
        }
        Self::new(num_vertices, edges)
    }

    /// Creates an Erdős–Rényi random graph G(n, p) from a seed.
    ///
    /// Each of the `n * (n - 1) / 2` possible edges is present
    /// independently with probability `p`.
    pub fn erdos_renyi(num_vertices: usize, p: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = Vec::new();
        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                if rng.random::<f64>() < p {
                    edges.push((i, j));
                }
            }
        }
        Self::new(num_vertices, edges)
    }

    /// Returns the order of the graph (number of vertices).
    pub fn order(&self) -> usize {
        self.inner.node_count()
    }

    /// Returns the size of the graph (number of edges).
    pub fn size(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Returns all edges as `(u, v)` pairs with `u < v`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.inner
            .edge_references()
            .map(|e| {
                let (u, v) = (e.source().index(), e.target().index());
                if u < v {
                    (u, v)
                } else {
                    (v, u)
                }
            })
            .collect()
    }

    /// Checks whether vertices `u` and `v` are adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.inner
            .find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .is_some()
    }

    /// Returns the open neighborhood N(v) of a vertex.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.inner
            .neighbors(NodeIndex::new(v))
            .map(|n| n.index())
            .collect()
    }

    /// Returns the closed neighborhood `N[v] = {v} ∪ N(v)`.
    pub fn closed_neighborhood(&self, v: usize) -> Vec<usize> {
        let mut nbrs = self.neighbors(v);
        nbrs.push(v);
        nbrs
    }

    /// Returns the degree of a vertex.
    pub fn degree(&self, v: usize) -> usize {
        self.inner.neighbors(NodeIndex::new(v)).count()
    }

    /// Returns the degree of every vertex, in vertex order.
    pub fn degree_sequence(&self) -> Vec<usize> {
        (0..self.order()).map(|v| self.degree(v)).collect()
    }

    /// Returns the minimum degree δ(G), or `None` for the null graph.
    pub fn min_degree(&self) -> Option<usize> {
        self.degree_sequence().into_iter().min()
    }

    /// Returns the maximum degree Δ(G), or `None` for the null graph.
    pub fn max_degree(&self) -> Option<usize> {
        self.degree_sequence().into_iter().max()
    }

    /// Returns the complement graph.
    ///
    /// The result is a plain [`SimpleGraph`], whatever produced `self`;
    /// invariants that recurse through the complement (such as the clique
    /// number) therefore see an unconstrained simple graph.
    pub fn complement(&self) -> SimpleGraph {
        let n = self.order();
        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if !self.has_edge(u, v) {
                    edges.push((u, v));
                }
            }
        }
        SimpleGraph::new(n, edges)
    }

    /// Returns the subgraph induced by `vertices`, relabeled to
    /// `0..vertices.len()` in the given order.
    ///
    /// Vertices listed more than once are kept once.
    pub fn induced_subgraph(&self, vertices: &[usize]) -> SimpleGraph {
        let mut keep: Vec<usize> = vertices.to_vec();
        keep.sort_unstable();
        keep.dedup();
        let mut relabel = vec![usize::MAX; self.order()];
        for (new, &old) in keep.iter().enumerate() {
            relabel[old] = new;
        }
        let mut edges = Vec::new();
        for &u in &keep {
            for w in self.neighbors(u) {
                if w > u && relabel[w] != usize::MAX {
                    edges.push((relabel[u], relabel[w]));
                }
            }
        }
        SimpleGraph::new(keep.len(), edges)
    }

    /// Checks whether the graph is connected.
    ///
    /// The null graph is not connected; a single vertex is.
    pub fn is_connected(&self) -> bool {
        self.order() > 0 && petgraph::algo::connected_components(&self.inner) == 1
    }

    /// Returns the line graph L(G) together with the edge of `self` that
    /// each line-graph vertex stands for.
    ///
    /// Two line-graph vertices are adjacent iff the corresponding edges
    /// of `self` share an endpoint.
    pub fn line_graph(&self) -> (SimpleGraph, Vec<(usize, usize)>) {
        let edge_list = self.edges();
        let m = edge_list.len();
        let mut line_edges = Vec::new();
        for i in 0..m {
            for j in (i + 1)..m {
                let (a, b) = edge_list[i];
                let (c, d) = edge_list[j];
                if a == c || a == d || b == c || b == d {
                    line_edges.push((i, j));
                }
            }
        }
        (SimpleGraph::new(m, line_edges), edge_list)
    }

    /// Access to the underlying petgraph structure, for algorithms
    /// delegated to petgraph (e.g. maximum matching).
    pub(crate) fn as_petgraph(&self) -> &UnGraph<(), ()> {
        &self.inner
    }
}

impl PartialEq for SimpleGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.order() != other.order() || self.size() != other.size() {
            return false;
        }
        let mut self_edges = self.edges();
        let mut other_edges = other.edges();
        self_edges.sort_unstable();
        other_edges.sort_unstable();
        self_edges == other_edges
    }
}

impl Eq for SimpleGraph {}

#[cfg(test)]
#[path = "../tests_unit/graph/simple.rs"]
mod tests;
