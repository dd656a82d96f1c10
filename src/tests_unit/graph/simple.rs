use super::*;
use crate::graph::small_graphs;

#[test]
fn test_new_and_counts() {
    let graph = SimpleGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(graph.order(), 4);
    assert_eq!(graph.size(), 3);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 0));
    assert!(!graph.has_edge(0, 2));
    assert!(!graph.is_empty());
    assert!(SimpleGraph::empty(0).is_empty());
}

#[test]
fn test_try_new_rejects_bad_input() {
    assert!(matches!(
        SimpleGraph::try_new(3, vec![(0, 3)]),
        Err(InvariantError::UnsupportedInput(_))
    ));
    assert!(matches!(
        SimpleGraph::try_new(3, vec![(1, 1)]),
        Err(InvariantError::UnsupportedInput(_))
    ));
}

#[test]
fn test_duplicate_edges_collapse() {
    // repeats in either orientation are kept once
    let graph = SimpleGraph::new(3, vec![(0, 1), (0, 1), (1, 0), (1, 2)]);
    assert_eq!(graph.size(), 2);
    assert_eq!(graph.degree(1), 2);
    assert_eq!(graph, SimpleGraph::new(3, vec![(0, 1), (1, 2)]));
}

#[test]
fn test_family_constructors() {
    assert_eq!(SimpleGraph::complete(5).size(), 10);
    assert_eq!(SimpleGraph::path(5).size(), 4);
    assert_eq!(SimpleGraph::cycle(5).size(), 5);
    assert_eq!(SimpleGraph::star(5).size(), 4);
    assert_eq!(SimpleGraph::grid(2, 3).size(), 7);
    // cycles degenerate to paths below 3 vertices
    assert_eq!(SimpleGraph::cycle(2).size(), 1);
}

#[test]
fn test_neighbors_and_degrees() {
    let graph = SimpleGraph::star(4);
    let mut center = graph.neighbors(0);
    center.sort_unstable();
    assert_eq!(center, vec![1, 2, 3]);
    assert_eq!(graph.degree(0), 3);
    assert_eq!(graph.degree(1), 1);
    let mut closed = graph.closed_neighborhood(1);
    closed.sort_unstable();
    assert_eq!(closed, vec![0, 1]);
    assert_eq!(graph.min_degree(), Some(1));
    assert_eq!(graph.max_degree(), Some(3));
    assert_eq!(SimpleGraph::empty(0).min_degree(), None);
}

#[test]
fn test_degree_sum_is_twice_edge_count() {
    let graph = small_graphs::cubical();
    let total: usize = graph.degree_sequence().iter().sum();
    assert_eq!(total, 2 * graph.size());
}

#[test]
fn test_complement() {
    let graph = SimpleGraph::path(4);
    let complement = graph.complement();
    assert_eq!(complement.order(), 4);
    // K4 has 6 edges, the path 3, so the complement has the other 3
    assert_eq!(complement.size(), 3);
    assert!(complement.has_edge(0, 2));
    assert!(!complement.has_edge(0, 1));
    // complementing twice gives the original back
    assert_eq!(complement.complement(), graph);
    assert_eq!(SimpleGraph::complete(4).complement().size(), 0);
}

#[test]
fn test_induced_subgraph() {
    let graph = SimpleGraph::cycle(5);
    let sub = graph.induced_subgraph(&[0, 1, 2]);
    assert_eq!(sub.order(), 3);
    assert_eq!(sub.size(), 2);
    assert!(sub.has_edge(0, 1));
    assert!(sub.has_edge(1, 2));
    assert!(!sub.has_edge(0, 2));
    assert!(sub.is_connected());
    assert!(!graph.induced_subgraph(&[0, 2]).is_connected());
}

#[test]
fn test_is_connected() {
    assert!(SimpleGraph::path(4).is_connected());
    assert!(SimpleGraph::empty(1).is_connected());
    assert!(!SimpleGraph::empty(0).is_connected());
    assert!(!SimpleGraph::new(4, vec![(0, 1), (2, 3)]).is_connected());
}

#[test]
fn test_line_graph() {
    // L(P4) is P3
    let (line, edges) = SimpleGraph::path(4).line_graph();
    assert_eq!(line.order(), 3);
    assert_eq!(line.size(), 2);
    assert_eq!(edges.len(), 3);
    // L(K3) is K3
    let (line, _) = SimpleGraph::complete(3).line_graph();
    assert_eq!(line, SimpleGraph::complete(3));
    // L(star) is complete
    let (line, _) = SimpleGraph::star(5).line_graph();
    assert_eq!(line, SimpleGraph::complete(4));
}

#[test]
fn test_erdos_renyi() {
    let a = SimpleGraph::erdos_renyi(12, 0.5, 7);
    let b = SimpleGraph::erdos_renyi(12, 0.5, 7);
    assert_eq!(a, b);
    assert_eq!(SimpleGraph::erdos_renyi(10, 0.0, 1).size(), 0);
    assert_eq!(SimpleGraph::erdos_renyi(10, 1.0, 1).size(), 45);
}

#[test]
fn test_equality_ignores_edge_order() {
    let a = SimpleGraph::new(3, vec![(0, 1), (1, 2)]);
    let b = SimpleGraph::new(3, vec![(2, 1), (0, 1)]);
    assert_eq!(a, b);
    assert_ne!(a, SimpleGraph::new(3, vec![(0, 1), (0, 2)]));
}

#[test]
fn test_serde_round_trip() {
    let graph = small_graphs::petersen();
    let json = serde_json::to_string(&graph).unwrap();
    let back: SimpleGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(graph, back);
}
