use super::*;
use crate::graph::small_graphs;

#[test]
fn test_diameter_and_radius() {
    let path = SimpleGraph::path(4);
    assert_eq!(diameter(&path).unwrap(), 3);
    assert_eq!(radius(&path).unwrap(), 2);
    let cycle = SimpleGraph::cycle(5);
    assert_eq!(diameter(&cycle).unwrap(), 2);
    assert_eq!(radius(&cycle).unwrap(), 2);
    assert_eq!(diameter(&SimpleGraph::empty(1)).unwrap(), 0);
    assert_eq!(diameter(&small_graphs::petersen()).unwrap(), 2);
}

#[test]
fn test_distance_invariants_need_connectivity() {
    let split = SimpleGraph::new(4, vec![(0, 1), (2, 3)]);
    assert_eq!(diameter(&split), Err(InvariantError::NotConnected));
    assert_eq!(radius(&split), Err(InvariantError::NotConnected));
    assert_eq!(
        average_shortest_path_length(&split),
        Err(InvariantError::NotConnected)
    );
    assert_eq!(diameter(&SimpleGraph::empty(0)), Err(InvariantError::NotConnected));
}

#[test]
fn test_average_shortest_path_length() {
    // P4 ordered-pair distances sum to 20 over 12 pairs
    let value = average_shortest_path_length(&SimpleGraph::path(4)).unwrap();
    assert!((value - 20.0 / 12.0).abs() < 1e-12);
    assert_eq!(
        average_shortest_path_length(&SimpleGraph::empty(1)).unwrap(),
        0.0
    );
    assert_eq!(
        average_shortest_path_length(&SimpleGraph::complete(5)).unwrap(),
        1.0
    );
}

#[test]
fn test_is_tree() {
    assert!(is_tree(&SimpleGraph::path(4)));
    assert!(is_tree(&SimpleGraph::star(6)));
    assert!(!is_tree(&SimpleGraph::cycle(4)));
    assert!(!is_tree(&SimpleGraph::new(4, vec![(0, 1), (2, 3)])));
}

#[test]
fn test_connected_and_bipartite() {
    assert!(connected_and_bipartite(&SimpleGraph::path(4)));
    assert!(connected_and_bipartite(&SimpleGraph::cycle(4)));
    assert!(!connected_and_bipartite(&SimpleGraph::cycle(5)));
    assert!(!connected_and_bipartite(&SimpleGraph::new(
        4,
        vec![(0, 1), (2, 3)]
    )));
}

#[test]
fn test_regularity_predicates() {
    assert!(connected_and_regular(&SimpleGraph::cycle(4)));
    assert!(!connected_and_regular(&SimpleGraph::path(4)));
    assert!(connected_and_cubic(&small_graphs::petersen()));
    assert!(connected_and_cubic(&SimpleGraph::complete(4)));
    assert!(!connected_and_cubic(&SimpleGraph::cycle(4)));
    assert!(connected_and_subcubic(&SimpleGraph::cycle(4)));
    assert!(connected_and_subcubic(&small_graphs::petersen()));
    assert!(!connected_and_subcubic(&SimpleGraph::star(5)));
}

#[test]
fn test_connected_and_eulerian() {
    assert!(connected_and_eulerian(&SimpleGraph::cycle(4)));
    assert!(!connected_and_eulerian(&SimpleGraph::path(4)));
    assert!(!connected_and_eulerian(&SimpleGraph::new(
        6,
        vec![(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]
    )));
}

#[test]
fn test_claw_and_triangle_free() {
    assert!(is_claw_free(&SimpleGraph::path(4)));
    assert!(is_claw_free(&SimpleGraph::cycle(6)));
    assert!(!is_claw_free(&SimpleGraph::star(4)));
    assert!(is_triangle_free(&SimpleGraph::cycle(4)));
    assert!(is_triangle_free(&small_graphs::petersen()));
    assert!(!is_triangle_free(&SimpleGraph::complete(3)));
    assert!(!is_triangle_free(&small_graphs::bull()));
}
