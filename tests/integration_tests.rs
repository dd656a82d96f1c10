//! End-to-end scenarios on well-known small graphs.
//!
//! Each test pins the full invariant profile of one graph, crossing all
//! three algorithmic families (closure search, ILP, degree sequence).

use graphinv::graph::properties::{
    average_shortest_path_length, connected_and_cubic, diameter, radius,
};
use graphinv::graph::small_graphs;
use graphinv::prelude::*;

#[test]
fn path_on_four_vertices() {
    let graph = SimpleGraph::path(4);

    assert_eq!(zero_forcing_number(&graph).unwrap(), 1);
    assert_eq!(power_domination_number(&graph).unwrap(), 1);
    assert_eq!(positive_semidefinite_zero_forcing_number(&graph).unwrap(), 1);

    assert_eq!(diameter(&graph).unwrap(), 3);
    assert_eq!(radius(&graph).unwrap(), 2);
    let avg = average_shortest_path_length(&graph).unwrap();
    assert!((avg - 20.0 / 12.0).abs() < 1e-12);

    assert_eq!(slater(&graph).unwrap(), 2);
    assert_eq!(annihilation_number(&graph), 2);
    assert_eq!(residue(&graph), 2);
    assert!((harmonic_index(&graph) - 11.0 / 6.0).abs() < 1e-12);
}

#[cfg(feature = "ilp-solver")]
#[test]
fn path_on_four_vertices_lp_invariants() {
    let graph = SimpleGraph::path(4);
    assert_eq!(independence_number(&graph).unwrap(), 2);
    assert_eq!(vertex_cover_number(&graph).unwrap(), 2);
    assert_eq!(clique_number(&graph).unwrap(), 2);
    assert_eq!(chromatic_number(&graph).unwrap(), 2);
    assert_eq!(domination_number(&graph).unwrap(), 2);
    assert_eq!(total_domination_number(&graph).unwrap(), 2);
}

#[cfg(feature = "ilp-solver")]
#[test]
fn complete_graph_on_four_vertices() {
    let graph = SimpleGraph::complete(4);
    assert_eq!(independence_number(&graph).unwrap(), 1);
    assert_eq!(clique_number(&graph).unwrap(), 4);
    assert_eq!(chromatic_number(&graph).unwrap(), 4);
    assert_eq!(domination_number(&graph).unwrap(), 1);
    assert_eq!(matching_number(&graph).unwrap(), 2);
    assert_eq!(vertex_cover_number(&graph).unwrap(), 3);
    assert_eq!(edge_cover_number(&graph).unwrap(), 2);
    assert_eq!(slater(&graph).unwrap(), 1);
    // a single black vertex of a clique never forces
    assert_eq!(positive_semidefinite_zero_forcing_number(&graph).unwrap(), 3);
}

#[test]
fn cycle_on_four_vertices() {
    let graph = SimpleGraph::cycle(4);
    assert_eq!(two_forcing_number(&graph).unwrap(), 1);
    assert_eq!(zero_forcing_number(&graph).unwrap(), 2);
    assert_eq!(annihilation_number(&graph), 2);
}

#[cfg(feature = "ilp-solver")]
#[test]
fn cycle_on_four_vertices_lp_invariants() {
    let graph = SimpleGraph::cycle(4);
    assert_eq!(independence_number(&graph).unwrap(), 2);
    assert_eq!(clique_number(&graph).unwrap(), 2);
    assert_eq!(chromatic_number(&graph).unwrap(), 2);
    assert_eq!(domination_number(&graph).unwrap(), 2);
}

#[cfg(feature = "ilp-solver")]
#[test]
fn odd_cycle_needs_three_colors() {
    let graph = SimpleGraph::cycle(5);
    assert_eq!(independence_number(&graph).unwrap(), 2);
    assert_eq!(clique_number(&graph).unwrap(), 2);
    assert_eq!(chromatic_number(&graph).unwrap(), 3);
    assert_eq!(domination_number(&graph).unwrap(), 2);
}

#[test]
fn star_with_four_leaves() {
    let graph = SimpleGraph::star(5);
    assert_eq!(zero_forcing_number(&graph).unwrap(), 3);
    assert_eq!(power_domination_number(&graph).unwrap(), 1);
}

#[cfg(feature = "ilp-solver")]
#[test]
fn star_with_four_leaves_lp_invariants() {
    let graph = SimpleGraph::star(5);
    assert_eq!(independence_number(&graph).unwrap(), 4);
    assert_eq!(clique_number(&graph).unwrap(), 2);
    assert_eq!(chromatic_number(&graph).unwrap(), 2);
    assert_eq!(domination_number(&graph).unwrap(), 1);
    assert_eq!(matching_number(&graph).unwrap(), 1);
    assert_eq!(vertex_cover_number(&graph).unwrap(), 1);
    assert_eq!(edge_cover_number(&graph).unwrap(), 4);
}

#[test]
fn petersen_graph_structure() {
    let graph = small_graphs::petersen();
    assert!(connected_and_cubic(&graph));
}

#[cfg(feature = "ilp-solver")]
#[test]
fn petersen_graph_lp_invariants() {
    let graph = small_graphs::petersen();
    assert_eq!(independence_number(&graph).unwrap(), 4);
    assert_eq!(clique_number(&graph).unwrap(), 2);
    assert_eq!(chromatic_number(&graph).unwrap(), 3);
    assert_eq!(domination_number(&graph).unwrap(), 3);
}

#[cfg(feature = "ilp-solver")]
#[test]
fn complement_identities() {
    for graph in [
        SimpleGraph::path(5),
        SimpleGraph::cycle(6),
        small_graphs::bull(),
    ] {
        let complement = graph.complement();
        // α(G) + τ(G) = n and ω(G) = α(Ḡ)
        assert_eq!(
            independence_number(&graph).unwrap() + vertex_cover_number(&graph).unwrap(),
            graph.order()
        );
        assert_eq!(
            clique_number(&graph).unwrap(),
            independence_number(&complement).unwrap()
        );

        // a maximum clique of G is an independent set of Ḡ
        let clique = maximum_clique(&graph).unwrap();
        for (i, &u) in clique.iter().enumerate() {
            for &v in &clique[i + 1..] {
                assert!(!complement.has_edge(u, v));
            }
        }
    }
}

#[cfg(feature = "ilp-solver")]
#[test]
fn universal_bounds_on_small_graphs() {
    for graph in [
        SimpleGraph::path(5),
        SimpleGraph::cycle(5),
        SimpleGraph::complete(4),
        small_graphs::bull(),
        small_graphs::cubical(),
    ] {
        // χ(G) >= ω(G)
        assert!(chromatic_number(&graph).unwrap() >= clique_number(&graph).unwrap());
        // γ(G) <= γ_t(G) when there are no isolated vertices
        assert!(domination_number(&graph).unwrap() <= total_domination_number(&graph).unwrap());
        // γ_P(G) <= γ(G)
        assert!(power_domination_number(&graph).unwrap() <= domination_number(&graph).unwrap());
        // Z(G) >= δ(G)
        assert!(zero_forcing_number(&graph).unwrap() >= graph.min_degree().unwrap_or(0));
        // Slater bounds domination from below
        assert!(slater(&graph).unwrap() <= domination_number(&graph).unwrap());
    }
}
