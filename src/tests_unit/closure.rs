use super::*;
use crate::graph::small_graphs;

fn sorted_closure(graph: &SimpleGraph, seed: &[usize], rule: &ForcingRule) -> Vec<usize> {
    close(graph, seed, rule).unwrap()
}

#[test]
fn test_zero_forcing_closure_on_path() {
    let path = SimpleGraph::path(4);
    let rule = ForcingRule::zero_forcing();
    assert_eq!(sorted_closure(&path, &[0], &rule), vec![0, 1, 2, 3]);
    // a middle vertex has two white neighbors and cannot start
    assert_eq!(sorted_closure(&path, &[1], &rule), vec![1]);
    assert!(is_forcing_set(&path, &[0], &rule).unwrap());
    assert!(!is_forcing_set(&path, &[1], &rule).unwrap());
}

#[test]
fn test_closure_is_stuck_on_cycle_single_seed() {
    let cycle = SimpleGraph::cycle(4);
    assert_eq!(
        sorted_closure(&cycle, &[0], &ForcingRule::zero_forcing()),
        vec![0]
    );
    // with k = 2 the same seed floods the cycle
    assert_eq!(
        sorted_closure(&cycle, &[0], &ForcingRule::KForcing { k: 2 }),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn test_psd_closure_splits_components() {
    // from the middle of a path both white components are forced at once
    let path = SimpleGraph::path(5);
    assert_eq!(
        sorted_closure(&path, &[2], &ForcingRule::PositiveSemidefinite),
        vec![0, 1, 2, 3, 4]
    );
    // on a complete graph a single black vertex sees all whites in one
    // component and never forces
    let complete = SimpleGraph::complete(4);
    assert_eq!(
        sorted_closure(&complete, &[0], &ForcingRule::PositiveSemidefinite),
        vec![0]
    );
}

#[test]
fn test_power_domination_saturates_then_forces() {
    let path = SimpleGraph::path(4);
    assert_eq!(
        sorted_closure(&path, &[0], &ForcingRule::PowerDomination { k: 1 }),
        vec![0, 1, 2, 3]
    );
    let star = SimpleGraph::star(5);
    assert_eq!(
        sorted_closure(&star, &[0], &ForcingRule::PowerDomination { k: 1 }),
        vec![0, 1, 2, 3, 4]
    );
}

#[test]
fn test_closure_idempotent() {
    let graph = small_graphs::bull();
    let rule = ForcingRule::zero_forcing();
    let once = close(&graph, &[0, 1], &rule).unwrap();
    let twice = close(&graph, &once, &rule).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_closure_monotone() {
    let graph = small_graphs::cubical();
    let rule = ForcingRule::zero_forcing();
    let small = close(&graph, &[0], &rule).unwrap();
    let large = close(&graph, &[0, 1], &rule).unwrap();
    assert!(small.iter().all(|v| large.contains(v)));
}

#[test]
fn test_engine_reuse_matches_one_shot() {
    let graph = SimpleGraph::cycle(6);
    let rule = ForcingRule::zero_forcing();
    let mut engine = ClosureEngine::new(&graph);
    for seeds in [vec![0], vec![0, 1], vec![2, 5]] {
        let bits = seed_bits(graph.order(), &seeds).unwrap();
        let from_engine: Vec<usize> = engine.derived_set(&bits, &rule).unwrap().iter_ones().collect();
        assert_eq!(from_engine, close(&graph, &seeds, &rule).unwrap());
    }
}

#[test]
fn test_mask_forcing_agrees_with_bitset_path() {
    let graph = SimpleGraph::path(5);
    let rule = ForcingRule::PositiveSemidefinite;
    let mut engine = ClosureEngine::new(&graph);
    for mask in 0u64..(1 << 5) {
        let seeds: Vec<usize> = (0..5).filter(|v| mask >> v & 1 == 1).collect();
        assert_eq!(
            engine.mask_forces_all(mask, &rule),
            is_forcing_set(&graph, &seeds, &rule).unwrap(),
            "mask {mask:#b}"
        );
    }
}

#[test]
fn test_rules_reject_zero_parameter() {
    let graph = SimpleGraph::path(3);
    assert!(matches!(
        close(&graph, &[0], &ForcingRule::KForcing { k: 0 }),
        Err(InvariantError::BadParameter(_))
    ));
    assert!(matches!(
        close(&graph, &[0], &ForcingRule::PowerDomination { k: 0 }),
        Err(InvariantError::BadParameter(_))
    ));
}

#[test]
fn test_seed_vertex_out_of_range() {
    let graph = SimpleGraph::path(3);
    assert!(matches!(
        close(&graph, &[7], &ForcingRule::zero_forcing()),
        Err(InvariantError::BadParameter(_))
    ));
}

#[test]
fn test_empty_seed_and_null_graph() {
    let graph = SimpleGraph::path(3);
    let rule = ForcingRule::zero_forcing();
    assert_eq!(sorted_closure(&graph, &[], &rule), Vec::<usize>::new());
    let null = SimpleGraph::empty(0);
    assert!(is_forcing_set(&null, &[], &rule).unwrap());
}
