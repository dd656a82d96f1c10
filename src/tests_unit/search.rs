use super::*;

#[test]
fn test_ksubsets_counts() {
    // binomial coefficients for n = 6
    let expected = [1usize, 6, 15, 20, 15, 6, 1];
    for (k, &count) in expected.iter().enumerate() {
        assert_eq!(KSubsets::new(6, k).count(), count, "k = {k}");
    }
    assert_eq!(KSubsets::new(5, 6).count(), 0);
    assert_eq!(KSubsets::new(0, 0).collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_ksubsets_increasing_with_fixed_popcount() {
    let masks: Vec<u64> = KSubsets::new(8, 3).collect();
    assert!(masks.windows(2).all(|w| w[0] < w[1]));
    assert!(masks.iter().all(|m| m.count_ones() == 3));
    assert_eq!(masks.first(), Some(&0b0000_0111));
    assert_eq!(masks.last(), Some(&0b1110_0000));
}

#[test]
fn test_ksubsets_full_word() {
    // the 64-vertex boundary must not overflow
    assert_eq!(KSubsets::new(64, 64).collect::<Vec<_>>(), vec![u64::MAX]);
    assert_eq!(KSubsets::new(64, 1).count(), 64);
}

#[test]
fn test_mask_vertex_round_trip() {
    let vertices = vec![0, 3, 5];
    let mask = vertices_mask(&vertices);
    assert_eq!(mask, 0b101001);
    assert_eq!(mask_vertices(mask), vertices);
    assert_eq!(mask_vertices(0), Vec::<usize>::new());
}

#[test]
fn test_minimum_vertex_set_finds_smallest_witness() {
    // smallest subset covering every vertex of a star: the center alone
    let star = SimpleGraph::star(5);
    let closed = closed_neighbor_masks(&star);
    let witness = minimum_vertex_set(&star, 0, |mask| {
        let mut dominated = 0u64;
        let mut m = mask;
        while m != 0 {
            let v = m.trailing_zeros() as usize;
            dominated |= closed[v];
            m &= m - 1;
        }
        dominated == 0b11111
    })
    .unwrap();
    assert_eq!(witness, vec![0]);
}

#[test]
fn test_minimum_vertex_set_respects_lower_bound() {
    let graph = SimpleGraph::path(3);
    // the predicate accepts anything, so the first subset of the lower
    // bound size wins
    let witness = minimum_vertex_set(&graph, 2, |_| true).unwrap();
    assert_eq!(witness, vec![0, 1]);
}

#[test]
fn test_minimum_vertex_set_infeasible() {
    let graph = SimpleGraph::path(3);
    assert!(matches!(
        minimum_vertex_set(&graph, 0, |_| false),
        Err(InvariantError::Infeasible(_))
    ));
}

#[test]
fn test_minimum_vertex_set_too_large() {
    let graph = SimpleGraph::empty(65);
    assert!(matches!(
        minimum_vertex_set(&graph, 0, |_| true),
        Err(InvariantError::TooLarge { .. })
    ));
}

#[test]
fn test_neighbor_masks() {
    let path = SimpleGraph::path(3);
    assert_eq!(neighbor_masks(&path), vec![0b010, 0b101, 0b010]);
    assert_eq!(closed_neighbor_masks(&path), vec![0b011, 0b111, 0b110]);
}

#[test]
fn test_mask_connected() {
    let path = SimpleGraph::path(4);
    let masks = neighbor_masks(&path);
    assert!(mask_connected(&masks, 0b0011));
    assert!(mask_connected(&masks, 0b1111));
    assert!(!mask_connected(&masks, 0b0101));
    assert!(!mask_connected(&masks, 0b1001));
    assert!(mask_connected(&masks, 0b0100));
    assert!(mask_connected(&masks, 0));
}
