//! A small collection of named graphs used in tests and examples.
//!
//! All edges are 0-indexed.

use crate::graph::SimpleGraph;

/// The bull graph: a triangle with two pendant edges.
/// 5 vertices, 5 edges.
pub fn bull() -> SimpleGraph {
    SimpleGraph::new(5, vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 4)])
}

/// The cubical graph (3-cube, Q3).
/// 8 vertices, 12 edges.
pub fn cubical() -> SimpleGraph {
    SimpleGraph::new(
        8,
        vec![
            (0, 1),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 7),
            (2, 3),
            (2, 6),
            (3, 5),
            (4, 5),
            (4, 7),
            (5, 6),
            (6, 7),
        ],
    )
}

/// The Petersen graph: outer 5-cycle 0..4, inner pentagram 5..9, spokes
/// `i — i+5`.
/// 10 vertices, 15 edges, 3-regular.
pub fn petersen() -> SimpleGraph {
    SimpleGraph::new(
        10,
        vec![
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (0, 5),
            (1, 6),
            (2, 7),
            (3, 8),
            (4, 9),
            (5, 7),
            (7, 9),
            (9, 6),
            (6, 8),
            (8, 5),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::properties::connected_and_cubic;

    #[test]
    fn test_orders_and_sizes() {
        assert_eq!((bull().order(), bull().size()), (5, 5));
        assert_eq!((cubical().order(), cubical().size()), (8, 12));
        assert_eq!((petersen().order(), petersen().size()), (10, 15));
    }

    #[test]
    fn test_petersen_is_cubic() {
        assert!(connected_and_cubic(&petersen()));
    }
}
