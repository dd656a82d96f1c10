//! The public invariant surface.
//!
//! Three algorithmic families:
//!
//! - [`classics`] and [`domination`]: exact optima through 0/1 linear
//!   programs (needs an `ilp-*` feature),
//! - [`forcing`]: brute-force minimum seeds over the closure engine,
//! - [`degree_sequence`]: closed-form and linear-scan invariants.

#[cfg(feature = "ilp-solver")]
pub mod classics;
pub mod degree_sequence;
#[cfg(feature = "ilp-solver")]
pub mod domination;
pub mod forcing;

#[cfg(feature = "ilp-solver")]
pub use classics::{
    chromatic_number, clique_number, edge_cover_number, independence_number, matching_number,
    maximum_clique, maximum_independent_set, maximum_matching, minimum_edge_cover,
    minimum_vertex_cover, optimal_proper_coloring, vertex_cover_number,
};
pub use degree_sequence::{
    annihilation_number, harmonic_index, residue, slater, sub_k_domination_number,
    sub_total_domination_number,
};
#[cfg(feature = "ilp-solver")]
pub use domination::{
    domination_number, double_roman_domination, double_roman_domination_number,
    independent_domination_number, k_rainbow_domination_number, minimum_dominating_set,
    minimum_independent_dominating_set, minimum_maximal_matching_number,
    minimum_outer_connected_dominating_set, minimum_restrained_dominating_set,
    minimum_total_dominating_set, outer_connected_domination_number, rainbow_domination,
    restrained_domination_number, roman_domination, roman_domination_number,
    three_rainbow_domination_number, total_domination_number, two_rainbow_domination_number,
};
pub use forcing::{
    connected_k_forcing_number, connected_zero_forcing_number, is_k_power_dominating_set,
    is_zero_forcing_set, k_forcing_number, k_power_domination_number,
    minimum_connected_k_forcing_set, minimum_connected_zero_forcing_set,
    minimum_k_forcing_set, minimum_k_power_dominating_set, minimum_power_dominating_set,
    minimum_psd_zero_forcing_set, minimum_total_zero_forcing_set, minimum_zero_forcing_set,
    positive_semidefinite_zero_forcing_number, power_domination_number,
    total_zero_forcing_number, two_forcing_number, zero_forcing_number,
};
