#![forbid(unsafe_code)]

//! Linear arrangement heuristics for weighted sparse graphs.
//!
//! A graph is stored as a compressed sparse column matrix ([`SparseGraph`]). An ordering
//! `sequence` places node `sequence[k]` at position `k`; its cost is the sum over stored entries
//! of `weight * |position(row) - position(col)|`. Three heuristics improve or build orderings:
//!
//! - [`search::search`]: sequential steepest descent over pairwise swaps.
//! - [`search::parallel::search`]: the same search with each round split across workers.
//! - [`augment::successive_augmentation`]: center-outward constructive ordering.

pub mod augment;
pub mod cost;
pub mod error;
pub mod graph;
pub mod numeric;
pub mod permutation;
pub mod search;

pub use augment::{AugmentOutcome, successive_augmentation};
pub use cost::{
    arrangement_cost, sequence_cost, stable_arrangement_cost, stable_sequence_cost,
};
pub use error::{Error, Result};
pub use graph::{SparseGraph, permute};
pub use numeric::{Index, Weight};
pub use search::{ParallelOptions, SearchOutcome};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
