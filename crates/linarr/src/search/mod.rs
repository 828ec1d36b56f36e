//! Steepest-descent search over pairwise swaps of an ordering.
//!
//! Every round evaluates all `n * (n - 1) / 2` transpositions of the current sequence and
//! applies the one with the strictly lowest cost. The tracked minimum starts at the cost of the
//! current sequence, so a round that finds no cheaper neighbor leaves the sequence unchanged.
//! The search stops at the first round that does not lower the best cost seen so far.

pub mod local;
pub mod parallel;

pub use local::{search, select_best_neighbor};
pub use parallel::{ParallelOptions, WorkerRanges, partition};

use crate::cost::arrangement_cost;
use crate::error::{Error, Result};
use crate::graph::SparseGraph;
use crate::numeric::{Index, Weight};
use crate::permutation;
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<W, I> {
    pub sequence: Vec<I>,
    pub cost: W,
    /// Rounds executed, including the final non-improving one.
    pub rounds: usize,
}

/// Best swap seen by one scan. `i == j` means "no move".
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate<W> {
    pub i: usize,
    pub j: usize,
    pub cost: W,
}

impl<W: Weight> Candidate<W> {
    pub(crate) fn stay(cost: W) -> Self {
        Self { i: 0, j: 0, cost }
    }

    /// True if `self` would be found before `other` by a sequential scan.
    pub(crate) fn precedes(&self, other: &Self) -> bool {
        self.cost < other.cost || (self.cost == other.cost && (self.i, self.j) < (other.i, other.j))
    }
}

/// Checks that the graph is square and `sequence` is a full permutation of its nodes.
pub(crate) fn check_inputs<W: Weight, I: Index>(
    g: &SparseGraph<W, I>,
    sequence: &[I],
) -> Result<()> {
    if !g.is_square() {
        return Err(Error::NotSquare {
            rows: g.rows(),
            cols: g.cols(),
        });
    }
    if g.num_nodes() == 0 && sequence.is_empty() {
        return Ok(());
    }
    permutation::validate_full(sequence, g.num_nodes())
}

pub(crate) fn cost_of<W: Weight, I: Index>(g: &SparseGraph<W, I>, sequence: &[I]) -> W {
    if sequence.is_empty() {
        return W::zero();
    }
    arrangement_cost(&g.permute_unchecked(sequence))
}

/// Evaluates every swap `(i, j)` with `i` in `rows` and `i < j < n`, keeping the first strictly
/// cheaper one. `sequence` is restored before returning.
pub(crate) fn scan_rows<W: Weight, I: Index>(
    g: &SparseGraph<W, I>,
    sequence: &mut [I],
    rows: Range<usize>,
    best: &mut Candidate<W>,
) {
    let n = sequence.len();
    for i in rows {
        for j in (i + 1)..n {
            sequence.swap(i, j);
            let cost = cost_of(g, sequence);
            if cost < best.cost {
                *best = Candidate { i, j, cost };
            }
            sequence.swap(i, j);
        }
    }
}

/// Runs rounds of `step` until one fails to lower the best cost.
pub(crate) fn descend<W, I, F>(
    g: &SparseGraph<W, I>,
    mut sequence: Vec<I>,
    mut step: F,
) -> Result<SearchOutcome<W, I>>
where
    W: Weight,
    I: Index,
    F: FnMut(&SparseGraph<W, I>, &mut Vec<I>) -> Result<W>,
{
    let mut min_cost = cost_of(g, &sequence);
    let mut rounds = 0usize;
    tracing::debug!(nodes = g.num_nodes(), nnz = g.nnz(), cost = %min_cost, "search start");

    let cost = loop {
        let new_cost = step(g, &mut sequence)?;
        rounds += 1;
        tracing::debug!(round = rounds, cost = %new_cost, "search round");
        if new_cost < min_cost {
            min_cost = new_cost;
        } else {
            break new_cost;
        }
    };

    tracing::info!(rounds, cost = %cost, "search finished");
    Ok(SearchOutcome {
        sequence,
        cost,
        rounds,
    })
}
