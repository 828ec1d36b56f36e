//! Successive augmentation: a constructive ordering built from the center outward.
//!
//! The middle one or two nodes of the initial sequence seed the ordering. Nodes are then taken
//! alternately from the left and right halves of the initial sequence, moving outward; each
//! new node is appended and slid left through every position, and it stays where the partial
//! arrangement (restricted to the nodes placed so far) was cheapest.

use crate::error::Result;
use crate::graph::SparseGraph;
use crate::numeric::{Index, Weight};
use crate::search::{check_inputs, cost_of};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugmentOutcome<W, I> {
    pub sequence: Vec<I>,
    pub cost: W,
}

pub fn successive_augmentation<W: Weight, I: Index>(
    g: &SparseGraph<W, I>,
    initial: &[I],
) -> Result<AugmentOutcome<W, I>> {
    check_inputs(g, initial)?;
    let n = initial.len();
    if n == 0 {
        return Ok(AugmentOutcome {
            sequence: Vec::new(),
            cost: W::zero(),
        });
    }

    let (left_mid, right_mid) = if n % 2 == 1 {
        (n / 2, n / 2)
    } else {
        (n / 2 - 1, n / 2)
    };

    let mut sequence = Vec::with_capacity(n);
    sequence.push(initial[left_mid]);
    if right_mid != left_mid {
        sequence.push(initial[right_mid]);
    }

    for k in 0..left_mid {
        insert_cheapest(g, &mut sequence, initial[left_mid - 1 - k]);
        insert_cheapest(g, &mut sequence, initial[right_mid + 1 + k]);
    }

    let cost = cost_of(g, &sequence);
    tracing::info!(nodes = n, cost = %cost, "successive augmentation finished");
    Ok(AugmentOutcome { sequence, cost })
}

/// Appends `node` and moves it to the first position (scanning right to left) with the
/// strictly lowest partial cost.
fn insert_cheapest<W: Weight, I: Index>(g: &SparseGraph<W, I>, sequence: &mut Vec<I>, node: I) {
    sequence.push(node);
    let len = sequence.len();
    let mut best_pos = len - 1;
    let mut min_cost = cost_of(g, sequence);

    for j in (1..len).rev() {
        sequence.swap(j, j - 1);
        let cost = cost_of(g, sequence);
        if cost < min_cost {
            min_cost = cost;
            best_pos = j - 1;
        }
    }

    // `node` is at the front now; everything else kept its relative order.
    sequence[..=best_pos].rotate_left(1);
    tracing::trace!(placed = len, position = best_pos, cost = %min_cost, "inserted node");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::is_permutation;

    fn star(n: u32) -> SparseGraph<f64, u32> {
        let triplets: Vec<(u32, u32, f64)> = (1..n).map(|leaf| (0, leaf, 1.0)).collect();
        SparseGraph::from_triplets(n as usize, n as usize, &triplets).unwrap()
    }

    #[test]
    fn trivial_sizes() {
        let g: SparseGraph<f64, u32> = SparseGraph::new(1, 1, vec![0, 0], vec![], vec![]).unwrap();
        let out = successive_augmentation(&g, &[0]).unwrap();
        assert_eq!(out.sequence, vec![0]);

        let g: SparseGraph<f64, u32> = SparseGraph::from_triplets(2, 2, &[(0, 1, 1.0)]).unwrap();
        let out = successive_augmentation(&g, &[1, 0]).unwrap();
        assert_eq!(out.sequence, vec![1, 0]);
        assert_eq!(out.cost, 1.0);
    }

    #[test]
    fn insertion_keeps_rightmost_on_ties() {
        // No slot beats the tail for node 2, so it stays there.
        let g: SparseGraph<f64, u32> = SparseGraph::from_triplets(3, 3, &[(0, 1, 1.0)]).unwrap();
        let mut seq = vec![0u32, 1];
        insert_cheapest(&g, &mut seq, 2);
        assert_eq!(seq, vec![0, 1, 2]);
    }

    #[test]
    fn insertion_moves_next_to_neighbor() {
        // Node 2 only touches node 0.
        let g: SparseGraph<f64, u32> =
            SparseGraph::from_triplets(3, 3, &[(0, 2, 1.0), (1, 1, 1.0)]).unwrap();
        let mut seq = vec![1u32, 0];
        insert_cheapest(&g, &mut seq, 2);
        assert_eq!(seq, vec![1, 0, 2]);

        let mut seq = vec![0u32, 1];
        insert_cheapest(&g, &mut seq, 2);
        // Slots: [0,1,2] costs 2, [0,2,1] costs 1, [2,0,1] costs 1 -> first strictly lower wins.
        assert_eq!(seq, vec![0, 2, 1]);
    }

    #[test]
    fn star_center_is_surrounded_by_leaves() {
        let g = star(5);
        let out = successive_augmentation(&g, &[1, 2, 0, 3, 4]).unwrap();
        assert!(is_permutation(&out.sequence, 5));
        // Optimal cost for a 4-leaf star with one stored entry per edge: 1 + 1 + 2 + 2.
        assert_eq!(out.cost, 6.0);
        assert_eq!(out.sequence[2], 0);
    }

    #[test]
    fn output_is_a_permutation_for_odd_and_even_sizes() {
        for n in 1..12u32 {
            let g = star(n);
            let initial: Vec<u32> = (0..n).rev().collect();
            let out = successive_augmentation(&g, &initial).unwrap();
            assert!(is_permutation(&out.sequence, n as usize), "n={n}");
        }
    }
}
