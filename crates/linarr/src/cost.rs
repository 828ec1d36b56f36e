//! Linear arrangement cost.
//!
//! Both evaluators expect a graph whose row and column indices are already positions, i.e. the
//! output of [`SparseGraph::permute`].

use crate::error::Result;
use crate::graph::SparseGraph;
use crate::numeric::{Index, Weight};
use std::cmp::Ordering;

/// `Σ weight * |col - row|`, accumulated in storage order.
pub fn arrangement_cost<W: Weight, I: Index>(g: &SparseGraph<W, I>) -> W {
    g.entries().fold(W::zero(), |total, (row, col, w)| {
        total + w * W::from_distance(col.abs_diff(row))
    })
}

/// Same terms as [`arrangement_cost`], summed in ascending order.
///
/// The result does not depend on how entries are laid out in storage, so two graphs holding the
/// same entries in different column order produce bit-identical totals.
pub fn stable_arrangement_cost<W: Weight, I: Index>(g: &SparseGraph<W, I>) -> W {
    let mut terms: Vec<W> = g
        .entries()
        .map(|(row, col, w)| w * W::from_distance(col.abs_diff(row)))
        .collect();
    terms.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    terms.into_iter().fold(W::zero(), |total, t| total + t)
}

/// Cost of placing node `sequence[k]` at position `k`.
///
/// An empty sequence over a graph without nodes costs zero.
pub fn sequence_cost<W: Weight, I: Index>(g: &SparseGraph<W, I>, sequence: &[I]) -> Result<W> {
    if sequence.is_empty() && g.num_nodes() == 0 {
        return Ok(W::zero());
    }
    Ok(arrangement_cost(&g.permute(sequence)?))
}

/// [`sequence_cost`] with the order-independent summation of [`stable_arrangement_cost`].
pub fn stable_sequence_cost<W: Weight, I: Index>(
    g: &SparseGraph<W, I>,
    sequence: &[I],
) -> Result<W> {
    if sequence.is_empty() && g.num_nodes() == 0 {
        return Ok(W::zero());
    }
    Ok(stable_arrangement_cost(&g.permute(sequence)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path4() -> SparseGraph<f64, u32> {
        SparseGraph::from_triplets(
            4,
            4,
            &[(1, 0, 1.0), (0, 1, 1.0), (2, 1, 1.0), (1, 2, 1.0), (3, 2, 1.0), (2, 3, 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn empty_graph_costs_nothing() {
        let g: SparseGraph<f64, u32> = SparseGraph::new(0, 0, vec![0], vec![], vec![]).unwrap();
        assert_eq!(arrangement_cost(&g), 0.0);
        assert_eq!(stable_arrangement_cost(&g), 0.0);
    }

    #[test]
    fn diagonal_entries_cost_nothing() {
        let g: SparseGraph<f64, u32> =
            SparseGraph::from_triplets(2, 2, &[(0, 0, 9.0), (1, 1, 9.0)]).unwrap();
        assert_eq!(arrangement_cost(&g), 0.0);
    }

    #[test]
    fn weights_scale_distance() {
        let g: SparseGraph<f64, u32> =
            SparseGraph::from_triplets(4, 4, &[(0, 3, 2.0), (3, 0, 0.5)]).unwrap();
        assert_eq!(arrangement_cost(&g), 7.5);
        assert_eq!(stable_arrangement_cost(&g), 7.5);
    }

    #[test]
    fn path_costs_count_each_stored_entry() {
        let g = path4();
        // Both directions of every edge are stored.
        assert_eq!(sequence_cost(&g, &[0, 1, 2, 3]).unwrap(), 6.0);
        assert_eq!(sequence_cost(&g, &[1, 0, 2, 3]).unwrap(), 8.0);
        assert!(sequence_cost(&g, &[0, 1, 1, 3]).is_err());
    }

    #[test]
    fn sequence_costs_of_empty_graphs() {
        let g: SparseGraph<f64, u32> = SparseGraph::new(0, 0, vec![0], vec![], vec![]).unwrap();
        assert_eq!(sequence_cost(&g, &[]).unwrap(), 0.0);
        assert_eq!(stable_sequence_cost(&g, &[]).unwrap(), 0.0);
    }

    #[test]
    fn stable_cost_matches_storage_order_cost() {
        let g: SparseGraph<f64, u32> = SparseGraph::from_triplets(
            5,
            5,
            &[(4, 0, 0.1), (0, 4, 1e9), (2, 1, 0.3), (1, 3, 2.7), (3, 3, 5.0)],
        )
        .unwrap();
        let fast = arrangement_cost(&g);
        let stable = stable_arrangement_cost(&g);
        assert!((fast - stable).abs() <= 1e-6 * fast.abs());
    }
}
