use super::{Candidate, SearchOutcome, check_inputs, cost_of, descend, scan_rows};
use crate::error::Result;
use crate::graph::SparseGraph;
use crate::numeric::{Index, Weight};

/// Applies the cheapest single swap of `sequence` and returns the resulting cost.
///
/// Ties go to the first pair in `(i, j)` scan order. If no swap beats the current cost the
/// sequence is left as is.
pub fn select_best_neighbor<W: Weight, I: Index>(
    g: &SparseGraph<W, I>,
    sequence: &mut [I],
) -> Result<W> {
    check_inputs(g, sequence)?;
    Ok(best_neighbor_step(g, sequence))
}

fn best_neighbor_step<W: Weight, I: Index>(g: &SparseGraph<W, I>, sequence: &mut [I]) -> W {
    let n = sequence.len();
    let mut best = Candidate::stay(cost_of(g, sequence));
    scan_rows(g, sequence, 0..n.saturating_sub(1), &mut best);
    if best.i != best.j {
        sequence.swap(best.i, best.j);
    }
    best.cost
}

/// Sequential steepest-descent search starting from `initial`.
pub fn search<W: Weight, I: Index>(
    g: &SparseGraph<W, I>,
    initial: Vec<I>,
) -> Result<SearchOutcome<W, I>> {
    check_inputs(g, &initial)?;
    descend(g, initial, |g, sequence| Ok(best_neighbor_step(g, sequence)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_tail() -> SparseGraph<f64, u32> {
        SparseGraph::from_triplets(
            4,
            4,
            &[(0, 1, 3.0), (1, 2, 1.0), (0, 2, 1.0), (2, 3, 2.0)],
        )
        .unwrap()
    }

    #[test]
    fn best_neighbor_applies_cheapest_swap() {
        let g: SparseGraph<f64, u32> =
            SparseGraph::from_triplets(3, 3, &[(0, 2, 5.0)]).unwrap();
        let mut seq = vec![0u32, 1, 2];
        let cost = select_best_neighbor(&g, &mut seq).unwrap();
        // (0,1) -> [1,0,2] cost 5, (0,2) -> [2,1,0] cost 10, (1,2) -> [0,2,1] cost 5.
        assert_eq!(seq, vec![1, 0, 2]);
        assert_eq!(cost, 5.0);
    }

    #[test]
    fn best_neighbor_stays_put_at_a_local_minimum() {
        let g: SparseGraph<f64, u32> =
            SparseGraph::from_triplets(3, 3, &[(0, 1, 1.0)]).unwrap();
        let mut seq = vec![0u32, 1, 2];
        let cost = select_best_neighbor(&g, &mut seq).unwrap();
        assert_eq!(seq, vec![0, 1, 2]);
        assert_eq!(cost, 1.0);
    }

    #[test]
    fn search_rejects_bad_sequences() {
        let g = triangle_plus_tail();
        assert!(search(&g, vec![0, 1, 2]).is_err());
        assert!(search(&g, vec![0, 1, 2, 2]).is_err());
    }

    #[test]
    fn search_on_trivial_graphs() {
        let empty: SparseGraph<f64, u32> = SparseGraph::new(0, 0, vec![0], vec![], vec![]).unwrap();
        let out = search(&empty, vec![]).unwrap();
        assert_eq!(out.sequence, Vec::<u32>::new());
        assert_eq!(out.cost, 0.0);

        let single: SparseGraph<f64, u32> = SparseGraph::new(1, 1, vec![0, 0], vec![], vec![]).unwrap();
        let out = search(&single, vec![0]).unwrap();
        assert_eq!(out.sequence, vec![0]);
        assert_eq!(out.rounds, 1);
    }

    #[test]
    fn search_never_worsens_the_start() {
        let g = triangle_plus_tail();
        let start = vec![3u32, 0, 2, 1];
        let before = cost_of(&g, &start);
        let out = search(&g, start).unwrap();
        assert!(out.cost <= before);
        assert_eq!(out.cost, cost_of(&g, &out.sequence));
    }
}
