//! Data-parallel variant of the pairwise-swap search.
//!
//! The outer swap index `i` of a round is split across a fixed number of workers. Inner loops
//! shrink as `i` grows, so each worker takes one block from the low end of `0..n/2` and the
//! mirrored block from the high end, which evens out the number of evaluations per worker.
//! Workers scan private copies of the sequence; the reduction picks the cheapest candidate and
//! breaks ties by scan position, so the applied swap is the one the sequential search picks.

use super::{Candidate, SearchOutcome, check_inputs, cost_of, descend, scan_rows};
use crate::error::Result;
use crate::graph::SparseGraph;
use crate::numeric::{Index, Weight};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallelOptions {
    /// Worker count. `None` (or `0`) uses the available hardware parallelism.
    pub workers: Option<usize>,
}

impl ParallelOptions {
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: Some(workers),
        }
    }

    pub fn resolved_workers(&self) -> usize {
        self.workers.filter(|&w| w > 0).unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        })
    }
}

/// Outer-index ranges scanned by one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerRanges {
    pub primary: Range<usize>,
    pub secondary: Range<usize>,
}

impl WorkerRanges {
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.primary.clone().chain(self.secondary.clone())
    }
}

/// Ranges of worker `worker` out of `workers` for a sequence of length `n`.
///
/// With `range = round(n / 2P)` and `mid = n / 2`, the primary block is
/// `[worker * range, finish)` where `finish` is `mid` for the last worker, and the secondary
/// block mirrors it: `[max(n-1-finish, finish), n-1-worker*range)`. Blocks may be empty; the
/// union over all workers is `0..n-1`.
pub fn partition(n: usize, workers: usize, worker: usize) -> WorkerRanges {
    let workers = workers.max(1);
    let range = (n as f64 / (2.0 * workers as f64)).round() as usize;
    let mid = n / 2;
    let last = n.saturating_sub(1);

    let start = worker * range;
    let finish = if worker + 1 == workers {
        mid
    } else {
        start + range
    };

    WorkerRanges {
        primary: start..finish,
        secondary: last.saturating_sub(finish).max(finish)..last.saturating_sub(start),
    }
}

struct WorkerPool {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl WorkerPool {
    fn new(opts: &ParallelOptions) -> Result<Self> {
        let workers = opts.resolved_workers();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("linarr-worker-{i}"))
            .build()?;
        tracing::debug!(workers, "worker pool ready");
        Ok(Self { pool, workers })
    }

    fn step<W: Weight, I: Index>(&self, g: &SparseGraph<W, I>, sequence: &mut [I]) -> W {
        let n = sequence.len();
        let current = cost_of(g, sequence);
        let shared: &[I] = sequence;

        let candidates: Vec<Candidate<W>> = self.pool.install(|| {
            (0..self.workers)
                .into_par_iter()
                .map(|worker| {
                    let ranges = partition(n, self.workers, worker);
                    let mut local = shared.to_vec();
                    let mut best = Candidate::stay(current);
                    scan_rows(g, &mut local, ranges.primary, &mut best);
                    scan_rows(g, &mut local, ranges.secondary, &mut best);
                    best
                })
                .collect()
        });

        let best = candidates
            .into_iter()
            .reduce(|acc, c| if c.precedes(&acc) { c } else { acc })
            .unwrap_or(Candidate::stay(current));
        if best.i != best.j {
            sequence.swap(best.i, best.j);
        }
        best.cost
    }
}

/// Parallel counterpart of [`super::local::select_best_neighbor`].
///
/// Builds a worker pool for this single round; [`search`] keeps one pool for all its rounds.
pub fn select_best_neighbor<W: Weight, I: Index>(
    g: &SparseGraph<W, I>,
    sequence: &mut [I],
    opts: &ParallelOptions,
) -> Result<W> {
    check_inputs(g, sequence)?;
    Ok(WorkerPool::new(opts)?.step(g, sequence))
}

/// Parallel counterpart of [`super::local::search`]; returns the same outcome for any worker
/// count.
pub fn search<W: Weight, I: Index>(
    g: &SparseGraph<W, I>,
    initial: Vec<I>,
    opts: &ParallelOptions,
) -> Result<SearchOutcome<W, I>> {
    check_inputs(g, &initial)?;
    let pool = WorkerPool::new(opts)?;
    descend(g, initial, |g, sequence| Ok(pool.step(g, sequence)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::local;

    fn covered(n: usize, workers: usize) -> Vec<usize> {
        let mut hits = vec![0usize; n.saturating_sub(1)];
        for w in 0..workers {
            for i in partition(n, workers, w).rows() {
                if i < hits.len() {
                    hits[i] += 1;
                }
            }
        }
        hits
    }

    #[test]
    fn partition_covers_every_outer_index() {
        for n in 0..80 {
            for workers in 1..=9 {
                let hits = covered(n, workers);
                assert!(
                    hits.iter().all(|&h| h > 0),
                    "n={n} workers={workers} hits={hits:?}"
                );
            }
        }
    }

    #[test]
    fn partition_mirrors_blocks() {
        // n = 20, P = 2: range = 5, mid = 10.
        assert_eq!(
            partition(20, 2, 0),
            WorkerRanges {
                primary: 0..5,
                secondary: 14..19
            }
        );
        assert_eq!(
            partition(20, 2, 1),
            WorkerRanges {
                primary: 5..10,
                secondary: 10..14
            }
        );
    }

    #[test]
    fn single_worker_scans_everything_once() {
        let r = partition(9, 1, 0);
        assert_eq!(r.primary, 0..4);
        assert_eq!(r.secondary, 4..8);
    }

    #[test]
    fn zero_workers_fall_back_to_hardware() {
        assert!(ParallelOptions::with_workers(0).resolved_workers() >= 1);
        assert_eq!(ParallelOptions::with_workers(3).resolved_workers(), 3);
    }

    #[test]
    fn options_deserialize_from_json() {
        let opts: ParallelOptions = serde_json::from_str(r#"{"workers": 4}"#).unwrap();
        assert_eq!(opts, ParallelOptions::with_workers(4));
        let opts: ParallelOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.workers, None);
    }

    #[test]
    fn round_matches_sequential_choice_with_ties() {
        // Every edge has the same weight, so many swaps tie.
        let g: SparseGraph<f64, u32> = SparseGraph::from_triplets(
            6,
            6,
            &[(0, 5, 1.0), (1, 4, 1.0), (2, 3, 1.0), (0, 1, 1.0)],
        )
        .unwrap();
        let mut expected = vec![0u32, 1, 2, 3, 4, 5];
        let expected_cost = local::select_best_neighbor(&g, &mut expected).unwrap();
        for workers in [1, 2, 3, 4, 8] {
            let mut seq = vec![0u32, 1, 2, 3, 4, 5];
            let cost =
                select_best_neighbor(&g, &mut seq, &ParallelOptions::with_workers(workers)).unwrap();
            assert_eq!(seq, expected, "workers={workers}");
            assert_eq!(cost, expected_cost);
        }
    }
}
