#![allow(dead_code)]

use linarr::SparseGraph;

/// Path `0 - 1 - ... - (n-1)` with one stored entry per edge.
pub fn path(n: u32) -> SparseGraph<f64, u32> {
    let triplets: Vec<(u32, u32, f64)> = (1..n).map(|k| (k - 1, k, 1.0)).collect();
    SparseGraph::from_triplets(n as usize, n as usize, &triplets).unwrap()
}

/// Deterministic pseudo-random symmetric graph (xorshift64).
pub fn scrambled(n: u32, edges: usize, seed: u64) -> SparseGraph<f64, u32> {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut triplets = Vec::with_capacity(edges * 2);
    for _ in 0..edges {
        let a = (next() % n as u64) as u32;
        let b = (next() % n as u64) as u32;
        if a == b {
            continue;
        }
        let w = 1.0 + (next() % 7) as f64 * 0.25;
        triplets.push((a, b, w));
        triplets.push((b, a, w));
    }
    SparseGraph::from_triplets(n as usize, n as usize, &triplets).unwrap()
}

pub fn shuffled(n: u32, seed: u64) -> Vec<u32> {
    let mut seq: Vec<u32> = (0..n).collect();
    let mut state = seed.max(1);
    for i in (1..seq.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = (state % (i as u64 + 1)) as usize;
        seq.swap(i, j);
    }
    seq
}
