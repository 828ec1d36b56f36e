//! Permutation checks shared by the graph operators and the heuristics.
//!
//! A permutation is either a full relabeling of `0..bound` or a shorter selection of distinct
//! indices from `0..bound` (a projection).

use crate::error::{Error, Result};
use crate::numeric::Index;

/// Checks that `p` is non-empty and holds distinct entries in `0..bound`.
pub fn validate<I: Index>(p: &[I], bound: usize) -> Result<()> {
    if p.is_empty() {
        return Err(Error::EmptyPermutation);
    }
    let mut seen = vec![false; bound];
    for &entry in p {
        let Some(k) = entry.to_position().filter(|&k| k < bound) else {
            return Err(Error::IndexOutOfRange {
                index: entry.to_string(),
                bound,
            });
        };
        if std::mem::replace(&mut seen[k], true) {
            return Err(Error::DuplicateIndex { index: k });
        }
    }
    Ok(())
}

/// Like [`validate`], but also requires `p` to cover all of `0..n`.
pub fn validate_full<I: Index>(p: &[I], n: usize) -> Result<()> {
    if p.len() != n {
        return Err(Error::LengthMismatch {
            what: "sequence",
            expected: n,
            actual: p.len(),
        });
    }
    validate(p, n)
}

pub fn is_permutation<I: Index>(p: &[I], n: usize) -> bool {
    validate_full(p, n).is_ok()
}

/// `[0, 1, ..., n-1]` in the index type.
pub fn identity<I: Index>(n: usize) -> Result<Vec<I>> {
    (0..n)
        .map(|k| I::from_position(k).ok_or(Error::IndexOverflow { value: k }))
        .collect()
}

/// `inverse[p[i]] = i`, for a full permutation of `0..p.len()`.
pub fn inverse<I: Index>(p: &[I]) -> Result<Vec<I>> {
    validate_full(p, p.len())?;
    let mut out = vec![I::zero(); p.len()];
    let mut k = I::zero();
    for &entry in p {
        out[entry.position()] = k;
        k = k + I::one();
    }
    Ok(out)
}
