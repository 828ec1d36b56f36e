//! Coordinate sparse matrix files.
//!
//! ```text
//! % comment lines start with '%'
//! rows cols nnz
//! row col weight      (nnz lines, 1-based)
//! ```
//!
//! The pattern variant omits the weight column; every entry then weighs 1. Entries may appear in
//! any order; they are grouped by column on load.

use crate::error::{Error, Result};
use crate::lines::{DataLines, PREALLOCATE_LIMIT};
use linarr::{Index, SparseGraph, Weight};
use std::io::BufRead;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entries {
    Weighted,
    Pattern,
}

pub fn read_graph<W, I, R>(reader: R) -> Result<SparseGraph<W, I>>
where
    W: Weight + FromStr,
    I: Index,
    R: BufRead,
{
    read(reader, Entries::Weighted)
}

pub fn read_pattern_graph<W, I, R>(reader: R) -> Result<SparseGraph<W, I>>
where
    W: Weight + FromStr,
    I: Index,
    R: BufRead,
{
    read(reader, Entries::Pattern)
}

fn read<W, I, R>(reader: R, kind: Entries) -> Result<SparseGraph<W, I>>
where
    W: Weight + FromStr,
    I: Index,
    R: BufRead,
{
    let mut lines = DataLines::new(reader);

    let (rows, cols, nnz) = {
        let mut header = lines.expect_fields("header `rows cols nnz`")?;
        let rows: usize = header.next("row count")?;
        let cols: usize = header.next("column count")?;
        let nnz: usize = header.next("entry count")?;
        (rows, cols, nnz)
    };
    linarr::graph::check_dimensions::<I>(rows, cols)?;

    let mut triplets: Vec<(I, I, W)> = Vec::with_capacity(nnz.min(PREALLOCATE_LIMIT));
    for k in 0..nnz {
        let Some(mut fields) = lines.next_fields()? else {
            return Err(Error::UnexpectedEof {
                expected: format!("{nnz} entries, found {k}"),
            });
        };
        let row = fields.next_index::<I>("row", rows)?;
        let col = fields.next_index::<I>("column", cols)?;
        let weight = match kind {
            Entries::Weighted => {
                let w: W = fields.next("weight")?;
                if w.is_nan() || w < W::zero() {
                    return Err(fields.error(format!("weight {w} must be a non-negative number")));
                }
                w
            }
            Entries::Pattern => W::one(),
        };
        triplets.push((row, col, weight));
    }

    Ok(SparseGraph::from_triplets(rows, cols, &triplets)?)
}
