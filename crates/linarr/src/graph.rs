//! Weighted graph stored as a compressed sparse column matrix.
//!
//! Column `j` owns the half-open slot range `col_ptr[j]..col_ptr[j + 1]` of the parallel
//! `row_idx` / `values` arrays. For an arrangement the column axis is read as the position axis
//! and the row axis as node identity; after [`SparseGraph::permute`] both axes are in position
//! space and the cost of an entry is `weight * |col - row|`.

use crate::error::{Error, Result};
use crate::numeric::{Index, Weight};
use crate::permutation;
use std::fmt;
use std::ops::Range;

/// Checks that a `rows x cols` shape is addressable with index type `I`.
///
/// Both counts must convert to `I`, and `cols + 1` column pointers must be countable.
pub fn check_dimensions<I: Index>(rows: usize, cols: usize) -> Result<()> {
    for axis in [rows, cols] {
        if axis == usize::MAX || I::from_position(axis).is_none() {
            return Err(Error::IndexOverflow { value: axis });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SparseGraph<W, I> {
    rows: usize,
    cols: usize,
    col_ptr: Vec<usize>,
    row_idx: Vec<I>,
    values: Vec<W>,
}

impl<W: Weight, I: Index> SparseGraph<W, I> {
    /// Builds a graph from raw CSC arrays, checking every storage invariant.
    pub fn new(
        rows: usize,
        cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<I>,
        values: Vec<W>,
    ) -> Result<Self> {
        check_dimensions::<I>(rows, cols)?;
        if col_ptr.len() != cols + 1 {
            return Err(Error::LengthMismatch {
                what: "column pointers",
                expected: cols + 1,
                actual: col_ptr.len(),
            });
        }
        if values.len() != row_idx.len() {
            return Err(Error::LengthMismatch {
                what: "values",
                expected: row_idx.len(),
                actual: values.len(),
            });
        }
        let first = col_ptr[0];
        let last = col_ptr[cols];
        if first != 0 || last != row_idx.len() {
            return Err(Error::ColumnPointerBounds {
                first,
                last,
                nnz: row_idx.len(),
            });
        }
        if let Some(col) = col_ptr.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::NonMonotonicColumnPointers { col });
        }
        for &r in &row_idx {
            if r.to_position().is_none_or(|k| k >= rows) {
                return Err(Error::IndexOutOfRange {
                    index: r.to_string(),
                    bound: rows,
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            col_ptr,
            row_idx,
            values,
        })
    }

    /// Aggregates `(row, col, weight)` coordinates into column form.
    ///
    /// Entries of one column keep their input order.
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(I, I, W)]) -> Result<Self> {
        check_dimensions::<I>(rows, cols)?;
        let mut col_ptr = vec![0usize; cols + 1];
        for &(r, c, _) in triplets {
            if r.to_position().is_none_or(|k| k >= rows) {
                return Err(Error::IndexOutOfRange {
                    index: r.to_string(),
                    bound: rows,
                });
            }
            match c.to_position() {
                Some(k) if k < cols => col_ptr[k + 1] += 1,
                _ => {
                    return Err(Error::IndexOutOfRange {
                        index: c.to_string(),
                        bound: cols,
                    });
                }
            }
        }
        for j in 0..cols {
            col_ptr[j + 1] += col_ptr[j];
        }

        let mut next = col_ptr.clone();
        let mut row_idx = vec![I::zero(); triplets.len()];
        let mut values = vec![W::zero(); triplets.len()];
        for &(r, c, w) in triplets {
            let slot = &mut next[c.position()];
            row_idx[*slot] = r;
            values[*slot] = w;
            *slot += 1;
        }

        Self::new(rows, cols, col_ptr, row_idx, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn nnz(&self) -> usize {
        self.row_idx.len()
    }

    /// Number of arrangement positions (the column count).
    pub fn num_nodes(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn col_ptr(&self) -> &[usize] {
        &self.col_ptr
    }

    pub fn row_idx(&self) -> &[I] {
        &self.row_idx
    }

    pub fn values(&self) -> &[W] {
        &self.values
    }

    fn slots(&self, col: usize) -> Range<usize> {
        self.col_ptr[col]..self.col_ptr[col + 1]
    }

    /// `(row, weight)` pairs stored in column `col`, in storage order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (I, W)> + '_ {
        let slots = if col < self.cols {
            self.slots(col)
        } else {
            0..0
        };
        self.row_idx[slots.clone()]
            .iter()
            .copied()
            .zip(self.values[slots].iter().copied())
    }

    /// `(row, col, weight)` for every stored entry, column-major.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        (0..self.cols).flat_map(move |col| {
            self.slots(col)
                .map(move |k| (self.row_idx[k].position(), col, self.values[k]))
        })
    }

    /// Output column `j` is a verbatim copy of column `p[j]`.
    pub fn apply_column_permutation(&self, p: &[I]) -> Result<Self> {
        permutation::validate(p, self.cols)?;
        Ok(self.permute_columns(p))
    }

    /// Relabels (`p.len() == rows`) or projects (`p.len() < rows`) the row axis.
    ///
    /// Row `p[i]` becomes row `i`. A projection drops every entry whose row is not listed.
    pub fn apply_row_permutation(&self, p: &[I]) -> Result<Self> {
        if p.len() > self.rows {
            return Err(Error::PermutationTooLong {
                len: p.len(),
                rows: self.rows,
            });
        }
        permutation::validate(p, self.rows)?;
        Ok(self.permute_rows(p))
    }

    /// Moves node `p[k]` to position `k` on both axes.
    pub fn permute(&self, p: &[I]) -> Result<Self> {
        self.apply_column_permutation(p)?.apply_row_permutation(p)
    }

    pub fn permute_asymmetric(&self, row_perm: &[I], col_perm: &[I]) -> Result<Self> {
        self.apply_column_permutation(col_perm)?
            .apply_row_permutation(row_perm)
    }

    /// [`SparseGraph::permute`] for sequences the caller has already validated.
    pub(crate) fn permute_unchecked(&self, p: &[I]) -> Self {
        self.permute_columns(p).permute_rows(p)
    }

    fn permute_columns(&self, p: &[I]) -> Self {
        let mut col_ptr = Vec::with_capacity(p.len() + 1);
        col_ptr.push(0);
        let mut total = 0;
        for &c in p {
            total += self.slots(c.position()).len();
            col_ptr.push(total);
        }

        let mut row_idx = Vec::with_capacity(total);
        let mut values = Vec::with_capacity(total);
        for &c in p {
            let slots = self.slots(c.position());
            row_idx.extend_from_slice(&self.row_idx[slots.clone()]);
            values.extend_from_slice(&self.values[slots]);
        }

        Self {
            rows: self.rows,
            cols: p.len(),
            col_ptr,
            row_idx,
            values,
        }
    }

    fn permute_rows(&self, p: &[I]) -> Self {
        if p.len() == self.rows {
            self.relabel_rows(p)
        } else {
            self.project_rows(p)
        }
    }

    fn relabel_rows(&self, p: &[I]) -> Self {
        let mut h = vec![I::zero(); self.rows];
        let mut k = I::zero();
        for &r in p {
            h[r.position()] = k;
            k = k + I::one();
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            col_ptr: self.col_ptr.clone(),
            row_idx: self.row_idx.iter().map(|r| h[r.position()]).collect(),
            values: self.values.clone(),
        }
    }

    fn project_rows(&self, p: &[I]) -> Self {
        let mut h: Vec<Option<I>> = vec![None; self.rows];
        let mut k = I::zero();
        for &r in p {
            h[r.position()] = Some(k);
            k = k + I::one();
        }

        let mut col_ptr = Vec::with_capacity(self.cols + 1);
        col_ptr.push(0);
        let mut kept = 0;
        for col in 0..self.cols {
            kept += self.row_idx[self.slots(col)]
                .iter()
                .filter(|r| h[r.position()].is_some())
                .count();
            col_ptr.push(kept);
        }

        let mut row_idx = Vec::with_capacity(kept);
        let mut values = Vec::with_capacity(kept);
        for (r, &w) in self.row_idx.iter().zip(&self.values) {
            if let Some(mapped) = h[r.position()] {
                row_idx.push(mapped);
                values.push(w);
            }
        }

        Self {
            rows: p.len(),
            cols: self.cols,
            col_ptr,
            row_idx,
            values,
        }
    }
}

/// `g.permute(p)` as a free function.
pub fn permute<W: Weight, I: Index>(g: &SparseGraph<W, I>, p: &[I]) -> Result<SparseGraph<W, I>> {
    g.permute(p)
}

impl<W: Weight, I: Index> fmt::Display for SparseGraph<W, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, col, w) in self.entries() {
            writeln!(f, "({row}, {col})\t{w}")?;
        }
        Ok(())
    }
}
