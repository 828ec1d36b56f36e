#![forbid(unsafe_code)]

//! File formats consumed and produced by `linarr`: coordinate sparse matrices and arrangement
//! sequences. Indices are 1-based on disk and 0-based in memory.

pub mod error;
mod lines;
pub mod mtx;
pub mod sequence;

pub use error::{Error, Result};
pub use mtx::{read_graph, read_pattern_graph};
pub use sequence::{SequenceFile, read_sequence, write_sequence};

use linarr::{Index, SparseGraph, Weight};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub fn load_graph<W, I>(path: impl AsRef<Path>) -> Result<SparseGraph<W, I>>
where
    W: Weight + FromStr,
    I: Index,
{
    let path = path.as_ref();
    let g = read_graph(open(path)?)?;
    tracing::info!(path = %path.display(), rows = g.rows(), cols = g.cols(), nnz = g.nnz(), "graph loaded");
    Ok(g)
}

pub fn load_pattern_graph<W, I>(path: impl AsRef<Path>) -> Result<SparseGraph<W, I>>
where
    W: Weight + FromStr,
    I: Index,
{
    let path = path.as_ref();
    let g = read_pattern_graph(open(path)?)?;
    tracing::info!(path = %path.display(), rows = g.rows(), cols = g.cols(), nnz = g.nnz(), "pattern graph loaded");
    Ok(g)
}

pub fn load_sequence<W, I>(path: impl AsRef<Path>) -> Result<SequenceFile<W, I>>
where
    W: Weight + FromStr,
    I: Index,
{
    let path = path.as_ref();
    let file = read_sequence(open(path)?)?;
    tracing::info!(path = %path.display(), len = file.sequence.len(), cost = %file.cost, "sequence loaded");
    Ok(file)
}

pub fn save_sequence<W, I>(path: impl AsRef<Path>, cost: W, sequence: &[I]) -> Result<()>
where
    W: Weight,
    I: Index,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_sequence(BufWriter::new(file), cost, sequence)?;
    tracing::info!(path = %path.display(), len = sequence.len(), "sequence written");
    Ok(())
}
