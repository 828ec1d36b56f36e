//! Arrangement sequence files.
//!
//! ```text
//! % comment lines start with '%'
//! n cost
//! node                (n lines, 1-based)
//! ```

use crate::error::{Error, Result};
use crate::lines::{DataLines, PREALLOCATE_LIMIT};
use linarr::{Index, Weight, permutation};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// A sequence together with the cost recorded next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceFile<W, I> {
    pub sequence: Vec<I>,
    pub cost: W,
}

pub fn read_sequence<W, I, R>(reader: R) -> Result<SequenceFile<W, I>>
where
    W: Weight + FromStr,
    I: Index,
    R: BufRead,
{
    let mut lines = DataLines::new(reader);

    let (n, cost) = {
        let mut header = lines.expect_fields("header `n cost`")?;
        let n: usize = header.next("sequence length")?;
        let cost: W = header.next("cost")?;
        (n, cost)
    };
    linarr::graph::check_dimensions::<I>(n, n)?;

    let mut sequence = Vec::with_capacity(n.min(PREALLOCATE_LIMIT));
    for k in 0..n {
        let Some(mut fields) = lines.next_fields()? else {
            return Err(Error::UnexpectedEof {
                expected: format!("{n} sequence entries, found {k}"),
            });
        };
        sequence.push(fields.next_index::<I>("node", n)?);
    }
    if n > 0 {
        permutation::validate_full(&sequence, n)?;
    }

    Ok(SequenceFile { sequence, cost })
}

/// Writes `n cost` (cost with six decimals) followed by the 1-based nodes.
pub fn write_sequence<W, I, Wr>(mut writer: Wr, cost: W, sequence: &[I]) -> Result<()>
where
    W: Weight,
    I: Index,
    Wr: Write,
{
    if !sequence.is_empty() {
        permutation::validate_full(sequence, sequence.len())?;
    }
    writeln!(writer, "{} {:.6}", sequence.len(), cost)?;
    for &node in sequence {
        writeln!(writer, "{}", node.position() + 1)?;
    }
    writer.flush()?;
    Ok(())
}
