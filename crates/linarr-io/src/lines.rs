//! Line reader shared by the file formats: skips `%` comments and blank lines and keeps the
//! 1-based line number for error messages.

use crate::error::{Error, Result};
use linarr::Index;
use std::io::BufRead;
use std::str::FromStr;

/// Upper bound on buffer preallocation from counts read out of a file header.
pub(crate) const PREALLOCATE_LIMIT: usize = 1 << 20;

pub(crate) struct DataLines<R> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> DataLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Next non-comment line split into tokens, or `None` at end of input.
    pub(crate) fn next_fields(&mut self) -> Result<Option<Fields<'_>>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let trimmed = self.buf.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }
            return Ok(Some(Fields {
                line: self.line_no,
                tokens: self.buf.split_whitespace(),
            }));
        }
    }

    pub(crate) fn expect_fields(&mut self, expected: &str) -> Result<Fields<'_>> {
        self.next_fields()?.ok_or_else(|| Error::UnexpectedEof {
            expected: expected.to_string(),
        })
    }
}

pub(crate) struct Fields<'a> {
    line: usize,
    tokens: std::str::SplitWhitespace<'a>,
}

impl Fields<'_> {
    pub(crate) fn error(&self, message: impl Into<String>) -> Error {
        Error::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    pub(crate) fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let Some(token) = self.tokens.next() else {
            return Err(self.error(format!("missing {what}")));
        };
        token
            .parse::<T>()
            .map_err(|_| self.error(format!("invalid {what}: {token:?}")))
    }

    /// Reads a 1-based index bounded by `bound` and returns it 0-based.
    pub(crate) fn next_index<I: Index>(&mut self, what: &str, bound: usize) -> Result<I> {
        let one_based: usize = self.next(what)?;
        if one_based == 0 || one_based > bound {
            return Err(self.error(format!("{what} {one_based} is outside 1..={bound}")));
        }
        I::from_position(one_based - 1)
            .ok_or_else(|| self.error(format!("{what} {one_based} does not fit the index type")))
    }
}
