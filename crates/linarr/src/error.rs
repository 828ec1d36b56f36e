#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("permutation must not be empty")]
    EmptyPermutation,

    #[error("permutation entry {index} is out of range (bound {bound})")]
    IndexOutOfRange { index: String, bound: usize },

    #[error("permutation entry {index} appears more than once")]
    DuplicateIndex { index: usize },

    #[error("row permutation has {len} entries but the graph only has {rows} rows")]
    PermutationTooLong { len: usize, rows: usize },

    #[error("{what}: expected length {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("column pointers must start at 0 and end at nnz={nnz} (got {first}..{last})")]
    ColumnPointerBounds {
        first: usize,
        last: usize,
        nnz: usize,
    },

    #[error("column pointers decrease at column {col}")]
    NonMonotonicColumnPointers { col: usize },

    #[error("value {value} does not fit in the index type")]
    IndexOverflow { value: usize },

    #[error("arrangement heuristics need a square graph (got {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
