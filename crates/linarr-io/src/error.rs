use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error(transparent)]
    Core(#[from] linarr::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
