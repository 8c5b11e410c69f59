use std::path::PathBuf;
use thiserror::Error;

pub type PalindromeResult<T> = Result<T, PalindromeError>;

#[derive(Error, Debug)]
pub enum PalindromeError {
    #[error("dictionary source unavailable at {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading dictionary entries from {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing palindromes to {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
