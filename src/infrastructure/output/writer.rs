use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PalindromeError, PalindromeResult};

pub struct PalindromeWriter {
    path: PathBuf,
}

impl PalindromeWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Truncates the target. One word per line, no newline after the last one.
    pub fn write(&self, words: &[String]) -> PalindromeResult<usize> {
        let file = File::create(&self.path).map_err(|source| self.failure(source))?;
        let mut out = BufWriter::new(file);

        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                out.write_all(b"\n").map_err(|source| self.failure(source))?;
            }
            out.write_all(word.as_bytes())
                .map_err(|source| self.failure(source))?;
        }
        out.flush().map_err(|source| self.failure(source))?;

        log::info!(
            "palindromes.written={} path={}",
            words.len(),
            self.path.display()
        );
        Ok(words.len())
    }

    fn failure(&self, source: std::io::Error) -> PalindromeError {
        PalindromeError::WriteFailure {
            path: self.path.clone(),
            source,
        }
    }
}
