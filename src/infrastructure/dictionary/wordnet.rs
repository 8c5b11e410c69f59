use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{EntryIter, LexicalSource, PartOfSpeech};
use crate::error::{PalindromeError, PalindromeResult};

pub struct WordNetDictionary {
    dir: PathBuf,
}

impl WordNetDictionary {
    pub fn open(dir: impl AsRef<Path>) -> PalindromeResult<Self> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.is_dir() {
            return Err(PalindromeError::SourceUnavailable {
                source: io::Error::new(io::ErrorKind::NotFound, "dictionary directory not found"),
                path: dir,
            });
        }

        for pos in PartOfSpeech::ALL {
            let path = dir.join(pos.index_file_name());
            if !path.is_file() {
                return Err(PalindromeError::SourceUnavailable {
                    path,
                    source: io::Error::new(io::ErrorKind::NotFound, "index file not found"),
                });
            }
        }

        log::info!(
            "dictionary.opened dir={} categories={}",
            dir.display(),
            PartOfSpeech::ALL.len()
        );

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LexicalSource for WordNetDictionary {
    fn categories(&self) -> Vec<PartOfSpeech> {
        PartOfSpeech::ALL.to_vec()
    }

    fn entries(&self, category: PartOfSpeech) -> PalindromeResult<EntryIter<'_>> {
        let path = self.dir.join(category.index_file_name());
        let file = File::open(&path).map_err(|source| PalindromeError::SourceUnavailable {
            path: path.clone(),
            source,
        })?;

        Ok(Box::new(IndexEntries {
            path,
            reader: BufReader::new(file),
            buf: Vec::new(),
        }))
    }
}

struct IndexEntries {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
}

impl Iterator for IndexEntries {
    type Item = PalindromeResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    return Some(Err(PalindromeError::SourceRead {
                        path: self.path.clone(),
                        source,
                    }));
                }
            }

            // Undecodable bytes cost one lemma, not the whole file.
            let line = String::from_utf8_lossy(&self.buf);
            if let Cow::Owned(_) = line {
                log::warn!(
                    "dictionary.invalid_utf8 path={} line={:?}",
                    self.path.display(),
                    line.trim_end()
                );
            }

            if let Some(lemma) = parse_lemma(line.trim_end_matches(['\n', '\r'])) {
                return Some(Ok(lemma.to_string()));
            }
        }
    }
}

// License header lines are indented; every other line starts with its lemma.
fn parse_lemma(line: &str) -> Option<&str> {
    if line.starts_with(' ') {
        return None;
    }
    line.split_whitespace().next()
}
