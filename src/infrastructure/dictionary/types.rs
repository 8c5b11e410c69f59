use std::fmt;

use crate::error::PalindromeResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    pub fn index_file_name(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "index.noun",
            PartOfSpeech::Verb => "index.verb",
            PartOfSpeech::Adjective => "index.adj",
            PartOfSpeech::Adverb => "index.adv",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        };
        f.write_str(name)
    }
}

pub type EntryIter<'a> = Box<dyn Iterator<Item = PalindromeResult<String>> + 'a>;

/// A read-only source of raw lemmas grouped by grammatical category.
///
/// Each call to `entries` yields a fresh single-pass sequence; callers should
/// not assume any ordering.
pub trait LexicalSource {
    fn categories(&self) -> Vec<PartOfSpeech>;

    fn entries(&self, category: PartOfSpeech) -> PalindromeResult<EntryIter<'_>>;
}
