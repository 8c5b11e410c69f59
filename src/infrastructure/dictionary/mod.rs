pub mod types;
pub mod wordnet;

pub use types::{EntryIter, LexicalSource, PartOfSpeech};
pub use wordnet::WordNetDictionary;
