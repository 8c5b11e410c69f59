pub const SEPARATOR: char = '_';
pub const MIN_RELEVANT_LEN: usize = 3;
pub const OUTPUT_PATH: &str = "palindromes.txt";
pub const DICT_DIR_ENV: &str = "WORDNET_DIR";
pub const DEFAULT_DICT_DIR: &str = "wordnetdictionary";

pub fn dictionary_dir() -> String {
    std::env::var(DICT_DIR_ENV).unwrap_or_else(|_| DEFAULT_DICT_DIR.to_string())
}
