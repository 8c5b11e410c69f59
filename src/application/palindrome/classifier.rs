use lazy_static::lazy_static;
use regex::Regex;

use super::config::{MIN_RELEVANT_LEN, SEPARATOR};

lazy_static! {
    // Floating-point literal grammar: signed decimal or hex float with optional
    // type suffix, plus the NaN and Infinity keywords.
    static ref NUMERIC_REGEX: Regex = Regex::new(
        r"^[+-]?(?:NaN|Infinity|(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|0[xX](?:[0-9a-fA-F]+\.?|[0-9a-fA-F]*\.[0-9a-fA-F]+)[pP][+-]?[0-9]+)[fFdD]?)$"
    )
    .unwrap();
}

pub fn is_accepted(comparison: &str) -> bool {
    !comparison.contains(SEPARATOR)
        && is_palindrome(comparison)
        && is_relevant(comparison)
        && !is_repeating(comparison)
}

pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let n = chars.len();
    (0..n / 2).all(|i| chars[i] == chars[n - 1 - i])
}

pub fn is_relevant(word: &str) -> bool {
    !is_numeric(word) && word.chars().count() >= MIN_RELEVANT_LEN
}

pub fn is_numeric(word: &str) -> bool {
    let trimmed = word.trim_matches(|ch: char| ch <= ' ');
    !trimmed.is_empty() && NUMERIC_REGEX.is_match(trimmed)
}

pub fn is_repeating(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return false;
    }
    chars.windows(2).all(|pair| pair[0] == pair[1])
}
