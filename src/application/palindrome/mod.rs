pub mod classifier;
pub mod collector;
pub mod config;
pub mod normalizer;
pub mod pipeline;
pub mod types;

pub use pipeline::collect_palindromes;
pub use types::PalindromeReport;
