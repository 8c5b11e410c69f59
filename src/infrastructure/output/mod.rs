pub mod writer;

pub use writer::PalindromeWriter;
