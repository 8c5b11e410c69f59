pub mod dictionary;
pub mod logging;
pub mod output;
