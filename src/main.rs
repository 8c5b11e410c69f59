use std::path::Path;

use anyhow::{Context, Result};

mod application;
mod error;
mod infrastructure;
mod interfaces;

use application::palindrome::{collect_palindromes, config};
use infrastructure::dictionary::WordNetDictionary;
use infrastructure::logging;
use infrastructure::output::PalindromeWriter;
use interfaces::console::ConsoleUI;

fn run(dict_dir: &Path, output: &Path) -> Result<()> {
    let dictionary = WordNetDictionary::open(dict_dir).with_context(|| {
        format!(
            "Failed to open WordNet dictionary from {}",
            dict_dir.display()
        )
    })?;

    let report = collect_palindromes(&dictionary).context("Failed to scan dictionary entries")?;

    // Write failures exit non-zero instead of being swallowed.
    let writer = PalindromeWriter::new(output);
    writer
        .write(&report.words)
        .context("Failed to write palindromes")?;

    ConsoleUI::print_summary(&report, dictionary.dir(), writer.path());
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    logging::init();

    let dict_dir = config::dictionary_dir();
    if let Err(e) = run(Path::new(&dict_dir), Path::new(config::OUTPUT_PATH)) {
        log::error!("{:#}", e);
        ConsoleUI::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PalindromeError;
    use std::fs;
    use tempfile::TempDir;

    fn write_dictionary(dir: &Path) {
        fs::write(
            dir.join("index.noun"),
            "  1 license header\nracecar n 1 2 @ + 1 0 04037443\nA_B_A n 1 1 @ 1 0 00000001\n",
        )
        .unwrap();
        fs::write(dir.join("index.verb"), "noon v 1 1 @ 1 0 00000002\n").unwrap();
        fs::write(dir.join("index.adj"), "hello a 1 1 & 1 0 00000003\n").unwrap();
        fs::write(dir.join("index.adv"), "121 r 1 0 1 0 00000004\n").unwrap();
    }

    fn palindrome_error(err: &anyhow::Error) -> Option<&PalindromeError> {
        err.chain().find_map(|cause| cause.downcast_ref::<PalindromeError>())
    }

    #[test]
    fn writes_sorted_palindromes() {
        let tmp = TempDir::new().unwrap();
        write_dictionary(tmp.path());
        let output = tmp.path().join("palindromes.txt");

        run(tmp.path(), &output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "A B A\nnoon\nracecar"
        );
    }

    #[test]
    fn write_failure_fails_the_run() {
        let tmp = TempDir::new().unwrap();
        write_dictionary(tmp.path());
        let output = tmp.path().join("missing").join("palindromes.txt");

        let err = run(tmp.path(), &output).unwrap_err();
        assert!(matches!(
            palindrome_error(&err),
            Some(PalindromeError::WriteFailure { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn missing_dictionary_aborts_before_output() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("palindromes.txt");

        let err = run(&tmp.path().join("wordnetdictionary"), &output).unwrap_err();
        assert!(matches!(
            palindrome_error(&err),
            Some(PalindromeError::SourceUnavailable { .. })
        ));
        assert!(!output.exists());
    }
}
