use colored::*;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use crate::application::palindrome::PalindromeReport;

pub struct ConsoleUI;

impl ConsoleUI {
    pub fn print_header(title: &str) {
        let min_width = 48;
        let title_width = UnicodeWidthStr::width(title);
        let width = min_width.max(title_width);
        let padding_total = width.saturating_sub(title_width);
        let padding_left = padding_total / 2;
        let padding_right = padding_total - padding_left;
        let horizontal = "═".repeat(width);
        println!("{}", format!("╔{}╗", horizontal).bright_cyan());
        println!(
            "║{}{}{}║",
            " ".repeat(padding_left),
            title.bright_yellow().bold(),
            " ".repeat(padding_right)
        );
        println!("{}", format!("╚{}╝", horizontal).bright_cyan());
        println!();
    }

    pub fn print_stat(label: &str, value: impl std::fmt::Display) {
        let pad = 20usize.saturating_sub(UnicodeWidthStr::width(label));
        println!(
            "  {} {}{} {}",
            "»".bright_cyan(),
            label.bright_white(),
            " ".repeat(pad),
            value.to_string().bright_blue().bold()
        );
    }

    pub fn print_summary(report: &PalindromeReport, dictionary: &Path, output: &Path) {
        Self::print_header("WordNet Palindromes");
        Self::print_stat("dictionary", dictionary.display());
        for category in &report.stats.categories {
            Self::print_stat(
                &category.category.to_string(),
                format!("{} / {}", category.accepted, category.scanned),
            );
        }
        Self::print_stat("entries scanned", report.stats.scanned());
        Self::print_stat("entries accepted", report.stats.accepted());
        Self::print_stat("unique palindromes", report.stats.unique);
        Self::print_stat(
            "elapsed",
            format!("{:.1} ms", report.stats.elapsed_us as f64 / 1000.0),
        );
        Self::print_success(&format!(
            "Wrote {} palindromes to {}",
            report.words.len(),
            output.display()
        ));
    }

    pub fn print_error(message: &str) {
        eprintln!("\n  {} {}", "✗".bright_red().bold(), message.bright_red());
    }

    pub fn print_success(message: &str) {
        println!(
            "\n  {} {}",
            "✓".bright_green().bold(),
            message.bright_green()
        );
    }
}
