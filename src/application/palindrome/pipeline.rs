use std::time::Instant;

use super::classifier::is_accepted;
use super::collector::PalindromeCollector;
use super::normalizer::normalize;
use super::types::{CategoryStats, PalindromeReport, RunStats};
use crate::error::PalindromeResult;
use crate::infrastructure::dictionary::LexicalSource;

pub fn collect_palindromes<S: LexicalSource + ?Sized>(
    source: &S,
) -> PalindromeResult<PalindromeReport> {
    let t0 = Instant::now();
    let mut collector = PalindromeCollector::new();
    let mut stats = RunStats::default();

    for category in source.categories() {
        let mut scanned = 0usize;
        let mut accepted = 0usize;

        for entry in source.entries(category)? {
            let raw = entry?;
            scanned += 1;

            let word = normalize(&raw);
            if is_accepted(&word.comparison) {
                accepted += 1;
                collector.add(word.display);
            }
        }

        log::debug!(
            "category={} scanned={} accepted={}",
            category,
            scanned,
            accepted
        );
        stats.categories.push(CategoryStats {
            category,
            scanned,
            accepted,
        });
    }

    if collector.is_empty() {
        log::warn!("no palindromes found in {} categories", stats.categories.len());
    }

    let words = collector.finalize();
    stats.unique = collector.len();
    stats.elapsed_us = t0.elapsed().as_micros();

    log::info!(
        "palindromes.scanned={} accepted={} unique={} perf.scan_us={}",
        stats.scanned(),
        stats.accepted(),
        stats.unique,
        stats.elapsed_us
    );

    Ok(PalindromeReport { words, stats })
}
