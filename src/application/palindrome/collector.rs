use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct PalindromeCollector {
    words: HashSet<String>,
}

impl PalindromeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, display: impl Into<String>) -> bool {
        self.words.insert(display.into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // Case-insensitive order; the raw string breaks ties so hash order never leaks out.
    pub fn finalize(&self) -> Vec<String> {
        let mut keyed: Vec<(String, &String)> = self
            .words
            .iter()
            .map(|word| (word.to_lowercase(), word))
            .collect();
        keyed.sort_by(compare_ignore_case);
        keyed.into_iter().map(|(_, word)| word.clone()).collect()
    }
}

fn compare_ignore_case(a: &(String, &String), b: &(String, &String)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1))
}
