use crate::infrastructure::dictionary::PartOfSpeech;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedWord {
    pub display: String,
    pub comparison: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: PartOfSpeech,
    pub scanned: usize,
    pub accepted: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub categories: Vec<CategoryStats>,
    pub unique: usize,
    pub elapsed_us: u128,
}

impl RunStats {
    pub fn scanned(&self) -> usize {
        self.categories.iter().map(|c| c.scanned).sum()
    }

    pub fn accepted(&self) -> usize {
        self.categories.iter().map(|c| c.accepted).sum()
    }
}

#[derive(Clone, Debug)]
pub struct PalindromeReport {
    pub words: Vec<String>,
    pub stats: RunStats,
}
