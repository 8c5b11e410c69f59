use super::config::SEPARATOR;
use super::types::NormalizedWord;

// Display form keeps word boundaries as spaces, comparison form drops them.
pub fn normalize(raw: &str) -> NormalizedWord {
    NormalizedWord {
        display: display_form(raw),
        comparison: comparison_form(raw),
    }
}

pub fn display_form(raw: &str) -> String {
    raw.replace(SEPARATOR, " ")
}

pub fn comparison_form(raw: &str) -> String {
    raw.chars().filter(|&ch| ch != SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_multi_word_lemma() {
        let word = normalize("can_opener");
        assert_eq!(word.display, "can opener");
        assert_eq!(word.comparison, "canopener");
    }

    #[test]
    fn single_word_is_unchanged() {
        let word = normalize("Racecar");
        assert_eq!(word.display, "Racecar");
        assert_eq!(word.comparison, "Racecar");
    }

    #[test]
    fn empty_input_is_total() {
        let word = normalize("");
        assert_eq!(word.display, "");
        assert_eq!(word.comparison, "");
    }

    #[test]
    fn consecutive_separators_map_one_to_one() {
        let word = normalize("a__b_");
        assert_eq!(word.display, "a  b ");
        assert_eq!(word.comparison, "ab");
    }

    #[test]
    fn forms_do_not_fold_case() {
        let word = normalize("A_B_A");
        assert_eq!(word.display, "A B A");
        assert_eq!(word.comparison, "ABA");
    }
}
