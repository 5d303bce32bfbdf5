//! Word lists and the answer source
//!
//! Embedded lists are generated at build time from `data/answers.txt` (ordered
//! answer sequence) and `data/allowed.txt` (guess dictionary).

pub mod loader;
mod source;

pub use source::{WordSource, WordSourceError};

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_are_uppercase_five_letter_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn answers_are_unique() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS_COUNT);
    }
}
