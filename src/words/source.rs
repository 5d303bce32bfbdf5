//! Answer sequence and guess dictionary

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::{WORD_LENGTH, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSourceError {
    #[error("answer list is empty")]
    NoAnswers,
}

/// Supplies the target answers, in order, and validates guesses
///
/// The answer pointer wraps back to the first answer after the last one.
/// The dictionary always contains every answer.
#[derive(Debug, Clone)]
pub struct WordSource {
    answers: Vec<Word>,
    dictionary: FxHashSet<String>,
    index: usize,
}

impl WordSource {
    /// Create a source from an ordered answer list and a dictionary
    ///
    /// # Errors
    /// Returns `WordSourceError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        dictionary: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordSourceError> {
        if answers.is_empty() {
            return Err(WordSourceError::NoAnswers);
        }

        let mut dictionary: FxHashSet<String> = dictionary
            .into_iter()
            .map(|w| w.text().to_string())
            .collect();
        dictionary.extend(answers.iter().map(|w| w.text().to_string()));

        Ok(Self {
            answers,
            dictionary,
            index: 0,
        })
    }

    /// Source backed by the lists compiled into the binary
    ///
    /// # Errors
    /// Returns `WordSourceError::NoAnswers` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordSourceError> {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Deterministically reorder the answers with a seeded RNG
    ///
    /// The same seed always yields the same sequence. Resets the pointer.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        self.answers.shuffle(&mut rng);
        self.index = 0;
        self
    }

    /// The answer for the active game
    #[must_use]
    pub fn current_answer(&self) -> &Word {
        &self.answers[self.index]
    }

    /// Advance to the next answer, wrapping at the end of the list
    pub fn next_answer(&mut self) -> &Word {
        self.index = (self.index + 1) % self.answers.len();
        if self.index == 0 {
            debug!(count = self.answers.len(), "answer list wrapped");
        }
        &self.answers[self.index]
    }

    /// Position of the active answer
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Point at a specific answer; out-of-range positions wrap
    pub fn set_index(&mut self, index: usize) {
        self.index = index % self.answers.len();
    }

    /// Number of answers in the sequence
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// Position of `word` in the answer sequence, case-insensitive
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        self.answers
            .iter()
            .position(|answer| answer.text().eq_ignore_ascii_case(word))
    }

    /// Check whether `word` is an acceptable guess
    ///
    /// True iff it has 5 letters and is in the dictionary (case-insensitive).
    /// Malformed input is simply not valid.
    #[must_use]
    pub fn is_guess_valid(&self, word: &str) -> bool {
        word.len() == WORD_LENGTH && self.dictionary.contains(&word.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(answers: &[&str], extra: &[&str]) -> WordSource {
        WordSource::new(words_from_slice(answers), words_from_slice(extra)).unwrap()
    }

    #[test]
    fn empty_answers_rejected() {
        let result = WordSource::new(Vec::new(), words_from_slice(&["crane"]));
        assert_eq!(result.unwrap_err(), WordSourceError::NoAnswers);
    }

    #[test]
    fn current_and_next_answer_follow_order() {
        let mut words = source(&["cigar", "rebut", "sissy"], &[]);
        assert_eq!(words.current_answer().text(), "CIGAR");
        assert_eq!(words.next_answer().text(), "REBUT");
        assert_eq!(words.current_answer().text(), "REBUT");
        assert_eq!(words.index(), 1);
    }

    #[test]
    fn position_finds_answer_in_sequence() {
        let words = source(&["cigar", "rebut", "sissy"], &["crane"]);
        assert_eq!(words.position("REBUT"), Some(1));
        assert_eq!(words.position("sissy"), Some(2));
        assert_eq!(words.position("crane"), None);
    }

    #[test]
    fn next_answer_wraps_to_start() {
        let mut words = source(&["cigar", "rebut"], &[]);
        words.next_answer();
        assert_eq!(words.next_answer().text(), "CIGAR");
        assert_eq!(words.index(), 0);
    }

    #[test]
    fn set_index_wraps() {
        let mut words = source(&["cigar", "rebut", "sissy"], &[]);
        words.set_index(4);
        assert_eq!(words.current_answer().text(), "REBUT");
    }

    #[test]
    fn guess_validation_is_case_insensitive() {
        let words = source(&["cigar"], &["crane"]);
        assert!(words.is_guess_valid("crane"));
        assert!(words.is_guess_valid("CRANE"));
        assert!(words.is_guess_valid("CiGaR"));
        assert!(!words.is_guess_valid("slate"));
    }

    #[test]
    fn guess_validation_rejects_malformed() {
        let words = source(&["cigar"], &["crane"]);
        assert!(!words.is_guess_valid(""));
        assert!(!words.is_guess_valid("cran"));
        assert!(!words.is_guess_valid("cranes"));
        assert!(!words.is_guess_valid("cr4ne"));
        assert!(!words.is_guess_valid("crâne"));
    }

    #[test]
    fn dictionary_includes_answers() {
        let words = source(&["cigar", "rebut"], &["crane", "cigar"]);
        assert_eq!(words.dictionary_size(), 3);
        assert_eq!(words.answer_count(), 2);
    }

    #[test]
    fn shuffle_is_deterministic() {
        let answers = ["cigar", "rebut", "sissy", "humph", "awake", "blush"];
        let mut a = source(&answers, &[]).shuffled(42);
        let mut b = source(&answers, &[]).shuffled(42);

        for _ in 0..answers.len() {
            assert_eq!(a.current_answer(), b.current_answer());
            a.next_answer();
            b.next_answer();
        }
    }

    #[test]
    fn embedded_source_loads() {
        let words = WordSource::embedded().unwrap();
        assert_eq!(words.answer_count(), ANSWERS.len());
        assert!(words.is_guess_valid(words.current_answer().text()));
    }
}
