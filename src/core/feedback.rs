//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess receives exactly one colour:
//! - Absent (grey): letter not in the answer, after duplicate consumption
//! - Present (yellow): letter in the answer at another position
//! - Correct (green): letter in the answer at this position
//!
//! Colours are ordered `Absent < Present < Correct`, which is also the order
//! in which the keyboard hints may be upgraded.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback colour for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    #[serde(rename = "grey")]
    Absent,
    #[serde(rename = "yellow")]
    Present,
    #[serde(rename = "green")]
    Correct,
}

impl Colour {
    /// Storage label for this colour
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absent => "grey",
            Self::Present => "yellow",
            Self::Correct => "green",
        }
    }

    /// Parse a storage label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "grey" => Some(Self::Absent),
            "yellow" => Some(Self::Present),
            "green" => Some(Self::Correct),
            _ => None,
        }
    }

    /// Emoji square for share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Feedback for one submitted guess, one colour per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Colour; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const WIN: Self = Self([Colour::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(colours: [Colour; WORD_LENGTH]) -> Self {
        Self(colours)
    }

    /// Score `guess` against `answer`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (correct) and consume them from the answer
    /// 2. Second pass: Mark present letters from the remaining pool, consuming as we go
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Colour, Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &answer);
    ///
    /// assert_eq!(feedback.colours()[2], Colour::Correct);
    /// assert_eq!(feedback.colours()[1], Colour::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut result = [Colour::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                result[i] = Colour::Correct;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still unconsumed
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Colour::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = Colour::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Colours by position
    #[inline]
    #[must_use]
    pub const fn colours(&self) -> &[Colour; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0 == [Colour::Correct; WORD_LENGTH]
    }

    /// Count positions with the given colour
    #[must_use]
    pub fn count(&self, colour: Colour) -> usize {
        self.0.iter().filter(|&&c| c == colour).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Colour::{Absent, Correct, Present};

    fn score(guess: &str, answer: &str) -> [Colour; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        *Feedback::score(&guess, &answer).colours()
    }

    #[test]
    fn colour_ordering_ranks_correct_highest() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(None < Some(Absent));
    }

    #[test]
    fn colour_labels() {
        for colour in [Absent, Present, Correct] {
            assert_eq!(Colour::from_label(colour.label()), Some(colour));
        }
        assert_eq!(Colour::from_label(""), None);
        assert_eq!(Colour::from_label("purple"), None);
        assert_eq!(serde_json::to_string(&Correct).unwrap(), "\"green\"");
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(score("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn score_all_correct() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::score(&word, &word);
        assert_eq!(feedback, Feedback::WIN);
        assert!(feedback.is_win());
    }

    #[test]
    fn score_real_example() {
        // R is absent because SLATE has no R
        assert_eq!(
            score("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn score_duplicates_speed_erase() {
        // ERASE has two E's, so both E's in SPEED are credited; S is present
        assert_eq!(
            score("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn score_duplicates_alloy_llama() {
        assert_eq!(
            score("alloy", "llama"),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn score_duplicates_correct_consumes_before_present() {
        // First O is yellow (wrong position), second O is green
        assert_eq!(
            score("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn score_duplicate_guess_letter_single_in_answer() {
        // Only one E in CRANE: the later exact match wins, the earlier E is absent
        assert_eq!(
            score("geese", "crane"),
            [Absent, Absent, Absent, Absent, Correct]
        );
        // Only one L in PILOT: first L gets the credit
        assert_eq!(
            score("llama", "pilot"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn score_triple_letter_answer() {
        assert_eq!(
            score("eerie", "geese"),
            [Present, Correct, Absent, Absent, Correct]
        );
    }

    #[test]
    fn score_never_credits_more_than_answer_has() {
        let pairs = [
            ("aaaaa", "abbbb"),
            ("speed", "erase"),
            ("alloy", "llama"),
            ("sissy", "essay"),
            ("mimic", "maxim"),
        ];
        for (guess, answer) in pairs {
            let g = Word::new(guess).unwrap();
            let a = Word::new(answer).unwrap();
            let feedback = Feedback::score(&g, &a);
            let matching = (0..WORD_LENGTH)
                .filter(|&i| g.char_at(i) == a.char_at(i))
                .count();
            assert_eq!(feedback.count(Correct), matching);

            for &letter in g.chars() {
                let credited = (0..WORD_LENGTH)
                    .filter(|&i| g.char_at(i) == letter && feedback.colours()[i] != Absent)
                    .count();
                let in_answer = a.chars().iter().filter(|&&c| c == letter).count();
                assert!(credited <= in_answer, "{guess} vs {answer}: {}", letter as char);
            }
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛🟩🟨");
    }
}
