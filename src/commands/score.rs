//! Score a single guess against an answer

use crate::core::{Feedback, Word, WordError};
use crate::output::print_feedback;
use colored::Colorize;

/// Score `guess` against `answer`
///
/// Both words are normalised to uppercase; no dictionary check is made.
///
/// # Errors
///
/// Returns `WordError` if either word is not five ASCII letters.
pub fn score_words(guess: &str, answer: &str) -> Result<(Word, Feedback), WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let feedback = Feedback::score(&guess, &answer);
    Ok((guess, feedback))
}

/// Print the feedback for `guess` against `answer`
///
/// # Errors
///
/// Returns `WordError` if either word is not five ASCII letters.
pub fn run_score(guess: &str, answer: &str) -> Result<(), WordError> {
    let (guess, feedback) = score_words(guess, answer)?;
    print_feedback(guess.text(), &feedback);
    if feedback.is_win() {
        println!("{}", "Solved!".green().bold());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour::{Absent, Correct, Present};

    #[test]
    fn scores_mixed_case_input() {
        let (guess, feedback) = score_words("speed", "ErAsE").unwrap();
        assert_eq!(guess.text(), "SPEED");
        assert_eq!(
            feedback.colours(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn rejects_bad_words() {
        assert!(matches!(
            score_words("cran", "erase"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(score_words("crane", "er4se").is_err());
    }

    #[test]
    fn identical_words_win() {
        let (_, feedback) = score_words("robot", "ROBOT").unwrap();
        assert_eq!(feedback, Feedback::WIN);
        assert_eq!(feedback.count(Correct), 5);
    }
}
