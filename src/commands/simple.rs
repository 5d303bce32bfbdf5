//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a whole guess or a command.

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::game::{Game, GameStatus, Outcome, Rejection};
use crate::input::Key;
use crate::output::{print_feedback, print_statistics, print_summary};
use crate::store::Storage;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What one line of input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Stats,
    Guess(String),
}

fn parse_line(line: &str) -> Command {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        "stats" | "s" => Command::Stats,
        _ => Command::Guess(line.to_string()),
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if
/// progress could not be saved.
pub fn run_simple<S: Storage>(game: &mut Game<S>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(game, stdin.lock())
}

/// Run the simple mode reading lines from `input`; returns at EOF or `quit`
///
/// # Errors
///
/// Returns an error if reading fails or progress could not be saved.
pub fn run_simple_with<S: Storage, R: BufRead>(game: &mut Game<S>, input: R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║            Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Type a {WORD_LENGTH}-letter guess and press Enter.");
    println!("Commands: 'new' for a new game, 'stats' for statistics, 'quit' to exit\n");

    if game.current_row() > 0 {
        println!("Resuming saved game:");
        for row in &game.grid().rows()[..game.current_row()] {
            if let Some(feedback) = row.feedback() {
                print_feedback(row.guess(), feedback);
            }
        }
        println!();
    }
    if let Some(summary) = game.summary() {
        print_summary(&summary);
    }

    let mut lines = input.lines();
    loop {
        prompt(game)?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Command::Quit => break,
            Command::NewGame => {
                game.new_game()?;
                println!("\n🔄 New game started!\n");
            }
            Command::Stats => print_statistics(game.statistics()),
            Command::Guess(_) if game.status().is_over() => {
                println!("Game over. Type 'new' to play again or 'quit' to exit.");
            }
            Command::Guess(guess) => play_guess(game, &guess)?,
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn prompt<S: Storage>(game: &Game<S>) -> io::Result<()> {
    if game.status() == GameStatus::Playing {
        print!("Guess {}/{MAX_GUESSES}: ", game.current_row() + 1);
    } else {
        print!("> ");
    }
    io::stdout().flush()
}

/// Type `guess` into the current row and submit it
fn play_guess<S: Storage>(game: &mut Game<S>, guess: &str) -> Result<()> {
    if guess.chars().count() > WORD_LENGTH || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("{}", format!("❌ Guesses are {WORD_LENGTH} letters A-Z").red());
        return Ok(());
    }

    for c in guess.chars() {
        if let Some(key) = Key::letter(c) {
            game.press(key)?;
        }
    }

    match game.press(Key::Submit)? {
        Outcome::Rejected { reason, timer } => {
            // No animation here, so lower the flag straight away
            game.fire_jiggle(timer);
            while game.press(Key::Delete)? == Outcome::Deleted {}

            let message = match reason {
                Rejection::Incomplete => "Not enough letters",
                Rejection::UnknownWord => "Not in word list",
            };
            println!("{}", format!("❌ {message}").red());
        }
        Outcome::Scored {
            row,
            feedback,
            status,
        } => {
            print_feedback(game.grid().rows()[row].guess(), &feedback);
            if status.is_over()
                && let Some(summary) = game.summary()
            {
                print_summary(&summary);
                println!("Type 'new' to play again or 'quit' to exit.");
            }
        }
        Outcome::Ignored | Outcome::Typed(_) | Outcome::Deleted | Outcome::Started => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::store::MemoryStorage;
    use crate::words::WordSource;
    use crate::words::loader::words_from_slice;
    use std::io::Cursor;

    fn game() -> Game<MemoryStorage> {
        let words = WordSource::new(
            words_from_slice(&["erase", "llama"]),
            words_from_slice(&["crane", "slate"]),
        )
        .unwrap();
        Game::new(words, MemoryStorage::new(), &GameConfig::default())
    }

    #[test]
    fn parses_commands_case_insensitively() {
        assert_eq!(parse_line("QUIT"), Command::Quit);
        assert_eq!(parse_line("n"), Command::NewGame);
        assert_eq!(parse_line("Stats"), Command::Stats);
        assert_eq!(parse_line("crane"), Command::Guess("crane".to_string()));
    }

    #[test]
    fn plays_lines_until_win() {
        let mut game = game();
        run_simple_with(&mut game, Cursor::new("crane\nerase\n")).unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.current_row(), 2);
        assert_eq!(game.statistics().games_won, 1);
    }

    #[test]
    fn rejected_guess_leaves_row_empty() {
        let mut game = game();
        run_simple_with(&mut game, Cursor::new("zzzzz\ncra\ntoolong\nc4ane\n")).unwrap();

        assert_eq!(game.current_row(), 0);
        assert_eq!(game.grid().rows()[0].guess(), "");
        assert!(!game.should_jiggle(0));
    }

    #[test]
    fn new_command_moves_to_next_answer() {
        let mut game = game();
        run_simple_with(&mut game, Cursor::new("crane\nnew\nquit\nslate\n")).unwrap();

        assert_eq!(game.current_row(), 0);
        assert_eq!(game.answer().text(), "LLAMA");
    }

    #[test]
    fn guesses_after_game_over_are_ignored() {
        let mut game = game();
        run_simple_with(&mut game, Cursor::new("erase\ncrane\n")).unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.current_row(), 1);
    }
}
