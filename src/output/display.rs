//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles};
use crate::core::Feedback;
use crate::game::{GameResult, Statistics, Summary};
use colored::Colorize;

/// Print one scored guess
pub fn print_feedback(guess: &str, feedback: &Feedback) {
    println!(
        "{}  {}",
        feedback_tiles(guess, feedback),
        feedback.to_emoji()
    );
}

/// Print the statistics block with its guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(44).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(44).cyan());

    for entry in stats.entries() {
        println!(
            "   {:<16} {}",
            entry.message,
            entry.value.to_string().bright_yellow().bold()
        );
    }

    print_distribution(&stats.guess_distribution, None);
}

fn print_distribution(distribution: &[u32], highlight: Option<usize>) {
    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        let bar = if highlight == Some(i + 1) {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {}: {bar} {count}", i + 1);
    }
}

/// Print the end-of-game summary
pub fn print_summary(summary: &Summary) {
    println!("\n{}", "═".repeat(44).bright_cyan());
    match summary.result {
        GameResult::Won { guesses } => println!(
            "{}",
            format!(
                "  🎉 Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        ),
        GameResult::Lost => println!(
            "{}",
            format!("  ❌ The word was {}", summary.answer).red().bold()
        ),
    }
    println!("{}", "═".repeat(44).bright_cyan());

    for entry in &summary.statistics {
        println!(
            "   {:<16} {}",
            entry.message,
            entry.value.to_string().bright_yellow().bold()
        );
    }

    let highlight = match summary.result {
        GameResult::Won { guesses } => Some(guesses),
        GameResult::Lost => None,
    };
    print_distribution(&summary.distribution, highlight);

    println!("\n{}\n", summary.share);
}
