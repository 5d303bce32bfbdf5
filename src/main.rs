//! Wordle Game - CLI
//!
//! Play Wordle in a TUI (default) or line by line, score single guesses and
//! inspect saved statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use wordle_game::{
    commands::{run_reset, run_score, run_simple, run_stats},
    config::{Config, Wordlist},
    game::Game,
    interactive::run_tui,
    logging::{self, LogTarget},
    store::FileStorage,
    words::{ANSWERS, WordSource, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Save file (default: <data dir>/wordle_game/save.json)
    #[arg(long, global = true)]
    save: Option<PathBuf>,

    /// Accepted guesses: 'all' (default), 'answers' (answers only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Shuffle the answer order with this seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback for a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        answer: String,
    },

    /// Show saved statistics
    Stats,

    /// Delete the saved game and statistics
    Reset,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            save_path: self.save.clone().unwrap_or_else(Config::default_save_path),
            wordlist: Wordlist::from_arg(&self.wordlist),
            seed: self.seed,
            verbose: self.verbose,
            ..Config::default()
        }
    }
}

/// Build the answer source for the `-w` option
///
/// - `all`: embedded answers, full embedded dictionary
/// - `answers`: only the answers are accepted as guesses
/// - `<path>`: embedded answers, dictionary loaded from file
fn load_words(config: &Config) -> Result<WordSource> {
    let words = match &config.wordlist {
        Wordlist::All => WordSource::embedded()?,
        Wordlist::Answers => WordSource::new(words_from_slice(ANSWERS), [])?,
        Wordlist::File(path) => {
            let dictionary = load_from_file(path)
                .with_context(|| format!("failed to read wordlist {}", path.display()))?;
            WordSource::new(words_from_slice(ANSWERS), dictionary)?
        }
    };

    debug!(
        answers = words.answer_count(),
        dictionary = words.dictionary_size(),
        "word lists loaded"
    );

    Ok(match config.seed {
        Some(seed) => words.shuffled(seed),
        None => words,
    })
}

fn open_storage(config: &Config) -> Result<FileStorage> {
    FileStorage::open(&config.save_path)
        .with_context(|| format!("failed to open save file {}", config.save_path.display()))
}

fn open_game(config: &Config) -> Result<Game<FileStorage>> {
    let words = load_words(config)?;
    let storage = open_storage(config)?;
    info!(save = %config.save_path.display(), "opening game");
    Ok(Game::new(words, storage, &config.game))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go to a file
    let log_path = config.log_path();
    let target = match command {
        Commands::Play => LogTarget::File(&log_path),
        _ => LogTarget::Stderr,
    };
    logging::init(target, config.verbose).context("failed to set up logging")?;

    match command {
        Commands::Play => run_tui(&mut open_game(&config)?),
        Commands::Simple => run_simple(&mut open_game(&config)?),
        Commands::Score { guess, answer } => Ok(run_score(&guess, &answer)?),
        Commands::Stats => {
            run_stats(&open_storage(&config)?);
            Ok(())
        }
        Commands::Reset => Ok(run_reset(&mut open_storage(&config)?)?),
    }
}
