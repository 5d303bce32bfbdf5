//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence; otherwise `info`, or `debug` when verbose.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    /// Append to a file; used while the TUI owns the terminal
    File(&'a Path),
}

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Install the global subscriber
///
/// Calling it again after a subscriber is installed has no effect.
///
/// # Errors
/// Returns an I/O error if the log file cannot be opened.
pub fn init(target: LogTarget<'_>, verbose: bool) -> io::Result<()> {
    let registry = tracing_subscriber::registry().with(filter(verbose));

    match target {
        LogTarget::Stderr => {
            let _ = registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .without_time()
                        .with_writer(io::stderr),
                )
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init();
        }
    }

    Ok(())
}
