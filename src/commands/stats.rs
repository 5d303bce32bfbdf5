//! Saved statistics and state reset

use crate::game::Statistics;
use crate::output::print_statistics;
use crate::store::saved::STATISTICS_KEY;
use crate::store::{Decoded, Storage, StoreError, read_json};
use tracing::{info, warn};

/// Statistics saved in `storage`, or zeroes if there are none
#[must_use]
pub fn load_statistics(storage: &impl Storage) -> Statistics {
    match read_json(storage, STATISTICS_KEY) {
        Decoded::Found(stats) => stats,
        Decoded::Absent => Statistics::default(),
        Decoded::Malformed(reason) => {
            warn!(%reason, "ignoring saved statistics");
            Statistics::default()
        }
    }
}

/// Print the statistics saved in `storage`
pub fn run_stats(storage: &impl Storage) {
    print_statistics(&load_statistics(storage));
}

/// Delete every saved key: grid, answer position and statistics
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be written.
pub fn run_reset(storage: &mut impl Storage) -> Result<(), StoreError> {
    storage.clear()?;
    info!("saved state cleared");
    println!("Saved game and statistics cleared.");
    Ok(())
}
