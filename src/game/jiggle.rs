//! Transient "invalid submission" signal
//!
//! Setting the flag arms a fresh timer. Each timer carries the generation it
//! was armed for; firing a timer from an older generation does nothing, so a
//! stale timer can never clear a newer jiggle.

use std::time::{Duration, Instant};

/// Default time the active row shakes after a rejected submission
pub const JIGGLE_DURATION: Duration = Duration::from_millis(500);

/// Handle for one armed auto-clear timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JiggleTimer {
    generation: u64,
    deadline: Instant,
}

impl JiggleTimer {
    /// When this timer should fire
    #[must_use]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }
}

#[derive(Debug, Clone)]
pub struct Jiggle {
    duration: Duration,
    generation: u64,
    pending: Option<JiggleTimer>,
}

impl Jiggle {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: 0,
            pending: None,
        }
    }

    /// Raise the flag and arm a new timer
    pub fn set(&mut self, now: Instant) -> JiggleTimer {
        self.generation += 1;
        let timer = JiggleTimer {
            generation: self.generation,
            deadline: now + self.duration,
        };
        self.pending = Some(timer);
        timer
    }

    /// Lower the flag; any armed timer becomes stale
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Fire `timer`; clears the flag only if it is the latest one armed
    ///
    /// Returns true if the flag was cleared.
    pub fn fire(&mut self, timer: JiggleTimer) -> bool {
        if self.pending == Some(timer) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.pending.is_some()
    }

    /// The timer that will clear the current flag, if set
    #[must_use]
    pub const fn pending(&self) -> Option<JiggleTimer> {
        self.pending
    }
}

impl Default for Jiggle {
    fn default() -> Self {
        Self::new(JIGGLE_DURATION)
    }
}
