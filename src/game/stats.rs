//! Results across games: played, win rate, streaks and guess distribution

use crate::core::MAX_GUESSES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of guesses used; index 0 is a win in one
    pub guess_distribution: [u32; MAX_GUESSES],
}

/// One figure shown in the results summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    pub value: u32,
    pub message: &'static str,
}

impl Statistic {
    /// Message words, one per display line
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.message.split(' ')
    }
}

impl Statistics {
    /// Record a win that took `guesses` guesses (1-6)
    pub fn record_win(&mut self, guesses: usize) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(slot) = guesses
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    /// Record a game that ran out of guesses
    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, rounded to the nearest whole number
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32
    }

    /// Summary figures in display order
    #[must_use]
    pub fn entries(&self) -> [Statistic; 4] {
        [
            Statistic {
                value: self.games_played,
                message: "Played",
            },
            Statistic {
                value: self.win_percentage(),
                message: "Win %",
            },
            Statistic {
                value: self.current_streak,
                message: "Current Streak",
            },
            Statistic {
                value: self.max_streak,
                message: "Max Streak",
            },
        ]
    }
}
