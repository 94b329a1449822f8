//! In-memory tally of finished rounds for one program run

use super::Outcome;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl Statistics {
    /// Count a finished round. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => {
                self.rounds_played += 1;
                self.rounds_won += 1;
            }
            Outcome::Lost => self.rounds_played += 1,
            Outcome::InProgress => {}
        }
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}
