//! Win counters kept by the application across games.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Wins per mark. Draws are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    wins_x: u32,
    wins_o: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a win for `mark`.
    pub fn record(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.wins_x += 1,
            Mark::O => self.wins_o += 1,
        }
    }

    /// Returns the wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player X: {} | Player O: {}", self.wins_x, self.wins_o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_display() {
        let mut score = Scoreboard::new();
        score.record(Mark::X);
        score.record(Mark::O);
        score.record(Mark::X);
        assert_eq!(score.wins(Mark::X), 2);
        assert_eq!(score.wins(Mark::O), 1);
        assert_eq!(score.to_string(), "Player X: 2 | Player O: 1");
    }
}
