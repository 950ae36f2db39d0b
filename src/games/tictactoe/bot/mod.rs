//! Bot opponents: difficulty levels and move selection strategies.

mod heuristic;
pub mod minimax;
mod random;

pub use heuristic::{completing_square, heuristic_move};
pub use minimax::select_best_move;
pub use random::random_move;

use super::types::{Board, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Difficulty level chosen by the player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Blocks the player's open lines, then completes its own.
    Medium,
    /// Full minimax search.
    Hard,
}

/// Move selection strategy, one per difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotStrategy {
    /// Random empty square.
    Random,
    /// Rule-based blocking with random fallback.
    Heuristic,
    /// Exhaustive minimax search.
    Optimal,
}

impl From<Difficulty> for BotStrategy {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => BotStrategy::Random,
            Difficulty::Medium => BotStrategy::Heuristic,
            Difficulty::Hard => BotStrategy::Optimal,
        }
    }
}

impl BotStrategy {
    /// Chooses a square for `bot` to play on `board`.
    ///
    /// `Optimal` never touches `rng`; the other strategies draw from it.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::NoMovesAvailable`] if the board has no empty square.
    #[instrument(skip(board, rng), level = "debug")]
    pub fn select_move<R: Rng + ?Sized>(
        self,
        board: &Board,
        bot: Mark,
        rng: &mut R,
    ) -> Result<usize, BotError> {
        match self {
            BotStrategy::Random => random_move(board, rng),
            BotStrategy::Heuristic => heuristic_move(board, bot, rng),
            BotStrategy::Optimal => select_best_move(board, bot),
        }
    }
}

/// Errors raised by bot strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BotError {
    /// The board has no empty square to play.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl std::error::Error for BotError {}
