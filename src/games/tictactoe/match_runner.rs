//! Bot-vs-bot play-outs from an empty board.

use super::action::MoveError;
use super::bot::{BotError, BotStrategy};
use super::game::GameState;
use super::types::{Mark, Outcome};
use derive_more::{Display, From};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

/// Failure while playing out a match.
///
/// Either variant means a strategy misbehaved; legal play never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum MatchError {
    /// A strategy found no move on an undecided board.
    #[display("{}", _0)]
    Bot(BotError),
    /// A strategy chose an illegal square.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for MatchError {}

/// Plays `x` against `o` until the game ends and returns the final state.
///
/// Both strategies share `rng`, so a seeded generator replays the same game.
#[instrument(skip(rng))]
pub fn play_out<R: Rng + ?Sized>(
    x: BotStrategy,
    o: BotStrategy,
    rng: &mut R,
) -> Result<GameState, MatchError> {
    let mut state = GameState::new();
    while state.is_active() {
        let mover = state.current_mover();
        let strategy = if mover == Mark::X { x } else { o };
        let index = strategy.select_move(state.board(), mover, rng)?;
        let outcome = state.apply_move(index)?;
        debug!(?mover, index, ?outcome, "Play-out move");
    }
    Ok(state)
}

/// Tally of play-out results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatchTally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl MatchTally {
    /// Adds one finished game to the tally.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WinFor(Mark::X) => self.x_wins += 1,
            Outcome::WinFor(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => {}
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_games_finish() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut tally = MatchTally::default();
        for _ in 0..50 {
            let state = play_out(BotStrategy::Random, BotStrategy::Random, &mut rng).unwrap();
            assert!(state.outcome().is_terminal());
            tally.record(state.outcome());
        }
        assert_eq!(tally.games(), 50);
    }

    #[test]
    fn test_seeded_play_out_repeats() {
        let a = play_out(
            BotStrategy::Heuristic,
            BotStrategy::Random,
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
        let b = play_out(
            BotStrategy::Heuristic,
            BotStrategy::Random,
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
        assert_eq!(a.history(), b.history());
    }
}
