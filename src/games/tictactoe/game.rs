//! Game state for a single tic-tac-toe game.

use super::action::MoveError;
use super::invariants::assert_invariants;
use super::rules::evaluate;
use super::types::{Board, Mark, Outcome, Square};
use tracing::{debug, instrument};

/// Board, side to move, and whether the game still accepts moves.
///
/// Once a move produces a terminal outcome the state is frozen: every
/// further [`GameState::apply_move`] fails with [`MoveError::GameOver`]
/// until [`GameState::reset`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_mover: Mark,
    active: bool,
    history: Vec<usize>,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mover: Mark::X,
            active: true,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn current_mover(&self) -> Mark {
        self.current_mover
    }

    /// Whether the game still accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the move history (indices in play order).
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Places the current mover's mark at `index` (0-8).
    ///
    /// Returns the outcome after the move. On a terminal outcome the game
    /// becomes inactive and the mover is not toggled.
    ///
    /// # Errors
    ///
    /// Fails without touching the state if the game is over, the index is
    /// out of range, or the square is occupied.
    #[instrument(skip(self), fields(mover = ?self.current_mover))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if !self.active {
            return Err(MoveError::GameOver);
        }
        if index >= Board::SIZE {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::SquareOccupied(index));
        }

        self.board.set(index, Square::Occupied(self.current_mover));
        self.history.push(index);
        assert_invariants(self);

        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            debug!(?outcome, "Game finished");
            self.active = false;
        } else {
            self.current_mover = self.current_mover.opponent();
        }
        Ok(outcome)
    }

    /// Clears the board and hands the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
