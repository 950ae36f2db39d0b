//! Board invariants checked after every applied move.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are checked in debug builds and can be tested independently.

use super::{GameState, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// X moves first, so X count minus O count is always 0 or 1.
pub struct BoardConsistent;

impl Invariant<GameState> for BoardConsistent {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Mark::X);
        let o_count = state.board().count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count minus O count must be 0 or 1"
    }
}

/// Occupied squares are exactly the squares named in the history.
pub struct HistoryComplete;

impl Invariant<GameState> for HistoryComplete {
    fn holds(state: &GameState) -> bool {
        let filled = state.board().occupied();
        let history_len = state.history().len();

        let valid = filled == history_len
            && state.history().iter().all(|&i| !state.board().is_empty(i));
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Occupied squares must match move history"
    }
}

/// Asserts that all game invariants hold (panics on violation in debug builds).
pub fn assert_invariants(state: &GameState) {
    debug_assert!(BoardConsistent::holds(state), "{}", BoardConsistent::description());
    debug_assert!(HistoryComplete::holds(state), "{}", HistoryComplete::description());
}
