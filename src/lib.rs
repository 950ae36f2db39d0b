//! Tic-tac-toe engine with a bot opponent.
//!
//! The crate holds the game logic behind a human-vs-bot tic-tac-toe UI. It
//! owns no rendering or input handling; a front end feeds it move requests
//! and redraws from the events it emits.
//!
//! # Architecture
//!
//! - **Rules**: the eight winning lines and board evaluation
//! - **GameState**: the board, the side to move, and the active flag
//! - **Bots**: random, rule-based blocking, and exhaustive minimax
//! - **GameController**: turn order, delayed bot moves, outcome events
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tictactoe_bot::{Difficulty, GameController, Phase};
//!
//! let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut controller = GameController::new(Difficulty::Hard, Duration::ZERO, Some(1), tx);
//!
//! let turn = controller.request_move(0).expect("bot turn scheduled");
//! assert!(controller.bot_turn_elapsed(turn));
//! assert_eq!(controller.phase(), Phase::AwaitingHumanMove);
//! assert!(!controller.state().board().is_empty(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOT_MARK, Board, BoardConsistent, BoardParseError, BotError, BotStrategy, BotTurn, Difficulty,
    GameController, GameEvent, GameState, HUMAN_MARK, HistoryComplete, Invariant, LINES, Line,
    Mark, MatchError, MatchTally, MoveError, Outcome, Phase, Position, Scoreboard, Square,
    evaluate, play_out, winning_line,
};

// Crate-level exports - Search internals
pub use games::tictactoe::bot::minimax;
pub use games::tictactoe::bot::{completing_square, heuristic_move, random_move};
