//! Tic-tac-toe against a bot: rules, game state, strategies and turn control.

mod action;
pub mod bot;
mod controller;
mod game;
mod invariants;
mod match_runner;
mod position;
pub mod rules;
mod score;
mod types;

pub use action::MoveError;
pub use bot::{BotError, BotStrategy, Difficulty};
pub use controller::{BOT_MARK, BotTurn, GameController, GameEvent, HUMAN_MARK, Phase};
pub use game::GameState;
pub use invariants::{BoardConsistent, HistoryComplete, Invariant};
pub use match_runner::{MatchError, MatchTally, play_out};
pub use position::Position;
pub use rules::{LINES, Line, evaluate, winning_line};
pub use score::Scoreboard;
pub use types::{Board, BoardParseError, Mark, Outcome, Square};
