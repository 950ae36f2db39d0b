//! Game rules for tic-tac-toe: line definitions and board evaluation.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, Line, evaluate, winning_line};
