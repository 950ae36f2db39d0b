//! Exhaustive minimax search for the "hard" bot.
//!
//! Scores are from the bot's point of view: a win `d` plies deep scores
//! `10 - d`, a loss scores `d - 10`, a draw scores `0`. Faster wins and
//! slower losses are preferred; the classification itself never depends on
//! depth.

use super::BotError;
use crate::games::tictactoe::rules::evaluate;
use crate::games::tictactoe::types::{Board, Mark, Outcome, Square};
use tracing::{debug, instrument};

/// Score of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// Picks the best square for `bot`, assuming perfect replies.
///
/// Candidates are tried in ascending index order and only a strictly
/// better score replaces the current best, so ties go to the lowest index
/// and the result is deterministic. The search runs on a private copy;
/// `board` is never modified.
///
/// # Errors
///
/// Returns [`BotError::NoMovesAvailable`] if the board has no empty square.
#[instrument(skip(board), level = "debug")]
pub fn select_best_move(board: &Board, bot: Mark) -> Result<usize, BotError> {
    let mut work = *board;
    let mut best: Option<(usize, i32)> = None;

    for index in board.empty_indices() {
        work.set(index, Square::Occupied(bot));
        let score = minimax(&mut work, 0, false, bot);
        work.set(index, Square::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(BotError::NoMovesAvailable)?;
    debug!(index, score, "Minimax move chosen");
    Ok(index)
}

/// Scores `board` for `bot` with the side given by `maximizing` to move.
///
/// `maximizing` is true when `bot` moves next. Every placement is undone
/// before the next one is tried, so `board` is unchanged on return.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool, bot: Mark) -> i32 {
    match evaluate(board) {
        Outcome::WinFor(mark) if mark == bot => return WIN_SCORE - depth,
        Outcome::WinFor(_) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::Undecided => {}
    }

    let mark = if maximizing { bot } else { bot.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..Board::SIZE {
        if !board.is_empty(index) {
            continue;
        }
        board.set(index, Square::Occupied(mark));
        let score = minimax(board, depth + 1, !maximizing, bot);
        board.set(index, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
