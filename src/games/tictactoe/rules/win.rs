//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Outcome, Square};
use super::draw::is_full;

/// Three board indices that form a winning line.
pub type Line = [usize; 3];

/// The eight winning lines, evaluated in this order.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line and its owner.
///
/// Lines are checked rows first, then columns, then diagonals, so a board
/// with several completed lines always reports the same one.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    let squares = board.squares();
    LINES.into_iter().find_map(|line @ [a, b, c]| match squares[a] {
        Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some((mark, line))
        }
        _ => None,
    })
}

/// Evaluates a board snapshot.
///
/// Runs at every node of the minimax search, so it stays uninstrumented.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, _)) = winning_line(board) {
        Outcome::WinFor(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
