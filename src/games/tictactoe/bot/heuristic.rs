//! Rule-based "medium" bot: block first, then win, else random.

use super::BotError;
use super::random::random_move;
use crate::games::tictactoe::rules::LINES;
use crate::games::tictactoe::types::{Board, Mark, Square};
use rand::Rng;
use tracing::debug;

/// Finds the empty square that completes a line for `mark`.
///
/// A line qualifies when `mark` holds exactly two of its squares and the
/// third is empty. Lines are scanned in [`LINES`] order; the first match wins.
pub fn completing_square(board: &Board, mark: Mark) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&i| board.get(i) == Some(Square::Occupied(mark)))
            .count();
        let mut empty = line.iter().copied().filter(|&i| board.is_empty(i));
        match (owned, empty.next(), empty.next()) {
            (2, Some(index), None) => Some(index),
            _ => None,
        }
    })
}

/// Blocks the opponent's two-in-a-line, else completes the bot's own,
/// else plays randomly.
///
/// Blocking is checked before winning, so the bot will block even when it
/// could win on the spot.
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    bot: Mark,
    rng: &mut R,
) -> Result<usize, BotError> {
    if board.empty_indices().is_empty() {
        return Err(BotError::NoMovesAvailable);
    }

    if let Some(index) = completing_square(board, bot.opponent()) {
        debug!(index, "Blocking opponent line");
        return Ok(index);
    }

    if let Some(index) = completing_square(board, bot) {
        debug!(index, "Completing own line");
        return Ok(index);
    }

    random_move(board, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_blocks_top_row() {
        let board: Board = "XX.......".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(heuristic_move(&board, Mark::O, &mut rng), Ok(2));
    }

    #[test]
    fn test_blocks_gap_in_line() {
        let board: Board = "X.X.O....".parse().unwrap();
        assert_eq!(completing_square(&board, Mark::X), Some(1));
    }

    #[test]
    fn test_blocks_before_winning() {
        // O could win at 5, but X threatens 2 and blocking comes first.
        let board: Board = "XX.OO....".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(heuristic_move(&board, Mark::O, &mut rng), Ok(2));
    }

    #[test]
    fn test_takes_win_when_nothing_to_block() {
        let board: Board = "X..OO...X".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(heuristic_move(&board, Mark::O, &mut rng), Ok(5));
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // X threatens both row 3-4-5 (at 5) and column 0-3-6 (at 6).
        let board: Board = "X..XX....".parse().unwrap();
        assert_eq!(completing_square(&board, Mark::X), Some(5));
    }

    #[test]
    fn test_blocked_line_is_ignored() {
        let board: Board = "XXO......".parse().unwrap();
        assert_eq!(completing_square(&board, Mark::X), None);
    }

    #[test]
    fn test_works_for_bot_playing_x() {
        let board: Board = "OO.X.....".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(heuristic_move(&board, Mark::X, &mut rng), Ok(2));
    }
}
