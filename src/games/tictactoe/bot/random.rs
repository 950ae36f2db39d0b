//! Uniform random move selection.

use super::BotError;
use crate::games::tictactoe::types::Board;
use rand::Rng;
use tracing::debug;

/// Picks an empty square uniformly at random.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, BotError> {
    let available = board.empty_indices();
    if available.is_empty() {
        return Err(BotError::NoMovesAvailable);
    }
    let index = available[rng.random_range(0..available.len())];
    debug!(index, choices = available.len(), "Random move chosen");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_only_empty_squares_are_chosen() {
        let board: Board = "XOXOX....".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let index = random_move(&board, &mut rng).unwrap();
            assert!((5..9).contains(&index));
        }
    }

    #[test]
    fn test_all_empty_squares_reachable() {
        let board: Board = "X...O....".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<usize> = (0..500)
            .map(|_| random_move(&board, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let a = random_move(&board, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = random_move(&board, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_empty_square() {
        let board: Board = "XOXOXOOX.".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_move(&board, &mut rng), Ok(8));
    }
}
