//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Square;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "XO X O XO".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(is_full(&board));
    }
}
