//! Turn balance: X and O alternate, so their counts stay within one.

use crate::board::Board;
use crate::types::Mark;
use tracing::instrument;

/// Largest legal difference between the X and O counts.
pub const MAX_IMBALANCE: usize = 1;

/// Returns the absolute difference between the X and O counts.
pub fn imbalance(board: &Board) -> usize {
    board.count(Mark::X).abs_diff(board.count(Mark::O))
}

/// Checks that the mark counts could come from alternating moves.
#[instrument(skip(board))]
pub fn is_balanced(board: &Board) -> bool {
    imbalance(board) <= MAX_IMBALANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_balanced() {
        assert!(is_balanced(&Board::new()));
    }

    #[test]
    fn test_one_extra_mark_balanced() {
        let board: Board = "X        ".parse().unwrap();
        assert_eq!(imbalance(&board), 1);
        assert!(is_balanced(&board));
    }

    #[test]
    fn test_either_side_ahead_by_two_unbalanced() {
        let x_ahead: Board = "XX       ".parse().unwrap();
        let o_ahead: Board = "OOOX     ".parse().unwrap();
        assert!(!is_balanced(&x_ahead));
        assert!(!is_balanced(&o_ahead));
    }
}
