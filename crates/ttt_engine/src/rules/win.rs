//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Mark, Square};
use tracing::instrument;

/// Every line that wins the game, as row-major square indices.
pub const LINES: [[usize; 3]; 8] = [
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

/// Result of scanning all lines for three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// No line is complete.
    Nobody,
    /// Every complete line belongs to this mark.
    Single(Mark),
    /// Both marks own a complete line.
    Conflict,
}

/// Marks owning each complete line, in line order.
///
/// A mark appears once per line it completes.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = Mark> + '_ {
    let squares = board.squares();
    LINES.iter().filter_map(move |&[a, b, c]| match squares[a] {
        Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(mark)
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Winner {
    completed_lines(board).fold(Winner::Nobody, |winner, mark| match winner {
        Winner::Nobody => Winner::Single(mark),
        Winner::Single(prev) if prev == mark => winner,
        _ => Winner::Conflict,
    })
}
