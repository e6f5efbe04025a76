//! The 3x3 board: parsing, move application and evaluation.

use crate::error::{FormatError, MoveError};
use crate::outcome::Outcome;
use crate::rules::{self, BoardInvariants, InvariantSet, Winner};
use crate::types::{CELLS, Mark, Move, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// `Clone` produces a fully independent copy, which is how strategies
/// simulate moves without touching the live board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Builds a board from its 9-character row-major serialization.
    ///
    /// Each character is `X`, `O`, or a space for an empty square;
    /// `_` is accepted in place of a space.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Length` unless there are exactly nine
    /// characters, and `FormatError::Symbol` for any other character.
    #[instrument]
    pub fn from_serialized(s: &str) -> Result<Self, FormatError> {
        let len = s.chars().count();
        if len != CELLS {
            return Err(FormatError::Length(len));
        }

        let mut board = Self::new();
        for (square, c) in board.squares.iter_mut().zip(s.chars()) {
            *square = match c {
                ' ' | '_' => Square::Empty,
                other => Mark::from_symbol(other)
                    .map(Square::Occupied)
                    .ok_or(FormatError::Symbol(other))?,
            };
        }
        Ok(board)
    }

    /// Returns the 9-character serialization, with spaces for empty squares.
    pub fn to_serialized(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Gets the square a move targets.
    pub fn get(&self, mv: Move) -> Square {
        self.squares[mv.index()]
    }

    /// Checks if the square a move targets is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Square::Empty
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Checks if no empty square remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Mark expected to move next, assuming X opened the game.
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Every empty square, in row-major order.
    ///
    /// Recomputed on each call.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .filter_map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// Places `mark` on the square `mv` targets.
    ///
    /// This is the only way to mutate a board. Turn order is not
    /// checked; `evaluate` reports boards that break alternation.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::Occupied` if the square already holds a mark.
    #[instrument(skip(self), fields(board = %self))]
    pub fn apply_move(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(mv) {
            debug!("Square already occupied");
            return Err(MoveError::Occupied(mv));
        }
        self.squares[mv.index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Returns an independent copy of this board with `mark` placed on `mv`.
    ///
    /// The receiver is left untouched.
    pub fn with_move(&self, mv: Move, mark: Mark) -> Result<Self, MoveError> {
        let mut next = self.clone();
        next.apply_move(mv, mark)?;
        Ok(next)
    }

    /// Derives the outcome of the current position.
    ///
    /// Complete lines for a single mark make the board a win. Otherwise
    /// the board must satisfy `BoardInvariants` (balanced counts, no
    /// lines for both marks) or it is impossible. A full board is then
    /// a draw, and anything else is still in progress.
    pub fn evaluate(&self) -> Outcome {
        if let Winner::Single(mark) = rules::check_winner(self) {
            return Outcome::Win(mark);
        }
        if let Err(violations) = BoardInvariants::check_all(self) {
            debug!(?violations, "Board cannot arise from alternating play");
            return Outcome::Impossible;
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl FromStr for Board {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_serialized(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.to_serialized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_underscore_is_empty() {
        let board = Board::from_serialized("X_O______").unwrap();
        assert_eq!(board.to_serialized(), "X O      ");
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(Board::from_serialized("XO"), Err(FormatError::Length(2)));
        assert_eq!(
            Board::from_serialized("          "),
            Err(FormatError::Length(10))
        );
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert_eq!(
            Board::from_serialized("XO?      "),
            Err(FormatError::Symbol('?'))
        );
    }

    #[test]
    fn test_apply_move_occupied() {
        let mut board = Board::new();
        board.apply_move(mv(1, 1), Mark::X).unwrap();
        assert_eq!(
            board.apply_move(mv(1, 1), Mark::O),
            Err(MoveError::Occupied(mv(1, 1)))
        );
        assert_eq!(board.get(mv(1, 1)), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_legal_moves_skip_occupied() {
        let board: Board = "X   O   X".parse().unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], mv(0, 1));
        assert!(!moves.contains(&mv(1, 1)));
    }

    #[test]
    fn test_to_move_follows_counts() {
        let mut board = Board::new();
        assert_eq!(board.to_move(), Mark::X);
        board.apply_move(mv(0, 0), Mark::X).unwrap();
        assert_eq!(board.to_move(), Mark::O);
    }

    #[test]
    fn test_win_outranks_imbalance() {
        // X has a full row but is three marks ahead.
        let board: Board = "XXX X    ".parse().unwrap();
        assert_eq!(board.evaluate(), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_unbalanced_without_winner_is_impossible() {
        let board: Board = "XX X     ".parse().unwrap();
        assert_eq!(board.evaluate(), Outcome::Impossible);
    }

    #[test]
    fn test_lines_for_both_marks_fail_single_winner() {
        let board: Board = "XXXOOO   ".parse().unwrap();
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            "At most one mark owns a complete line"
        );
        assert_eq!(board.evaluate(), Outcome::Impossible);
    }

    #[test]
    fn test_in_progress() {
        let board: Board = "XO       ".parse().unwrap();
        assert_eq!(board.evaluate(), Outcome::InProgress);
    }
}
