//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIDE: usize = 3;

/// Number of squares on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used for this mark in the serialized board.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parses a serialized board character into a mark.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Character used for this square in the serialized board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}

/// A move target: 0-based row and column.
///
/// Both coordinates are guaranteed to be on the board, so the board
/// only has to check occupancy when a move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a `Move`.
#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl Move {
    /// Creates a move from 0-based coordinates.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if either coordinate is not in `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIDE || col >= SIDE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a move from the 1-based coordinates a human types.
    #[instrument]
    pub fn from_one_based(row: usize, col: usize) -> Result<Self, MoveError> {
        if row == 0 || col == 0 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Self::new(row - 1, col - 1).map_err(|_| MoveError::OutOfRange { row, col })
    }

    /// Creates a move from a row-major square index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Self {
            row: index / SIDE,
            col: index % SIDE,
        })
    }

    /// Row-major square index (0-8).
    pub fn index(self) -> usize {
        self.row * SIDE + self.col
    }

    /// 0-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// 0-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Coordinates as a human would type them (1-based).
    pub fn to_one_based(self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (row, col) = self.to_one_based();
        write!(f, "{} {}", row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_parses_from_str() {
        assert_eq!("X".parse::<Mark>(), Ok(Mark::X));
        assert!("Z".parse::<Mark>().is_err());
    }

    #[test]
    fn test_move_bounds() {
        assert!(Move::new(2, 2).is_ok());
        assert_eq!(
            Move::new(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_one_based_translation() {
        let mv = Move::from_one_based(1, 3).unwrap();
        assert_eq!((mv.row(), mv.col()), (0, 2));
        assert_eq!(mv.to_string(), "1 3");
        assert!(Move::from_one_based(0, 1).is_err());
        assert_eq!(
            Move::from_one_based(4, 1),
            Err(MoveError::OutOfRange { row: 4, col: 1 })
        );
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..CELLS {
            assert_eq!(Move::from_index(index).unwrap().index(), index);
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_move_deserialize_checks_bounds() {
        let mv: Move = serde_json::from_str(r#"{"row":1,"col":2}"#).unwrap();
        assert_eq!(mv, Move::new(1, 2).unwrap());
        assert_eq!(serde_json::to_string(&mv).unwrap(), r#"{"row":1,"col":2}"#);

        for text in [r#"{"row":1,"col":5}"#, r#"{"row":5,"col":5}"#] {
            let err = serde_json::from_str::<Move>(text).unwrap_err();
            assert!(err.to_string().contains("off the board"), "{}", err);
        }
    }
}
