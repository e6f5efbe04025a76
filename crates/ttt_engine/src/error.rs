//! Error types for the board engine and move strategies.

use crate::types::{CELLS, Mark, Move};

/// Error raised when a serialized board cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FormatError {
    /// The input did not contain exactly nine cells.
    #[display("Board must have {} cells, got {}", CELLS, _0)]
    Length(usize),

    /// The input contained a character other than X, O, space or underscore.
    #[display("Unexpected board symbol {:?}", _0)]
    Symbol(char),
}

impl std::error::Error for FormatError {}

/// Error that can occur when building or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Move),

    /// The coordinates do not address a square on the board.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// Error raised when a strategy is asked to move on a finished board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StrategyError {
    /// No empty square is left for the given mark.
    #[display("No legal move left for {}", _0)]
    NoLegalMove(Mark),
}

impl std::error::Error for StrategyError {}

/// Any error produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum EngineError {
    /// Board parse failure.
    #[display("Format error: {}", _0)]
    Format(FormatError),

    /// Move construction or application failure.
    #[display("Move error: {}", _0)]
    Move(MoveError),

    /// Strategy invoked without a legal move.
    #[display("Strategy error: {}", _0)]
    Strategy(StrategyError),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Format(err) => Some(err),
            EngineError::Move(err) => Some(err),
            EngineError::Strategy(err) => Some(err),
        }
    }
}
