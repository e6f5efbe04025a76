//! Parsing of coordinates typed by a human player.

use std::num::IntErrorKind;
use tracing::instrument;
use ttt_engine::{Move, SIDE};

/// Reasons a coordinate line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The line is not exactly two integers.
    #[display("You should enter numbers!")]
    NotNumbers,

    /// A coordinate is outside 1..=3.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
}

impl std::error::Error for InputError {}

/// Message shown when the chosen square already holds a mark.
pub const OCCUPIED_MESSAGE: &str = "This cell is occupied! Choose another one!";

/// Parses "row column" with both values 1-based.
#[instrument]
pub fn parse_coordinates(line: &str) -> Result<Move, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = words.as_slice() else {
        return Err(InputError::NotNumbers);
    };

    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;

    match (row, col) {
        (Some(row), Some(col)) if in_range(row) && in_range(col) => {
            Move::from_one_based(row as usize, col as usize).map_err(|_| InputError::OutOfRange)
        }
        _ => Err(InputError::OutOfRange),
    }
}

fn in_range(value: i64) -> bool {
    (1..=SIDE as i64).contains(&value)
}

/// Parses one integer. `None` means it does not fit in an `i64`, which
/// is still a number, just off the board.
fn parse_coordinate(word: &str) -> Result<Option<i64>, InputError> {
    match word.parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Ok(None),
            _ => Err(InputError::NotNumbers),
        },
    }
}
