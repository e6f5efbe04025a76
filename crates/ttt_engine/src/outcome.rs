//! Derived status of a board.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Status of a board, recomputed from its squares on demand.
///
/// Once an outcome is terminal the game is over; the engine keeps
/// reporting it but does not refuse further moves itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Empty squares remain and nobody has won.
    #[display("Game not finished")]
    InProgress,
    /// A single mark owns a complete line.
    #[display("{} wins", _0)]
    Win(Mark),
    /// The board is full without a winner.
    #[display("Draw")]
    Draw,
    /// The board could not arise from alternating play.
    #[display("Impossible")]
    Impossible,
}

impl Outcome {
    /// Returns true once no further moves should be played.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(Outcome::Win(Mark::X).to_string(), "X wins");
        assert_eq!(Outcome::Win(Mark::O).to_string(), "O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(Outcome::Impossible.to_string(), "Impossible");
    }

    #[test]
    fn test_terminal_states() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Impossible.is_terminal());
        assert!(Outcome::Win(Mark::O).is_terminal());
        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
