//! Exhaustive minimax search ("hard").
//!
//! The whole game tree below the current position is searched, with no
//! pruning and no depth limit; a 3x3 board never needs more than nine
//! plies. Scores are +1 for a win by the searching mark, -1 for a loss
//! and 0 for a draw. Depth is not part of the score, so a quick win and
//! a slow win rank the same and the earlier move in row-major order is
//! played.

use crate::board::Board;
use crate::error::StrategyError;
use crate::outcome::Outcome;
use crate::types::{Mark, Move};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a position for the searching mark.
pub type Score = i8;

/// Score of a position the searching mark has won.
pub const WIN: Score = 1;
/// Score of a drawn position.
pub const DRAW: Score = 0;
/// Score of a position the opponent has won.
pub const LOSS: Score = -1;

/// A root move together with the value of the position it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scored {
    /// Move played at the root.
    mv: Move,
    /// Minimax value after the move.
    score: Score,
}

/// Full-depth minimax search on behalf of one mark.
#[derive(Debug, Clone)]
pub struct MinimaxSearch {
    mark: Mark,
    nodes: u64,
}

impl MinimaxSearch {
    /// Creates a search that maximizes for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark, nodes: 0 }
    }

    /// Mark the search plays for.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Positions evaluated below the root by the last call to `best_move`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches every legal move and returns the best one.
    ///
    /// Each root move is played with the search's own mark and its
    /// subtree is valued with the opponent to move. Only a strictly
    /// greater score replaces the current best, so ties go to the first
    /// move in row-major order. Returns `None` on a full board.
    #[instrument(skip(self, board), fields(mark = %self.mark, board = %board))]
    pub fn best_move(&mut self, board: &Board) -> Option<Scored> {
        self.nodes = 0;
        let mut best: Option<Scored> = None;

        for mv in board.legal_moves() {
            let Ok(child) = board.with_move(mv, self.mark) else {
                continue;
            };
            let score = self.minimax(&child, false);
            if best.is_none_or(|b| score > b.score) {
                best = Some(Scored { mv, score });
            }
        }

        debug!(nodes = self.nodes, ?best, "Minimax search complete");
        best
    }

    /// Value of `board` with the own mark to move when `maximizing`,
    /// the opponent otherwise.
    fn minimax(&mut self, board: &Board, maximizing: bool) -> Score {
        self.nodes += 1;

        match board.evaluate() {
            Outcome::Win(winner) if winner == self.mark => return WIN,
            Outcome::Win(_) => return LOSS,
            Outcome::Draw | Outcome::Impossible => return DRAW,
            Outcome::InProgress => {}
        }

        let to_play = if maximizing {
            self.mark
        } else {
            self.mark.opponent()
        };
        let children = board
            .legal_moves()
            .into_iter()
            .filter_map(|mv| board.with_move(mv, to_play).ok());

        let value = if maximizing {
            children.map(|child| self.minimax(&child, false)).max()
        } else {
            children.map(|child| self.minimax(&child, true)).min()
        };
        value.unwrap_or(DRAW)
    }
}

/// Picks the minimax-optimal move for `mark`.
///
/// # Errors
///
/// Returns `StrategyError::NoLegalMove` if the board is full.
pub fn minimax_move(board: &Board, mark: Mark) -> Result<Move, StrategyError> {
    MinimaxSearch::new(mark)
        .best_move(board)
        .map(|scored| scored.mv)
        .ok_or(StrategyError::NoLegalMove(mark))
}
