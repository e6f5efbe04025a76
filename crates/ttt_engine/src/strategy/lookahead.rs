//! One-ply lookahead ("medium"): take an immediate win, otherwise play randomly.
//!
//! The lookahead only considers its own mark. It never notices that the
//! opponent is one move from winning, so it does not block.

use super::random::random_move;
use crate::board::Board;
use crate::error::StrategyError;
use crate::outcome::Outcome;
use crate::types::{Mark, Move};
use rand::Rng;
use tracing::{debug, instrument};

/// First legal move, in row-major order, that wins outright for `mark`.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_move(board: &Board, mark: Mark) -> Option<Move> {
    board.legal_moves().into_iter().find(|&mv| {
        board
            .with_move(mv, mark)
            .is_ok_and(|next| next.evaluate() == Outcome::Win(mark))
    })
}

/// Plays the first immediate win, or a random legal move when none exists.
///
/// # Errors
///
/// Returns `StrategyError::NoLegalMove` if the board is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn lookahead_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Result<Move, StrategyError> {
    if let Some(mv) = winning_move(board, mark) {
        debug!(%mv, "Lookahead found a winning move");
        return Ok(mv);
    }
    random_move(board, mark, rng)
}
