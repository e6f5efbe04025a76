//! Uniformly random move selection ("easy").

use crate::board::Board;
use crate::error::StrategyError;
use crate::types::{Mark, Move};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks one of the board's legal moves uniformly at random.
///
/// # Errors
///
/// Returns `StrategyError::NoLegalMove` if the board is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn random_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Result<Move, StrategyError> {
    let mv = board
        .legal_moves()
        .choose(rng)
        .copied()
        .ok_or(StrategyError::NoLegalMove(mark))?;
    debug!(%mv, "Random move chosen");
    Ok(mv)
}
