//! Tic-tac-toe engine with pluggable move strategies.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, its 9-character serialization, move
//!   application and outcome evaluation
//! - **Rules**: pure win, draw and balance checks composed by `Board::evaluate`
//! - **Strategies**: random, one-ply lookahead and exhaustive minimax
//!   players, dispatched through `Player::select_move`
//!
//! The engine does no I/O. Reading moves from a person and printing the
//! board belong to the caller.
//!
//! # Example
//!
//! ```
//! use ttt_engine::{Board, Choice, Mark, Outcome, Player, Strategy};
//!
//! let mut board: Board = "XX OO    ".parse()?;
//! let player = Player::new(Mark::X, Strategy::ExhaustiveMinimax);
//! if let Choice::Play(mv) = player.select_move(&board, &mut rand::rng())? {
//!     board.apply_move(mv, player.mark())?;
//! }
//! assert_eq!(board.evaluate(), Outcome::Win(Mark::X));
//! # Ok::<(), ttt_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod outcome;
pub mod rules;
pub mod strategy;
mod types;

pub use board::Board;
pub use error::{EngineError, FormatError, MoveError, StrategyError};
pub use outcome::Outcome;
pub use strategy::{Choice, Difficulty, MinimaxSearch, Player, Score, Scored, Strategy};
pub use types::{CELLS, Mark, Move, SIDE, Square};
