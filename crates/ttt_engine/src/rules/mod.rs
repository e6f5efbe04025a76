//! Game rules for tic-tac-toe.
//!
//! Pure functions over a `Board`. Rules are kept apart from board
//! storage so `Board::evaluate` can compose them in a fixed order.

pub mod balance;
pub mod draw;
pub mod invariants;
pub mod win;

pub use balance::{imbalance, is_balanced};
pub use draw::is_full;
pub use invariants::{
    BalancedMarks, BoardInvariants, Invariant, InvariantSet, InvariantViolation, SingleWinner,
};
pub use win::{LINES, Winner, check_winner};
