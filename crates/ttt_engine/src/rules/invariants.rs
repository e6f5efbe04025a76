//! Consistency invariants for boards built from outside input.
//!
//! A board reached through alternating play always satisfies these.
//! A board parsed from a snapshot may not. `Board::evaluate` runs
//! `BoardInvariants` on every position without a single winner and
//! reports a failing board as `Outcome::Impossible`.

use super::{balance, win};
use crate::board::Board;

/// A property every board reached by alternating play satisfies.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// An invariant that failed for a particular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Statement of the broken property.
    pub description: &'static str,
}

impl InvariantViolation {
    fn of<S, I: Invariant<S>>(state: &S) -> Option<Self> {
        (!I::holds(state)).then(|| Self {
            description: I::description(),
        })
    }
}

/// Invariants checked together, reporting every failure at once.
pub trait InvariantSet<S> {
    /// Returns every violation, in declaration order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            InvariantViolation::of::<S, A>(state),
            InvariantViolation::of::<S, B>(state),
        ]
        .into_iter()
        .flatten()
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X and O counts differ by at most one.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        balance::is_balanced(board)
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// Invariant: complete lines never belong to both marks.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        win::check_winner(board) != win::Winner::Conflict
    }

    fn description() -> &'static str {
        "At most one mark owns a complete line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarks, SingleWinner);
