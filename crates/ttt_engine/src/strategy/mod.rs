//! Move strategies and the players that use them.
//!
//! Strategies form a closed set dispatched by `Player::select_move`.
//! Computer strategies answer with a move; a human player answers with
//! `Choice::AwaitInput` and the caller collects the move from its input
//! source.

pub mod lookahead;
pub mod minimax;
pub mod random;

pub use lookahead::{lookahead_move, winning_move};
pub use minimax::{DRAW, LOSS, MinimaxSearch, Score, Scored, WIN, minimax_move};
pub use random::random_move;

use crate::board::Board;
use crate::error::StrategyError;
use crate::types::{Mark, Move};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Player selector used when a session is configured.
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Moves typed by a person.
    User,
    /// Random legal moves.
    Easy,
    /// Immediate wins, otherwise random.
    Medium,
    /// Exhaustive minimax.
    Hard,
}

/// How a player chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Moves come from outside the engine.
    Human,
    /// Uniformly random legal move.
    Random,
    /// First immediate win, otherwise random.
    OneStepLookahead,
    /// Full-depth minimax.
    ExhaustiveMinimax,
}

impl From<Difficulty> for Strategy {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::User => Strategy::Human,
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium => Strategy::OneStepLookahead,
            Difficulty::Hard => Strategy::ExhaustiveMinimax,
        }
    }
}

impl From<Strategy> for Difficulty {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Human => Difficulty::User,
            Strategy::Random => Difficulty::Easy,
            Strategy::OneStepLookahead => Difficulty::Medium,
            Strategy::ExhaustiveMinimax => Difficulty::Hard,
        }
    }
}

/// What a player decided to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Play this move.
    Play(Move),
    /// The move has to be supplied by the caller's input source.
    AwaitInput,
}

/// A mark bound to a strategy for the length of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    mark: Mark,
    strategy: Strategy,
}

impl Player {
    /// Creates a player.
    pub fn new(mark: Mark, strategy: Strategy) -> Self {
        Self { mark, strategy }
    }

    /// Creates a player from a session selector.
    pub fn from_difficulty(difficulty: Difficulty, mark: Mark) -> Self {
        Self::new(mark, difficulty.into())
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Strategy this player follows.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns true if the engine chooses this player's moves.
    pub fn is_computer(&self) -> bool {
        self.strategy != Strategy::Human
    }

    /// Chooses a move for this player on `board`.
    ///
    /// The board is only read; simulated moves happen on copies.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::NoLegalMove` if the board is full.
    /// Check `Board::evaluate` before asking for a move.
    #[instrument(skip(self, board, rng), fields(mark = %self.mark, strategy = ?self.strategy))]
    pub fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Choice, StrategyError> {
        if board.is_full() {
            return Err(StrategyError::NoLegalMove(self.mark));
        }

        let choice = match self.strategy {
            Strategy::Human => Choice::AwaitInput,
            Strategy::Random => Choice::Play(random_move(board, self.mark, rng)?),
            Strategy::OneStepLookahead => Choice::Play(lookahead_move(board, self.mark, rng)?),
            Strategy::ExhaustiveMinimax => Choice::Play(minimax_move(board, self.mark)?),
        };
        debug!(?choice, "Player decided");
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_difficulty_names() {
        let names: Vec<String> = Difficulty::iter().map(|d| d.to_string()).collect();
        assert_eq!(names, ["user", "easy", "medium", "hard"]);
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_strategy_mapping() {
        for difficulty in Difficulty::iter() {
            assert_eq!(Difficulty::from(Strategy::from(difficulty)), difficulty);
        }
        assert_eq!(
            Player::from_difficulty(Difficulty::Medium, Mark::O).strategy(),
            Strategy::OneStepLookahead
        );
    }

    #[test]
    fn test_human_awaits_input() {
        let player = Player::new(Mark::X, Strategy::Human);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(!player.is_computer());
        assert_eq!(
            player.select_move(&Board::new(), &mut rng),
            Ok(Choice::AwaitInput)
        );
    }

    #[test]
    fn test_every_strategy_rejects_full_board() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for difficulty in Difficulty::iter() {
            let player = Player::from_difficulty(difficulty, Mark::X);
            assert_eq!(
                player.select_move(&board, &mut rng),
                Err(StrategyError::NoLegalMove(Mark::X))
            );
        }
    }

    #[test]
    fn test_computer_players_return_legal_moves() {
        let board: Board = "X   O    ".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for strategy in [
            Strategy::Random,
            Strategy::OneStepLookahead,
            Strategy::ExhaustiveMinimax,
        ] {
            let player = Player::new(Mark::X, strategy);
            match player.select_move(&board, &mut rng).unwrap() {
                Choice::Play(mv) => assert!(board.is_empty(mv)),
                Choice::AwaitInput => panic!("computer player asked for input"),
            }
        }
    }
}
