//! One-shot analysis of a serialized position.

use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;
use ttt_engine::{Board, Mark, MinimaxSearch, Outcome, Scored};

/// Evaluation of a single position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Analysis {
    /// The position in its 9-character form.
    board: String,
    /// Outcome of the position as it stands.
    outcome: Outcome,
    /// Mark whose turn it is.
    to_move: Mark,
    /// Minimax choice for the side to move, unless the game is over.
    best: Option<Scored>,
    /// Positions searched to find `best`.
    nodes: u64,
}

/// Evaluates `board` and, while the game is running, searches it for the side to move.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> Analysis {
    let outcome = board.evaluate();
    let to_move = board.to_move();

    let (best, nodes) = if outcome.is_terminal() {
        (None, 0)
    } else {
        let mut search = MinimaxSearch::new(to_move);
        let best = search.best_move(board);
        (best, search.nodes())
    };

    Analysis {
        board: board.to_serialized(),
        outcome,
        to_move,
        best,
        nodes,
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.outcome)?;
        match &self.best {
            Some(scored) => write!(
                f,
                "{} to move: best {} (score {}, {} positions)",
                self.to_move,
                scored.mv(),
                scored.score(),
                self.nodes
            ),
            None => write!(f, "No move to search"),
        }
    }
}
