//! Text rendering of boards and outcomes.

use ttt_engine::{Board, SIDE};

const BORDER: &str = "---------";

/// Renders the board inside a frame, one row per line.
///
/// ```text
/// ---------
/// | X O X |
/// |   O   |
/// | X   O |
/// ---------
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    for row in board.squares().chunks(SIDE) {
        out.push_str("| ");
        for square in row {
            out.push(square.symbol());
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(BORDER);
    out.push('\n');
    out
}
