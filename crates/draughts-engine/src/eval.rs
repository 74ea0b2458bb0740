//! Material balance evaluation.
//!
//! Scores are from Red's perspective (positive = Red ahead). Men and kings
//! count the same and there is no positional term.

use draughts_core::{Board, Color};

/// Evaluate a position as Red's live pieces minus Black's.
pub fn evaluate(board: &Board) -> i32 {
    i32::from(board.count(Color::Red)) - i32::from(board.count(Color::Black))
}
