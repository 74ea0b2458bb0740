//! Move-tree node counting, used to pin down move generation.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{CaptureRule, generate_moves};

/// Count the leaf nodes of the move tree at the given depth, `side` to move
/// first and the sides alternating each ply.
///
/// Depth 0 returns 1 (the current position). A side with no moves
/// contributes no leaves below it.
pub fn perft(board: &Board, side: Color, depth: usize, rule: CaptureRule) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, side, rule);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&board.make_move(mv), !side, depth - 1, rule))
        .sum()
}
