//! Legal move generation, including recursive multi-hop captures.

use crate::board::Board;
use crate::color::Color;
use crate::moves::{Move, MoveList};
use crate::piece::Piece;
use crate::square::Square;

/// Column deltas, explored left then right.
const COLUMN_DIRECTIONS: [i8; 2] = [-1, 1];

/// How far the forced-capture rule reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureRule {
    /// A piece that can capture must capture; other pieces may still step.
    #[default]
    PerPiece,
    /// If any piece of the side can capture, only capturing moves are legal.
    Mandatory,
}

/// Generate the legal moves of the piece on `from`.
///
/// Men search forward only, kings both ways. When a capture is available
/// the result holds only capturing moves. An empty cell yields no moves.
pub fn legal_moves(board: &Board, from: Square) -> MoveList {
    let Some(piece) = board.piece_at(from) else {
        return MoveList::new();
    };

    let mut found = Vec::new();
    for &d_row in piece.row_directions() {
        for d_col in COLUMN_DIRECTIONS {
            explore(board, piece, from, from, d_row, d_col, &[], &mut found);
        }
    }

    if found.iter().any(Move::is_capture) {
        found.retain(Move::is_capture);
    }
    MoveList::from(found)
}

/// Follow one diagonal from `at`, recording steps and captures into `out`.
///
/// `chain` holds the pieces already hopped on this branch. It is extended
/// on a fresh copy, so sibling branches never see each other's hops.
#[allow(clippy::too_many_arguments)]
fn explore(
    board: &Board,
    piece: Piece,
    from: Square,
    at: Square,
    d_row: i8,
    d_col: i8,
    chain: &[Square],
    out: &mut Vec<Move>,
) {
    let Some(step) = at.offset(d_row, d_col) else {
        return;
    };

    match board.piece_at(step) {
        None if chain.is_empty() => out.push(Move::simple(from, step)),
        // A chain can only continue by hopping.
        None => {}
        Some(other) if other.color() != piece.color() => {
            let Some(landing) = step.offset(d_row, d_col) else {
                return;
            };
            if board.piece_at(landing).is_some() {
                return;
            }

            let mut extended = chain.to_vec();
            extended.push(step);
            out.push(Move::capture(from, landing, extended.clone()));

            // A man reaching its crowning row ends the turn there.
            if landing.row() == piece.color().promotion_row() && !piece.is_king() {
                return;
            }
            for next_col in COLUMN_DIRECTIONS {
                explore(board, piece, from, landing, d_row, next_col, &extended, out);
            }
        }
        Some(_) => {}
    }
}

/// Return `true` if any piece of `side` has a capture available.
pub fn side_can_capture(board: &Board, side: Color) -> bool {
    board
        .pieces(side)
        .any(|(sq, _)| legal_moves(board, sq).has_capture())
}

/// Legal moves of the piece on `from` under the given capture rule.
///
/// With [`CaptureRule::Mandatory`] a piece without a capture has no moves
/// while another piece of its side can capture.
pub fn selectable_moves(board: &Board, from: Square, rule: CaptureRule) -> MoveList {
    let moves = legal_moves(board, from);
    match (rule, board.piece_at(from)) {
        (CaptureRule::Mandatory, Some(piece))
            if !moves.has_capture() && side_can_capture(board, piece.color()) =>
        {
            MoveList::new()
        }
        _ => moves,
    }
}

/// Generate every move of `side`, pieces in row-major order and each
/// piece's moves in discovery order.
pub fn generate_moves(board: &Board, side: Color, rule: CaptureRule) -> Vec<Move> {
    let mut moves: Vec<Move> = board
        .pieces(side)
        .flat_map(|(sq, _)| legal_moves(board, sq))
        .collect();

    if rule == CaptureRule::Mandatory && moves.iter().any(Move::is_capture) {
        moves.retain(Move::is_capture);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    #[test]
    fn starting_position_has_seven_moves_per_side() {
        let board = Board::starting_position();
        assert_eq!(generate_moves(&board, Color::Black, CaptureRule::PerPiece).len(), 7);
        assert_eq!(generate_moves(&board, Color::Red, CaptureRule::PerPiece).len(), 7);
    }

    #[test]
    fn man_steps_forward_only() {
        let board = board("8/8/8/3b4/8/8/8/r7");
        let moves = legal_moves(&board, sq(3, 3));
        let dests: Vec<_> = moves.destinations().collect();
        assert_eq!(dests, vec![sq(4, 2), sq(4, 4)]);

        let red = legal_moves(&board, sq(7, 0));
        assert_eq!(red.destinations().collect::<Vec<_>>(), vec![sq(6, 1)]);
    }

    #[test]
    fn king_steps_both_ways() {
        let board = board("8/8/8/3B4/8/8/8/r7");
        let dests: Vec<_> = legal_moves(&board, sq(3, 3)).destinations().collect();
        assert_eq!(dests, vec![sq(4, 2), sq(4, 4), sq(2, 2), sq(2, 4)]);
    }

    #[test]
    fn empty_cell_has_no_moves() {
        let board = Board::starting_position();
        assert!(legal_moves(&board, sq(3, 0)).is_empty());
    }

    #[test]
    fn blocked_by_friendly_piece() {
        let board = board("8/8/8/8/8/8/1r6/r7");
        assert!(legal_moves(&board, sq(7, 0)).is_empty());
    }

    #[test]
    fn single_capture_is_forced() {
        // Red man on (5,2) can step to (4,1) or capture (4,3) landing on (3,4).
        let board = board("8/8/8/8/3b4/2r5/8/8");
        let moves = legal_moves(&board, sq(5, 2));
        assert_eq!(moves.len(), 1);
        let mv = &moves.as_slice()[0];
        assert_eq!(mv.to(), sq(3, 4));
        assert_eq!(mv.captures(), &[sq(4, 3)]);
    }

    #[test]
    fn capture_blocked_by_occupied_landing() {
        let board = board("8/8/8/4b3/3b4/2r5/8/8");
        let moves = legal_moves(&board, sq(5, 2));
        assert!(!moves.has_capture());
        assert_eq!(moves.destinations().collect::<Vec<_>>(), vec![sq(4, 1)]);
    }

    #[test]
    fn capture_off_the_edge_is_not_possible() {
        let board = board("8/8/8/8/b7/1r6/8/8");
        let moves = legal_moves(&board, sq(5, 1));
        assert!(!moves.has_capture());
        assert_eq!(moves.destinations().collect::<Vec<_>>(), vec![sq(4, 2)]);
    }

    #[test]
    fn double_jump_records_each_hop() {
        // Red (6,1) hops (5,2) to (4,3), then (3,4) to (2,5).
        let board = board("8/8/8/4b3/8/2b5/1r6/8");
        let moves = legal_moves(&board, sq(6, 1));
        let chains: Vec<_> = moves.capture_chains().collect();
        assert_eq!(
            chains,
            vec![
                (sq(4, 3), &[sq(5, 2)][..]),
                (sq(2, 5), &[sq(5, 2), sq(3, 4)][..]),
            ]
        );
    }

    #[test]
    fn sibling_branches_keep_separate_chains() {
        // Red (6,3) hops (5,2) or (5,4); only the right branch hops again.
        let board = board("8/8/8/6b1/8/2b1b3/3r4/8");
        let moves = legal_moves(&board, sq(6, 3));
        let chains: Vec<_> = moves.capture_chains().map(|(to, c)| (to, c.to_vec())).collect();
        assert_eq!(
            chains,
            vec![
                (sq(4, 1), vec![sq(5, 2)]),
                (sq(4, 5), vec![sq(5, 4)]),
                (sq(2, 7), vec![sq(5, 4), sq(3, 6)]),
            ]
        );
    }

    #[test]
    fn duplicate_destinations_keep_their_own_chain() {
        // Black king on (0,3) reaches (4,3) two ways: via (1,2),(3,2) or via (1,4),(3,4).
        let board = board("3B4/2r1r3/8/2r1r3/8/8/8/8");
        let moves = legal_moves(&board, sq(0, 3));
        let to_center: Vec<_> = moves
            .as_slice()
            .iter()
            .filter(|mv| mv.to() == sq(4, 3))
            .map(|mv| mv.captures().to_vec())
            .collect();
        assert_eq!(
            to_center,
            vec![vec![sq(1, 2), sq(3, 2)], vec![sq(1, 4), sq(3, 4)]]
        );
    }

    #[test]
    fn chain_halts_on_promotion_row() {
        // Red man (2,1) hops (1,2) onto (0,3). The black man on (1,4) with
        // (2,5) open stays untouched: the turn ends where the man is crowned.
        let board = board("8/2b1b3/1r6/8/8/8/8/8");
        let moves = legal_moves(&board, sq(2, 1));
        assert_eq!(moves.len(), 1);
        let mv = &moves.as_slice()[0];
        assert_eq!(mv.to(), sq(0, 3));
        assert_eq!(mv.captures(), &[sq(1, 2)]);
    }

    #[test]
    fn opponent_pieces_only_are_hopped() {
        let board = board("8/8/8/8/3r4/2r5/8/8");
        let moves = legal_moves(&board, sq(5, 2));
        assert!(!moves.has_capture());
    }

    #[test]
    fn mandatory_rule_restricts_side() {
        // Red (5,2) can capture; red (6,7) can only step.
        let board = board("8/8/8/8/3b4/2r5/7r/8");
        let per_piece = generate_moves(&board, Color::Red, CaptureRule::PerPiece);
        assert_eq!(per_piece.len(), 2);
        let mandatory = generate_moves(&board, Color::Red, CaptureRule::Mandatory);
        assert_eq!(mandatory.len(), 1);
        assert!(mandatory[0].is_capture());

        assert!(selectable_moves(&board, sq(6, 7), CaptureRule::Mandatory).is_empty());
        assert_eq!(selectable_moves(&board, sq(6, 7), CaptureRule::PerPiece).len(), 1);
        assert!(side_can_capture(&board, Color::Red));
    }

    #[test]
    fn generation_order_is_row_major() {
        let board = Board::starting_position();
        let moves = generate_moves(&board, Color::Black, CaptureRule::PerPiece);
        let origins: Vec<_> = moves.iter().map(|mv| mv.from()).collect();
        let mut sorted = origins.clone();
        sorted.sort();
        assert_eq!(origins, sorted);
        assert_eq!(moves[0], Move::simple(sq(2, 1), sq(3, 0)));
    }
}
