//! Minimax with alpha-beta pruning over board copies.

use draughts_core::{Board, CaptureRule, Color, Move, generate_moves};

use crate::evaluate;

/// Sentinel bound standing in for infinity in alpha/beta windows.
pub const INF: i32 = 30_000;

/// Score of a node whose side to move has no legal move.
///
/// Beyond any material balance but strictly inside the sentinels, so a
/// parent always records one of its children.
pub const WIN_SCORE: i32 = 1_000;

/// The best continuation found below one node.
#[derive(Debug, Clone)]
pub(super) struct Node {
    /// Position after the chosen move, or the node's own position at a leaf.
    pub board: Board,
    /// The chosen move, `None` at a leaf or a blocked node.
    pub mv: Option<Move>,
    pub score: i32,
}

/// Search state threaded through the recursion.
pub(super) struct SearchContext {
    /// Total nodes visited.
    pub nodes: u64,
    /// Forced-capture scope used to expand children.
    pub rule: CaptureRule,
}

/// The side to move at a maximizing or minimizing layer.
#[inline]
pub(super) fn mover(maximizing: bool) -> Color {
    if maximizing { super::MAXIMIZER } else { !super::MAXIMIZER }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Children are expanded in generation order and only a strictly better
/// score replaces the current best, so ties keep the first child found.
pub(super) fn alpha_beta(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> Node {
    ctx.nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return Node {
            board: *board,
            mv: None,
            score: evaluate(board),
        };
    }

    let moves = generate_moves(board, mover(maximizing), ctx.rule);

    // Blocked: the side to move loses.
    if moves.is_empty() {
        return Node {
            board: *board,
            mv: None,
            score: if maximizing { -WIN_SCORE } else { WIN_SCORE },
        };
    }

    let mut best = Node {
        board: *board,
        mv: None,
        score: if maximizing { -INF } else { INF },
    };

    for mv in moves {
        let child = board.make_move(&mv);
        let score = alpha_beta(&child, depth - 1, !maximizing, alpha, beta, ctx).score;

        if maximizing {
            if score > best.score {
                best = Node {
                    board: child,
                    mv: Some(mv),
                    score,
                };
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = Node {
                    board: child,
                    mv: Some(mv),
                    score,
                };
            }
            beta = beta.min(score);
        }

        if alpha >= beta {
            break;
        }
    }

    best
}
