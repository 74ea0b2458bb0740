//! Fixed-depth adversarial search.

pub mod minimax;

use draughts_core::{Board, CaptureRule, Color, Move};
use tracing::debug;

use minimax::{SearchContext, alpha_beta};

/// The automated, maximizing side. Evaluation is from its perspective.
pub const MAXIMIZER: Color = Color::Red;

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Position after the chosen move; the input position when no move was made.
    pub board: Board,
    /// The chosen root move, `None` at depth 0, in a decided game, or when
    /// the side to move is blocked.
    pub best_move: Option<Move>,
    /// Minimax score of `board`, positive when Red is ahead.
    pub score: i32,
    /// Total nodes visited.
    pub nodes: u64,
}

/// Minimax searcher with alpha-beta pruning.
///
/// Holds no board data between calls; every node works on its own copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    rule: CaptureRule,
}

impl Searcher {
    /// Create a searcher that expands children under `rule`.
    pub fn new(rule: CaptureRule) -> Self {
        Self { rule }
    }

    /// The forced-capture scope used when expanding children.
    pub fn rule(&self) -> CaptureRule {
        self.rule
    }

    /// Search `depth` plies below `board`.
    ///
    /// `maximizing` selects the side to move: Red when true, Black otherwise.
    /// The root caller passes `-INF, INF` as the window and replaces its live
    /// position with [`SearchResult::board`].
    pub fn search(
        &self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> SearchResult {
        let mut ctx = SearchContext {
            nodes: 0,
            rule: self.rule,
        };

        let node = alpha_beta(board, depth, maximizing, alpha, beta, &mut ctx);

        debug!(
            depth,
            maximizing,
            score = node.score,
            nodes = ctx.nodes,
            best_move = ?node.mv,
            "search finished"
        );

        SearchResult {
            board: node.board,
            best_move: node.mv,
            score: node.score,
            nodes: ctx.nodes,
        }
    }
}
