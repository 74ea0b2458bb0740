//! Turn-level game state machine.
//!
//! The human plays Black and moves first; the engine plays Red. Human input
//! arrives as cell clicks: the first click selects a piece, the second
//! chooses one of its destinations.

use tracing::{debug, info, warn};

use draughts_core::{Board, Color, Move, MoveList, Square, generate_moves, selectable_moves};
use draughts_engine::{INF, MAXIMIZER, SearchResult, Searcher};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// The side driven by clicks.
pub const HUMAN: Color = MAXIMIZER.flip();

/// Where the game stands between two inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to pick one of their pieces.
    AwaitingSelection,
    /// A piece is selected; the next click should be one of its destinations.
    PieceSelected {
        /// The selected piece.
        from: Square,
        /// Its moves under the session's capture rule.
        moves: MoveList,
    },
    /// The engine is to move.
    AutomatedTurn,
    /// The game is over.
    Finished {
        /// The side that won.
        winner: Color,
    },
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An own piece was selected.
    Selected {
        /// The selected piece.
        from: Square,
    },
    /// The click hit an empty cell or an opposing piece.
    Ignored,
    /// The selected piece moved.
    Moved {
        /// The move that was played.
        mv: Move,
        /// Number of pieces it captured.
        captured: usize,
    },
}

/// A game between a human and the engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    phase: Phase,
    config: SessionConfig,
    searcher: Searcher,
}

impl Game {
    /// Start a game from the standard position.
    pub fn new(config: SessionConfig) -> Self {
        Self::from_position(config, Board::starting_position(), HUMAN)
    }

    /// Start a game from `board` with `turn` to move.
    pub fn from_position(config: SessionConfig, board: Board, turn: Color) -> Self {
        let mut game = Self {
            board,
            turn,
            phase: Phase::AwaitingSelection,
            config,
            searcher: Searcher::new(config.capture_rule),
        };
        game.phase = game.next_phase();
        game
    }

    /// The live position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current turn phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The settings this game was started with, hints toggled in place.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Destinations to mark on the board: the selected piece's, when hints
    /// are on.
    pub fn hints(&self) -> Vec<Square> {
        match &self.phase {
            Phase::PieceSelected { moves, .. } if self.config.show_hints => {
                moves.destinations().collect()
            }
            _ => Vec::new(),
        }
    }

    /// Flip hint display, returning the new setting.
    pub fn toggle_hints(&mut self) -> bool {
        self.config.show_hints = !self.config.show_hints;
        self.config.show_hints
    }

    /// Handle a human click on `sq`.
    ///
    /// A click that is not a destination of the selected piece deselects it
    /// and is handled again as a fresh selection.
    pub fn click(&mut self, sq: Square) -> Result<ClickOutcome, SessionError> {
        loop {
            match self.phase {
                Phase::Finished { .. } => return Err(SessionError::GameFinished),
                Phase::AutomatedTurn => return Err(SessionError::NotYourTurn),
                Phase::AwaitingSelection => return Ok(self.select(sq)),
                Phase::PieceSelected { .. } => match self.move_selected(sq) {
                    Err(SessionError::IllegalDestination { row, col }) => {
                        debug!(row, col, "not a destination, reselecting");
                    }
                    result => return result,
                },
            }
        }
    }

    /// Play the selected piece to `to`.
    ///
    /// On an illegal destination the piece is deselected and the board is
    /// left untouched.
    pub fn move_selected(&mut self, to: Square) -> Result<ClickOutcome, SessionError> {
        let Phase::PieceSelected { moves, .. } = &self.phase else {
            return Err(SessionError::NoActiveSelection);
        };

        let Some(mv) = moves.find(to).cloned() else {
            self.phase = Phase::AwaitingSelection;
            return Err(SessionError::IllegalDestination {
                row: to.row(),
                col: to.col(),
            });
        };

        let captured = self.board.play(&mv);
        info!(side = %self.turn, mv = %mv, captured, "human moved");
        self.end_turn();
        Ok(ClickOutcome::Moved { mv, captured })
    }

    /// Let the engine pick and play its move.
    pub fn play_automated_turn(&mut self) -> Result<SearchResult, SessionError> {
        match self.phase {
            Phase::AutomatedTurn => {}
            Phase::Finished { .. } => return Err(SessionError::GameFinished),
            _ => return Err(SessionError::NotYourTurn),
        }

        let result = self
            .searcher
            .search(&self.board, self.config.depth, true, -INF, INF);

        let Some(mv) = &result.best_move else {
            warn!("engine found no move");
            self.phase = Phase::Finished { winner: HUMAN };
            return Ok(result);
        };

        info!(
            mv = %mv,
            captured = mv.captures().len(),
            score = result.score,
            nodes = result.nodes,
            "engine moved"
        );
        self.board = result.board;
        self.end_turn();
        Ok(result)
    }

    fn select(&mut self, sq: Square) -> ClickOutcome {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color() == self.turn => {
                let moves = selectable_moves(&self.board, sq, self.config.capture_rule);
                debug!(square = %sq, moves = moves.len(), "piece selected");
                self.phase = Phase::PieceSelected { from: sq, moves };
                ClickOutcome::Selected { from: sq }
            }
            _ => ClickOutcome::Ignored,
        }
    }

    fn end_turn(&mut self) {
        self.turn = !self.turn;
        self.phase = self.next_phase();
        if let Phase::Finished { winner } = self.phase {
            info!(%winner, "game over");
        }
    }

    fn next_phase(&self) -> Phase {
        if let Some(winner) = self.board.winner() {
            return Phase::Finished { winner };
        }
        if generate_moves(&self.board, self.turn, self.config.capture_rule).is_empty() {
            return Phase::Finished { winner: !self.turn };
        }
        if self.turn == HUMAN {
            Phase::AwaitingSelection
        } else {
            Phase::AutomatedTurn
        }
    }
}
