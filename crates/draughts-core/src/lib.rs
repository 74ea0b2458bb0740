//! Core checkers types: board representation, move generation, and game rules.

mod board;
mod color;
mod error;
mod movegen;
mod moves;
mod perft;
mod piece;
mod position;
mod square;

pub use board::{Board, PIECES_PER_SIDE, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, PositionError};
pub use movegen::{CaptureRule, generate_moves, legal_moves, selectable_moves, side_can_capture};
pub use moves::{Move, MoveList};
pub use perft::perft;
pub use piece::Piece;
pub use position::STARTING_DIAGRAM;
pub use square::Square;
