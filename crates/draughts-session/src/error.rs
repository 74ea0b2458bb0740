//! Session and terminal errors.

use draughts_core::BoardError;

/// Errors that can occur while driving a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A clicked coordinate is not on the board.
    #[error("{source}")]
    OutOfBounds {
        /// The underlying coordinate error.
        #[from]
        source: BoardError,
    },

    /// The clicked cell is not a destination of the selected piece.
    #[error("({row}, {col}) is not a legal destination")]
    IllegalDestination {
        /// Row of the rejected cell.
        row: u8,
        /// Column of the rejected cell.
        col: u8,
    },

    /// A destination was given while no piece is selected.
    #[error("no piece is selected")]
    NoActiveSelection,

    /// Input arrived after the game ended.
    #[error("the game is over")]
    GameFinished,

    /// An action was attempted on the other side's turn.
    #[error("it is not your turn")]
    NotYourTurn,

    /// The search depth is not a number in `1..=5`.
    #[error("invalid depth: {value} (expected 1-5)")]
    InvalidDepth {
        /// The rejected input.
        value: String,
    },

    /// A terminal line could not be parsed.
    #[error("unrecognized command: {input}")]
    InvalidCommand {
        /// The rejected line.
        input: String,
    },

    /// An I/O error occurred on the terminal.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
