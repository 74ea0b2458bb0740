//! Error types for coordinates, position diagrams, and board validation.

use crate::color::Color;

/// Errors from coordinate conversion and structural validation of a
/// [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A coordinate lies outside `[0,7]`.
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
    /// The stored live-piece count disagrees with the grid.
    #[error("{color} count is {stored} but the board holds {found}")]
    CountMismatch {
        /// Which side is inconsistent.
        color: Color,
        /// Count kept by the board.
        stored: u8,
        /// Pieces actually on the grid.
        found: u8,
    },
    /// The stored king count disagrees with the grid.
    #[error("{color} king count is {stored} but the board holds {found}")]
    KingCountMismatch {
        /// Which side is inconsistent.
        color: Color,
        /// Count kept by the board.
        stored: u8,
        /// Kings actually on the grid.
        found: u8,
    },
    /// A side has more than the twelve pieces it starts with.
    #[error("{color} has {count} pieces, at most 12 allowed")]
    TooManyPieces {
        /// Which side has too many pieces.
        color: Color,
        /// Number of pieces found.
        count: u8,
    },
}

/// Errors that occur when parsing a position diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The diagram does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in position diagram, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    #[error("row {row} describes {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}
