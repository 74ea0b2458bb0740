//! Board coordinates, validated on construction.

use std::fmt;

use crate::error::BoardError;

/// A cell on the 8x8 board, encoded as `row * 8 + col`.
///
/// Row 0 is Black's home rank and row 7 is Red's. A `Square` can only be
/// built from in-range coordinates, so indexing the grid with one never
/// goes out of bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, rejecting anything outside `[0,7]`.
    pub fn new(row: i32, col: i32) -> Result<Square, BoardError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square((row * 8 + col) as u8))
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from a row and column known to be in range.
    #[inline]
    pub(crate) const fn from_coords_unchecked(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column (0..7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Return `true` for the playable (dark) squares, where `row + col` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Step by a row/column delta, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::from_coords_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::BoardError;

    #[test]
    fn new_in_range() {
        let sq = Square::new(2, 5).unwrap();
        assert_eq!(sq.row(), 2);
        assert_eq!(sq.col(), 5);
        assert_eq!(sq.index(), 21);
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        assert_eq!(
            Square::new(8, 0),
            Err(BoardError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Square::new(0, -1),
            Err(BoardError::OutOfBounds { row: 0, col: -1 })
        );
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1).unwrap()));

        let edge = Square::new(7, 6).unwrap();
        assert_eq!(edge.offset(1, 1), None);
        assert_eq!(edge.offset(-1, 1), Some(Square::new(6, 7).unwrap()));
    }

    #[test]
    fn dark_squares() {
        assert!(Square::new(0, 1).unwrap().is_dark());
        assert!(!Square::new(0, 0).unwrap().is_dark());
        assert_eq!(Square::all().filter(|sq| sq.is_dark()).count(), 32);
    }

    #[test]
    fn from_index_bounds() {
        assert!(Square::from_index(63).is_some());
        assert!(Square::from_index(64).is_none());
    }
}
