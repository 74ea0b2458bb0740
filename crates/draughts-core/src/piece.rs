//! A single checker: a man or a king of one color.

use std::fmt;

use crate::color::Color;

/// A colored piece. Its position is the board cell that holds it.
///
/// The king flag is monotonic: [`Piece::crown`] sets it and nothing clears it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// An uncrowned piece of the given color.
    #[inline]
    pub const fn man(color: Color) -> Piece {
        Piece { color, king: false }
    }

    /// A crowned piece of the given color.
    #[inline]
    pub const fn king(color: Color) -> Piece {
        Piece { color, king: true }
    }

    /// Return the piece color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` if the piece has been crowned.
    #[inline]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Crown the piece. Has no effect on a king.
    #[inline]
    pub(crate) fn crown(&mut self) {
        self.king = true;
    }

    /// Row deltas this piece may step along, in search order.
    ///
    /// Kings explore toward increasing rows first, then decreasing.
    pub fn row_directions(self) -> &'static [i8] {
        match (self.king, self.color) {
            (true, _) => &[1, -1],
            (false, Color::Black) => &[1],
            (false, Color::Red) => &[-1],
        }
    }

    /// Parse a diagram character: `b`/`B` for black, `r`/`R` for red,
    /// uppercase meaning king.
    pub fn from_char(c: char) -> Option<Piece> {
        let color = match c.to_ascii_lowercase() {
            'b' => Color::Black,
            'r' => Color::Red,
            _ => return None,
        };
        Some(Piece {
            color,
            king: c.is_ascii_uppercase(),
        })
    }

    /// Return the diagram character for this piece.
    pub fn to_char(self) -> char {
        let c = match self.color {
            Color::Black => 'b',
            Color::Red => 'r',
        };
        if self.king { c.to_ascii_uppercase() } else { c }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.king { "King" } else { "Man" };
        write!(f, "{}{}", self.color, kind)
    }
}
