//! Piece colors and their direction of travel.

use std::fmt;
use std::ops::Not;

/// A side in the game: Black or Red.
///
/// Black sets up on rows 0-2 and travels toward increasing rows; Red sets up
/// on rows 5-7 and travels toward decreasing rows. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::Black, Color::Red];

    /// Return the index (0 for Black, 1 for Red).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }

    /// Row delta of a forward step for a man of this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::Red => -1,
        }
    }

    /// The row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Black => 7,
            Color::Red => 0,
        }
    }

    /// Lowercase name, used in logs and prompts.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn index_values() {
        assert_eq!(Color::Black.index(), 0);
        assert_eq!(Color::Red.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::Black.flip(), Color::Red);
        assert_eq!(!Color::Red, Color::Black);
        assert_eq!(Color::Black.flip().flip(), Color::Black);
    }

    #[test]
    fn forward_points_at_promotion_row() {
        // Black starts on row 0 and heads for row 7; Red the reverse.
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::Black.promotion_row(), 7);
        assert_eq!(Color::Red.forward(), -1);
        assert_eq!(Color::Red.promotion_row(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::Black), "black");
        assert_eq!(format!("{}", Color::Red), "red");
    }
}
