//! Position diagram parsing and serialization for [`Board`].
//!
//! A diagram lists rows 0 through 7 separated by `/`. Each row describes
//! eight cells: `b`/`B` for a black man/king, `r`/`R` for a red man/king,
//! `.` or a digit `1`-`8` for that many empty cells.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PositionError;
use crate::piece::Piece;
use crate::square::Square;

/// The diagram of the standard starting position.
pub const STARTING_DIAGRAM: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1";

impl FromStr for Board {
    type Err = PositionError;

    fn from_str(diagram: &str) -> Result<Board, PositionError> {
        let rows: Vec<&str> = diagram.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PositionError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if c == '.' {
                    col += 1;
                    continue;
                }
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PositionError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece =
                    Piece::from_char(c).ok_or(PositionError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(PositionError::BadRowLength {
                        row,
                        length: col + 1,
                    });
                }
                board.put(Square::new(row as i32, col as i32)?, piece);
                col += 1;
            }

            if col != 8 {
                return Err(PositionError::BadRowLength { row, length: col });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                let sq = Square::from_index(row * 8 + col).ok_or(fmt::Error)?;
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_DIAGRAM;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::{BoardError, PositionError};
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_diagram_matches_starting_position() {
        let board: Board = STARTING_DIAGRAM.parse().unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(Board::starting_position().to_string(), STARTING_DIAGRAM);
    }

    #[test]
    fn dots_and_digits_mix() {
        let board: Board = "..b5/8/8/8/8/8/8/R7".parse().unwrap();
        let sq = Square::new(0, 2).unwrap();
        assert_eq!(board.piece_at(sq), Some(Piece::man(Color::Black)));
        assert_eq!(board.king_count(Color::Red), 1);
        assert_eq!(board.to_string(), "2b5/8/8/8/8/8/8/R7");
    }

    #[test]
    fn wrong_row_count() {
        let err = "8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PositionError::WrongRowCount { found: 3 });
    }

    #[test]
    fn short_and_long_rows() {
        let err = "7/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PositionError::BadRowLength { row: 0, length: 7 });

        let err = "8b/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PositionError::BadRowLength { row: 0, length: 9 });
    }

    #[test]
    fn invalid_character() {
        let err = "8/8/8/3x4/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PositionError::InvalidPieceChar { character: 'x' });
    }

    #[test]
    fn too_many_pieces() {
        let err = "bbbbbbbb/bbbbb3/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            PositionError::InvalidBoard {
                source: BoardError::TooManyPieces {
                    color: Color::Black,
                    count: 13
                }
            }
        );
    }
}
