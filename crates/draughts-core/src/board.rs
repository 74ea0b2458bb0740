//! The checkers board: piece placement plus per-color piece and king counts.

use std::fmt;

use tracing::debug;

use crate::color::Color;
use crate::error::BoardError;
use crate::moves::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Number of pieces each side starts with.
pub const PIECES_PER_SIDE: u8 = 12;

/// Complete game position.
///
/// A plain `Copy` value: every search node works on its own copy, so a
/// hypothetical move can never leak into the live game.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Cell contents in row-major order, indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
    /// Live pieces per side, indexed by [`Color::index()`].
    counts: [u8; Color::COUNT],
    /// Kings per side, indexed by [`Color::index()`].
    kings: [u8; Color::COUNT],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
            counts: [0; Color::COUNT],
            kings: [0; Color::COUNT],
        }
    }

    /// Return the standard starting position: twelve men per side on the
    /// dark squares of rows 0-2 (Black) and rows 5-7 (Red).
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            match sq.row() {
                0..=2 => board.put(sq, Piece::man(Color::Black)),
                5..=7 => board.put(sq, Piece::man(Color::Red)),
                _ => {}
            }
        }
        board
    }

    /// Place a piece on an empty cell, keeping the counts in step.
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.cells[sq.index()].is_none(), "cell {sq} already occupied");
        self.cells[sq.index()] = Some(piece);
        self.counts[piece.color().index()] += 1;
        if piece.is_king() {
            self.kings[piece.color().index()] += 1;
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Live pieces of one side.
    #[inline]
    pub fn count(&self, color: Color) -> u8 {
        self.counts[color.index()]
    }

    /// Kings of one side.
    #[inline]
    pub fn king_count(&self, color: Color) -> u8 {
        self.kings[color.index()]
    }

    /// Pieces of one side that have been captured so far.
    #[inline]
    pub fn captured(&self, color: Color) -> u8 {
        PIECES_PER_SIDE.saturating_sub(self.count(color))
    }

    /// Live piece counts as `(black, red)`.
    #[inline]
    pub fn counts(&self) -> (u8, u8) {
        (self.count(Color::Black), self.count(Color::Red))
    }

    /// The side whose opponent has no pieces left, if any.
    pub fn winner(&self) -> Option<Color> {
        if self.count(Color::Black) == 0 {
            Some(Color::Red)
        } else if self.count(Color::Red) == 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Iterate over one side's pieces in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color() == color)
                .map(|piece| (sq, piece))
        })
    }

    /// Move the piece on `from` to the empty cell `to`, crowning a man that
    /// lands on its promotion row.
    ///
    /// Does nothing if `from` is empty; callers only pass moves produced by
    /// the move generator.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let Some(mut piece) = self.cells[from.index()].take() else {
            debug_assert!(false, "apply_move from empty cell {from}");
            return;
        };
        debug_assert!(self.cells[to.index()].is_none(), "apply_move onto occupied cell {to}");

        if to.row() == piece.color().promotion_row() && !piece.is_king() {
            piece.crown();
            self.kings[piece.color().index()] += 1;
        }
        self.cells[to.index()] = Some(piece);
    }

    /// Remove the piece on `captured`. If it was a king, the uncrowned piece
    /// on `promoter` is crowned in the same step.
    pub fn remove_piece(&mut self, captured: Square, promoter: Square) {
        let Some(victim) = self.cells[captured.index()].take() else {
            debug_assert!(false, "remove_piece on empty cell {captured}");
            return;
        };
        let victim_side = victim.color().index();
        self.counts[victim_side] -= 1;

        if victim.is_king() {
            self.kings[victim_side] -= 1;
            if let Some(capturer) = self.cells[promoter.index()].as_mut()
                && !capturer.is_king()
            {
                capturer.crown();
                self.kings[capturer.color().index()] += 1;
            }
        }
    }

    /// Play a move in place, removing its whole capture chain.
    ///
    /// Returns the number of pieces captured.
    pub fn play(&mut self, mv: &Move) -> usize {
        self.apply_move(mv.from(), mv.to());
        for &victim in mv.captures() {
            self.remove_piece(victim, mv.to());
        }
        debug!(
            from = %mv.from(),
            to = %mv.to(),
            captured = mv.captures().len(),
            "move played"
        );
        mv.captures().len()
    }

    /// Return a copy of the board with the move played (copy-make).
    pub fn make_move(&self, mv: &Move) -> Board {
        let mut child = *self;
        child.apply_move(mv.from(), mv.to());
        for &victim in mv.captures() {
            child.remove_piece(victim, mv.to());
        }
        child
    }

    /// Validate that the stored counts match the grid.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let mut found = 0u8;
            let mut found_kings = 0u8;
            for (_, piece) in self.pieces(color) {
                found += 1;
                if piece.is_king() {
                    found_kings += 1;
                }
            }

            if found > PIECES_PER_SIDE {
                return Err(BoardError::TooManyPieces { color, count: found });
            }
            if found != self.count(color) {
                return Err(BoardError::CountMismatch {
                    color,
                    stored: self.count(color),
                    found,
                });
            }
            if found_kings != self.king_count(color) {
                return Err(BoardError::KingCountMismatch {
                    color,
                    stored: self.king_count(color),
                    found: found_kings,
                });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            hints: &[],
        }
    }

    /// Return a pretty-printable wrapper that marks `hints` with `*`.
    pub fn pretty_with_hints<'a>(&'a self, hints: &'a [Square]) -> PrettyBoard<'a> {
        PrettyBoard { board: self, hints }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a labelled 8x8 grid.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    hints: &'a [Square],
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for row in 0u8..8 {
            write!(f, "{row}  ")?;
            for col in 0u8..8 {
                let sq = Square::from_coords_unchecked(row, col);
                let c = match self.board.piece_at(sq) {
                    Some(piece) => piece.to_char(),
                    None if self.hints.contains(&sq) => '*',
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
