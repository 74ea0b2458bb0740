//! Move representation and the per-piece move list.

use std::fmt;

use crate::square::Square;

/// One move of a single piece: a step, or a capture chain of one or more hops.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    /// Squares of the hopped opposing pieces, in hop order.
    captures: Vec<Square>,
}

impl Move {
    /// A non-capturing step.
    pub fn simple(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captures: Vec::new(),
        }
    }

    /// A capture ending on `to` after hopping every piece in `captures`.
    pub fn capture(from: Square, to: Square, captures: Vec<Square>) -> Move {
        debug_assert!(!captures.is_empty());
        Move { from, to, captures }
    }

    /// Origin square.
    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// The capture chain, empty for a simple move.
    #[inline]
    pub fn captures(&self) -> &[Square] {
        &self.captures
    }

    /// Return `true` if this move hops at least one piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if self.is_capture() {
            write!(f, " x{}", self.captures.len())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// Moves of one piece in discovery order.
///
/// Destinations may repeat when two capture branches end on the same
/// square; each entry keeps its own chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Legal destination squares, duplicates included.
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(Move::to)
    }

    /// `(destination, chain)` pairs for the capturing moves.
    pub fn capture_chains(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        self.moves
            .iter()
            .filter(|mv| mv.is_capture())
            .map(|mv| (mv.to(), mv.captures()))
    }

    /// Return `true` if any move captures.
    pub fn has_capture(&self) -> bool {
        self.moves.iter().any(Move::is_capture)
    }

    /// First move (in discovery order) that ends on `to`.
    pub fn find(&self, to: Square) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.to() == to)
    }

    /// Return `true` if some move ends on `to`.
    pub fn contains(&self, to: Square) -> bool {
        self.find(to).is_some()
    }
}

impl From<Vec<Move>> for MoveList {
    fn from(moves: Vec<Move>) -> Self {
        MoveList { moves }
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveList};
    use crate::square::Square;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn simple_move_has_no_chain() {
        let mv = Move::simple(sq(2, 1), sq(3, 2));
        assert!(!mv.is_capture());
        assert!(mv.captures().is_empty());
        assert_eq!(format!("{mv}"), "(2, 1) -> (3, 2)");
    }

    #[test]
    fn capture_display_counts_hops() {
        let mv = Move::capture(sq(5, 0), sq(1, 4), vec![sq(4, 1), sq(2, 3)]);
        assert!(mv.is_capture());
        assert_eq!(format!("{mv}"), "(5, 0) -> (1, 4) x2");
    }

    #[test]
    fn find_returns_first_of_duplicates() {
        let first = Move::capture(sq(0, 1), sq(4, 1), vec![sq(1, 2), sq(3, 2)]);
        let second = Move::capture(sq(0, 1), sq(4, 1), vec![sq(1, 0), sq(3, 0)]);
        let list = MoveList::from(vec![first.clone(), second]);
        assert_eq!(list.destinations().count(), 2);
        assert_eq!(list.find(sq(4, 1)), Some(&first));
        assert!(!list.contains(sq(2, 1)));
    }

    #[test]
    fn capture_chains_skip_simple_moves() {
        let list = MoveList::from(vec![
            Move::simple(sq(2, 1), sq(3, 0)),
            Move::capture(sq(2, 1), sq(4, 3), vec![sq(3, 2)]),
        ]);
        let chains: Vec<_> = list.capture_chains().collect();
        assert_eq!(chains, vec![(sq(4, 3), &[sq(3, 2)][..])]);
        assert!(list.has_capture());
    }
}
