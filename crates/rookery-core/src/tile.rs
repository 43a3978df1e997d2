//! A single board cell: empty, or occupied by a piece.

use std::fmt;

use crate::piece::Piece;
use crate::square::Square;

/// One of the 64 cells of a board.
///
/// Tiles are immutable values keyed by square; a [`Board`](crate::Board)
/// owns exactly one per square, in index order. An occupied tile's piece
/// always reports the tile's own square as its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty(Square),
    Occupied(Square, Piece),
}

impl Tile {
    /// Return the square this tile sits on.
    #[inline]
    pub const fn square(self) -> Square {
        match self {
            Tile::Empty(square) | Tile::Occupied(square, _) => square,
        }
    }

    /// Return `true` if a piece stands on this tile.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Tile::Occupied(..))
    }

    /// Return the occupying piece, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "-"),
            Tile::Occupied(_, piece) => write!(f, "{piece}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;
    use crate::alliance::Alliance;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    #[test]
    fn empty_tile() {
        let tile = Tile::Empty(Square::E4);
        assert_eq!(tile.square(), Square::E4);
        assert!(!tile.is_occupied());
        assert_eq!(tile.piece(), None);
        assert_eq!(format!("{tile}"), "-");
    }

    #[test]
    fn occupied_tile() {
        let rook = Piece::new(PieceKind::Rook, Square::A1, Alliance::White);
        let tile = Tile::Occupied(Square::A1, rook);
        assert_eq!(tile.square(), Square::A1);
        assert!(tile.is_occupied());
        assert_eq!(tile.piece(), Some(rook));
        assert_eq!(format!("{tile}"), "R");
    }

    #[test]
    fn black_piece_renders_lowercase() {
        let pawn = Piece::new(PieceKind::Pawn, Square::E7, Alliance::Black);
        let tile = Tile::Occupied(Square::E7, pawn);
        assert_eq!(format!("{tile}"), "p");
    }
}
