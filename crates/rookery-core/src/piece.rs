//! Piece kinds and the piece value object.

use std::fmt;

use crate::alliance::Alliance;
use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen;
use crate::square::Square;

/// The kind of a chess piece, without alliance information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the uppercase letter code for this kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A piece standing on a square.
///
/// Identity is structural: two pieces with equal kind, alliance, square,
/// and first-move flag are interchangeable. `is_first_move` starts true
/// for pieces placed by a setup and is cleared on every piece produced
/// by [`Piece::moved_to`], which is what gates one-move-only rules
/// (pawn double-step, castling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    square: Square,
    alliance: Alliance,
    is_first_move: bool,
}

impl Piece {
    /// Create a piece that has not yet moved.
    #[inline]
    pub const fn new(kind: PieceKind, square: Square, alliance: Alliance) -> Piece {
        Piece {
            kind,
            square,
            alliance,
            is_first_move: true,
        }
    }

    /// Create a piece that has already moved at least once.
    #[inline]
    pub const fn moved(kind: PieceKind, square: Square, alliance: Alliance) -> Piece {
        Piece {
            kind,
            square,
            alliance,
            is_first_move: false,
        }
    }

    /// Return the kind of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the square this piece stands on.
    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    /// Return the alliance this piece belongs to.
    #[inline]
    pub const fn alliance(self) -> Alliance {
        self.alliance
    }

    /// Return `true` if this piece has never moved.
    #[inline]
    pub const fn is_first_move(self) -> bool {
        self.is_first_move
    }

    /// Return the post-move image of this piece: same kind and alliance,
    /// standing on `destination`, first-move flag cleared.
    ///
    /// This is the only way a piece changes state; the original is
    /// untouched.
    #[inline]
    pub const fn moved_to(self, destination: Square) -> Piece {
        Piece {
            kind: self.kind,
            square: destination,
            alliance: self.alliance,
            is_first_move: false,
        }
    }

    /// Enumerate this piece's pseudo-legal moves on `board`.
    ///
    /// Pseudo-legal moves respect geometry and occupancy but may leave
    /// the mover's own king in check; that filter lives at the player
    /// level.
    pub fn pseudo_legal_moves(self, board: &Board) -> Vec<Move> {
        movegen::pseudo_legal_moves(self, board.tiles())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.alliance {
            Alliance::White => self.kind.letter(),
            Alliance::Black => self.kind.letter().to_ascii_lowercase(),
        };
        write!(f, "{letter}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, PieceKind};
    use crate::alliance::Alliance;
    use crate::board::Board;
    use crate::square::Square;

    #[test]
    fn new_piece_has_first_move() {
        let knight = Piece::new(PieceKind::Knight, Square::B1, Alliance::White);
        assert!(knight.is_first_move());
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.square(), Square::B1);
        assert_eq!(knight.alliance(), Alliance::White);
    }

    #[test]
    fn moved_to_clears_first_move() {
        let pawn = Piece::new(PieceKind::Pawn, Square::E2, Alliance::White);
        let after = pawn.moved_to(Square::E4);
        assert_eq!(after.square(), Square::E4);
        assert!(!after.is_first_move());
        // The original is a value and remains untouched.
        assert!(pawn.is_first_move());
        assert_eq!(pawn.square(), Square::E2);
    }

    #[test]
    fn structural_equality() {
        let a = Piece::new(PieceKind::Rook, Square::A1, Alliance::White);
        let b = Piece::new(PieceKind::Rook, Square::A1, Alliance::White);
        assert_eq!(a, b);

        // Any differing field breaks equality.
        assert_ne!(a, Piece::moved(PieceKind::Rook, Square::A1, Alliance::White));
        assert_ne!(a, Piece::new(PieceKind::Rook, Square::H1, Alliance::White));
        assert_ne!(a, Piece::new(PieceKind::Rook, Square::A1, Alliance::Black));
        assert_ne!(a, Piece::new(PieceKind::Queen, Square::A1, Alliance::White));
    }

    #[test]
    fn letters() {
        assert_eq!(PieceKind::Knight.letter(), 'N');
        assert_eq!(PieceKind::King.letter(), 'K');
        let white = Piece::new(PieceKind::Queen, Square::D1, Alliance::White);
        let black = Piece::new(PieceKind::Queen, Square::D8, Alliance::Black);
        assert_eq!(format!("{white}"), "Q");
        assert_eq!(format!("{black}"), "q");
    }

    #[test]
    fn all_and_count() {
        assert_eq!(PieceKind::COUNT, 6);
        assert_eq!(PieceKind::ALL.len(), PieceKind::COUNT);
    }

    #[test]
    fn pseudo_legal_moves_from_a_board_piece() {
        let board = Board::standard();
        let knight = board.tile(Square::G1).piece().expect("knight on g1");
        assert_eq!(knight.kind(), PieceKind::Knight);

        let mut dests: Vec<Square> = knight
            .pseudo_legal_moves(&board)
            .iter()
            .filter_map(|m| m.to())
            .collect();
        dests.sort();
        assert_eq!(dests, vec![Square::F3, Square::H3]);
    }
}
