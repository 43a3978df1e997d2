//! Move representation and move application.
//!
//! A move is a tagged variant describing a transition plus the algorithm
//! realizing it as a brand-new [`Board`]; the originating board is never
//! mutated.

use std::fmt;

use crate::board::{Board, Builder};
use crate::error::MoveError;
use crate::piece::Piece;
use crate::square::Square;

/// Rook transport payload shared by the two castling variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castle {
    /// The castling king.
    pub king: Piece,
    /// The king's destination square.
    pub to: Square,
    /// The castling rook.
    pub rook: Piece,
    /// The rook's home square.
    pub rook_from: Square,
    /// The rook's destination square.
    pub rook_to: Square,
}

/// A transition between two board positions.
///
/// Equality is full structural equality, kind included: a capture and a
/// quiet move to the same square never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// A non-pawn piece moves to an empty square.
    Major { piece: Piece, to: Square },
    /// A non-pawn piece captures an enemy piece.
    Attack {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// A pawn advances one square.
    PawnPush { piece: Piece, to: Square },
    /// A pawn double-steps from its starting row.
    PawnJump { piece: Piece, to: Square },
    /// A pawn captures diagonally.
    PawnAttack {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// A pawn captures en passant. The variant exists and applies
    /// correctly, but no generator currently emits it.
    PawnEnPassant {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// King-side castle with rook transport.
    KingSideCastle(Castle),
    /// Queen-side castle with rook transport.
    QueenSideCastle(Castle),
    /// Sentinel for "no move found". Cannot be applied.
    Null,
}

impl Move {
    /// Return the moving piece, or `None` for the null sentinel.
    pub const fn moved_piece(&self) -> Option<Piece> {
        match *self {
            Move::Major { piece, .. }
            | Move::Attack { piece, .. }
            | Move::PawnPush { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassant { piece, .. } => Some(piece),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle.king),
            Move::Null => None,
        }
    }

    /// Return the origin square, or `None` for the null sentinel.
    pub const fn from(&self) -> Option<Square> {
        match self.moved_piece() {
            Some(piece) => Some(piece.square()),
            None => None,
        }
    }

    /// Return the destination square, or `None` for the null sentinel.
    pub const fn to(&self) -> Option<Square> {
        match *self {
            Move::Major { to, .. }
            | Move::Attack { to, .. }
            | Move::PawnPush { to, .. }
            | Move::PawnJump { to, .. }
            | Move::PawnAttack { to, .. }
            | Move::PawnEnPassant { to, .. } => Some(to),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle.to),
            Move::Null => None,
        }
    }

    /// Return the captured piece for attack variants.
    pub const fn captured(&self) -> Option<Piece> {
        match *self {
            Move::Attack { captured, .. }
            | Move::PawnAttack { captured, .. }
            | Move::PawnEnPassant { captured, .. } => Some(captured),
            _ => None,
        }
    }

    /// Return `true` if this move captures a piece.
    pub const fn is_attack(&self) -> bool {
        self.captured().is_some()
    }

    /// Return `true` if this is one of the castling variants.
    pub const fn is_castle(&self) -> bool {
        matches!(self, Move::KingSideCastle(_) | Move::QueenSideCastle(_))
    }

    /// Return `true` if this is the null sentinel.
    pub const fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Realize this move as a new board.
    ///
    /// Copy-make: the mover's surviving pieces and every opponent piece
    /// are staged into a fresh [`Builder`], the moved piece's post-move
    /// image is staged last (displacing a captured piece at the
    /// destination), and the side to move flips.
    ///
    /// # Errors
    ///
    /// [`MoveError::NullMove`] for the sentinel; [`MoveError::Board`] if
    /// the staged position fails validation (impossible from a position
    /// that itself validated).
    pub fn execute(&self, board: &Board) -> Result<Board, MoveError> {
        match *self {
            Move::Null => Err(MoveError::NullMove),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => {
                execute_castle(board, castle)
            }
            Move::PawnEnPassant { piece, to, captured } => {
                execute_en_passant(board, piece, to, captured)
            }
            Move::PawnJump { piece, to } => execute_standard(board, piece, to, true),
            Move::Major { piece, to }
            | Move::Attack { piece, to, .. }
            | Move::PawnPush { piece, to }
            | Move::PawnAttack { piece, to, .. } => execute_standard(board, piece, to, false),
        }
    }
}

fn execute_standard(board: &Board, piece: Piece, to: Square, jump: bool) -> Result<Board, MoveError> {
    let mover = piece.alliance();
    let mut builder = Builder::new();
    for &survivor in board.active_pieces(mover) {
        if survivor != piece {
            builder.set_piece(survivor);
        }
    }
    for &opponent_piece in board.active_pieces(mover.opposite()) {
        builder.set_piece(opponent_piece);
    }
    let image = piece.moved_to(to);
    builder.set_piece(image);
    if jump {
        builder.set_en_passant_pawn(image);
    }
    builder.set_move_maker(mover.opposite());
    Ok(builder.build()?)
}

fn execute_castle(board: &Board, castle: Castle) -> Result<Board, MoveError> {
    let mover = castle.king.alliance();
    let mut builder = Builder::new();
    for &survivor in board.active_pieces(mover) {
        if survivor != castle.king && survivor != castle.rook {
            builder.set_piece(survivor);
        }
    }
    for &opponent_piece in board.active_pieces(mover.opposite()) {
        builder.set_piece(opponent_piece);
    }
    builder.set_piece(castle.king.moved_to(castle.to));
    builder.set_piece(castle.rook.moved_to(castle.rook_to));
    builder.set_move_maker(mover.opposite());
    Ok(builder.build()?)
}

fn execute_en_passant(
    board: &Board,
    piece: Piece,
    to: Square,
    captured: Piece,
) -> Result<Board, MoveError> {
    let mover = piece.alliance();
    let mut builder = Builder::new();
    for &survivor in board.active_pieces(mover) {
        if survivor != piece {
            builder.set_piece(survivor);
        }
    }
    // The captured pawn does not stand on the destination square, so it
    // must be skipped explicitly rather than displaced by overwrite.
    for &opponent_piece in board.active_pieces(mover.opposite()) {
        if opponent_piece != captured {
            builder.set_piece(opponent_piece);
        }
    }
    builder.set_piece(piece.moved_to(to));
    builder.set_move_maker(mover.opposite());
    Ok(builder.build()?)
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Major { piece, to } => {
                write!(f, "{}{}-{}", piece.kind().letter(), piece.square(), to)
            }
            Move::Attack { piece, to, .. } => {
                write!(f, "{}{}x{}", piece.kind().letter(), piece.square(), to)
            }
            Move::PawnPush { piece, to } | Move::PawnJump { piece, to } => {
                write!(f, "{}-{}", piece.square(), to)
            }
            Move::PawnAttack { piece, to, .. } | Move::PawnEnPassant { piece, to, .. } => {
                write!(f, "{}x{}", piece.square(), to)
            }
            Move::KingSideCastle(_) => write!(f, "0-0"),
            Move::QueenSideCastle(_) => write!(f, "0-0-0"),
            Move::Null => write!(f, "--"),
        }
    }
}
