//! Pawn move generation: the most irregular piece.
//!
//! Four candidate shapes per alliance direction: single push, double
//! push from the starting row, and two diagonal captures. En passant
//! and promotion flagging are not emitted here; see the crate's design
//! notes.

use crate::alliance::Alliance;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;
use crate::tile::Tile;

pub(super) fn generate(piece: Piece, tiles: &[Tile; 64], moves: &mut Vec<Move>) {
    let direction = piece.alliance().direction();
    let from = piece.square();

    // Single push onto an empty square.
    if let Some(ahead) = from.offset(8 * direction) {
        if !tiles[ahead.index()].is_occupied() {
            moves.push(Move::PawnPush { piece, to: ahead });

            // Double push: first move, starting row, and both the
            // intermediate square and the destination clear. The
            // intermediate square was just checked above.
            if piece.is_first_move() && piece.alliance().is_pawn_start(from) {
                if let Some(jump) = from.offset(16 * direction) {
                    if !tiles[jump.index()].is_occupied() {
                        moves.push(Move::PawnJump { piece, to: jump });
                    }
                }
            }
        }
    }

    // Diagonal captures, each gated against wrapping off its edge column.
    for raw_offset in [7i8, 9] {
        if wraps(from, raw_offset, piece.alliance()) {
            continue;
        }
        let Some(to) = from.offset(raw_offset * direction) else {
            continue;
        };
        if let Tile::Occupied(_, other) = tiles[to.index()] {
            if other.alliance() != piece.alliance() {
                moves.push(Move::PawnAttack {
                    piece,
                    to,
                    captured: other,
                });
            }
        }
    }
}

/// A capture offset wraps when the pawn stands on the edge column the
/// scaled offset would step across: offset 7 moves White east and Black
/// west, offset 9 the mirror.
const fn wraps(from: Square, raw_offset: i8, alliance: Alliance) -> bool {
    match raw_offset {
        7 => match alliance {
            Alliance::White => from.column() == 7,
            Alliance::Black => from.column() == 0,
        },
        9 => match alliance {
            Alliance::White => from.column() == 0,
            Alliance::Black => from.column() == 7,
        },
        _ => false,
    }
}
