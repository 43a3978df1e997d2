//! King move generation (one step in every direction).
//!
//! Castling is not generated here; it is derived at the player level
//! because it depends on the opponent's move set.

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;
use crate::tile::Tile;

const OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub(super) fn generate(piece: Piece, tiles: &[Tile; 64], moves: &mut Vec<Move>) {
    for offset in OFFSETS {
        if wraps(piece.square(), offset) {
            continue;
        }
        let Some(to) = piece.square().offset(offset) else {
            continue;
        };
        match tiles[to.index()] {
            Tile::Empty(_) => moves.push(Move::Major { piece, to }),
            Tile::Occupied(_, other) => {
                if other.alliance() != piece.alliance() {
                    moves.push(Move::Attack {
                        piece,
                        to,
                        captured: other,
                    });
                }
            }
        }
    }
}

const fn wraps(from: Square, offset: i8) -> bool {
    match from.column() {
        0 => matches!(offset, -9 | -1 | 7),
        7 => matches!(offset, -7 | 1 | 9),
        _ => false,
    }
}
