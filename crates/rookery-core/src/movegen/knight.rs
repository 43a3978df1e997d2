//! Knight move generation.

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;
use crate::tile::Tile;

const OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Jump piece: each offset yields at most one move, friendly squares
/// are simply skipped.
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

/// Exclusion masks for wrap-around false positives near the a/b and g/h
/// files: an offset that moves two columns west is invalid from columns
/// 0 and 1, and mirrored on the east side.
const fn wraps(from: Square, offset: i8) -> bool {
    match from.column() {
        0 => matches!(offset, -17 | -10 | 6 | 15),
        1 => matches!(offset, -10 | 6),
        6 => matches!(offset, -6 | 10),
        7 => matches!(offset, -15 | -6 | 10 | 17),
        _ => false,
    }
}
