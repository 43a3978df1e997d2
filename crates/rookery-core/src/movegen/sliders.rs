//! Sliding piece (bishop, rook, queen) move generation.

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;
use crate::tile::Tile;

/// Walk each ray until it is blocked or leaves the board.
///
/// An empty square emits a quiet move and the ray continues; an enemy
/// piece emits one capture and ends the ray; a friendly piece ends the
/// ray silently.
pub(super) fn generate(piece: Piece, tiles: &[Tile; 64], offsets: &[i8], moves: &mut Vec<Move>) {
    for &offset in offsets {
        let mut current = piece.square();
        loop {
            if wraps(current, offset) {
                break;
            }
            let Some(next) = current.offset(offset) else {
                break;
            };
            match tiles[next.index()] {
                Tile::Empty(_) => {
                    moves.push(Move::Major { piece, to: next });
                    current = next;
                }
                Tile::Occupied(_, other) => {
                    if other.alliance() != piece.alliance() {
                        moves.push(Move::Attack {
                            piece,
                            to: next,
                            captured: other,
                        });
                    }
                    break;
                }
            }
        }
    }
}

/// Would stepping `offset` from `from` wrap around a board edge?
///
/// Each west-pointing offset is disallowed from column 0 and each
/// east-pointing one from column 7; pure vertical steps never wrap.
const fn wraps(from: Square, offset: i8) -> bool {
    match offset {
        -9 | -1 | 7 => from.column() == 0,
        -7 | 1 | 9 => from.column() == 7,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::super::pseudo_legal_moves;
    use super::super::testutil::{destinations, tiles_with};
    use crate::alliance::Alliance;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    #[test]
    fn rook_on_open_board_has_14_moves() {
        let rook = Piece::new(PieceKind::Rook, Square::D4, Alliance::White);
        let moves = pseudo_legal_moves(rook, &tiles_with(&[rook]));
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn bishop_in_corner_has_7_moves() {
        let bishop = Piece::new(PieceKind::Bishop, Square::A8, Alliance::Black);
        let moves = pseudo_legal_moves(bishop, &tiles_with(&[bishop]));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn rook_on_h_file_never_wraps() {
        // H8 is index 7; a naive +1 step would land on A7 (index 8).
        let rook = Piece::new(PieceKind::Rook, Square::H8, Alliance::White);
        let moves = pseudo_legal_moves(rook, &tiles_with(&[rook]));
        let dests = destinations(&moves);
        assert!(!dests.contains(&Square::A7), "rook ray wrapped off the h-file");
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn bishop_ray_stops_at_edge_not_past_it() {
        let bishop = Piece::new(PieceKind::Bishop, Square::B2, Alliance::White);
        let moves = pseudo_legal_moves(bishop, &tiles_with(&[bishop]));
        let dests = destinations(&moves);
        // The up-left ray is a3..a3 only; nothing wraps onto the h-file.
        assert!(dests.contains(&Square::A3));
        assert!(!dests.iter().any(|sq| sq.column() == 7 && *sq != Square::H8));
        assert!(dests.contains(&Square::H8));
    }

    #[test]
    fn friendly_piece_blocks_ray_before_the_square() {
        let rook = Piece::new(PieceKind::Rook, Square::D4, Alliance::White);
        let pawn = Piece::new(PieceKind::Pawn, Square::D6, Alliance::White);
        let moves = pseudo_legal_moves(rook, &tiles_with(&[rook, pawn]));
        let dests = destinations(&moves);
        assert!(dests.contains(&Square::D5));
        assert!(!dests.contains(&Square::D6), "ray entered a friendly square");
        assert!(!dests.contains(&Square::D7), "ray passed through a blocker");
    }

    #[test]
    fn enemy_piece_is_captured_and_blocks_further_travel() {
        let rook = Piece::new(PieceKind::Rook, Square::D4, Alliance::White);
        let target = Piece::new(PieceKind::Knight, Square::D6, Alliance::Black);
        let moves = pseudo_legal_moves(rook, &tiles_with(&[rook, target]));

        let capture = moves
            .iter()
            .find(|m| m.to() == Some(Square::D6))
            .expect("capture on d6 missing");
        assert!(capture.is_attack());
        assert_eq!(capture.captured(), Some(target));
        assert!(
            !destinations(&moves).contains(&Square::D7),
            "ray continued past a capture"
        );
    }

    #[test]
    fn queen_combines_both_ray_sets() {
        let queen = Piece::new(PieceKind::Queen, Square::A1, Alliance::White);
        let moves = pseudo_legal_moves(queen, &tiles_with(&[queen]));
        assert_eq!(moves.len(), 21);
    }
}
