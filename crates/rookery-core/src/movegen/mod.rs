//! Pseudo-legal move generation, dispatched by piece kind.
//!
//! Generators respect board geometry and occupancy only; they never ask
//! whether the mover's own king stays safe. That filter belongs to the
//! player level.

mod king;
mod knight;
mod pawn;
mod sliders;

use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};
use crate::tile::Tile;

/// Ray directions for the bishop.
const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];
/// Ray directions for the rook.
const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];
/// Ray directions for the queen: union of bishop and rook.
const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Enumerate the pseudo-legal moves of `piece` on the given tile array.
pub(crate) fn pseudo_legal_moves(piece: Piece, tiles: &[Tile; 64]) -> Vec<Move> {
    let mut moves = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => pawn::generate(piece, tiles, &mut moves),
        PieceKind::Knight => knight::generate(piece, tiles, &mut moves),
        PieceKind::Bishop => sliders::generate(piece, tiles, &BISHOP_OFFSETS, &mut moves),
        PieceKind::Rook => sliders::generate(piece, tiles, &ROOK_OFFSETS, &mut moves),
        PieceKind::Queen => sliders::generate(piece, tiles, &QUEEN_OFFSETS, &mut moves),
        PieceKind::King => king::generate(piece, tiles, &mut moves),
    }
    moves
}
