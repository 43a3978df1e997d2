//! Per-side player views: check status, castling, and full legality.

use tracing::debug;

use crate::alliance::Alliance;
use crate::board::Board;
use crate::chess_move::{Castle, Move};
use crate::error::MoveError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::tile::Tile;

/// One side's view of a position.
///
/// Derived at board construction and immutable thereafter: the side's
/// king, its pseudo-legal move set (castles included), and whether the
/// king is currently attacked. The *fully* legal move set is computed on
/// demand through [`Board::legal_moves`], which simulates each candidate.
#[derive(Debug, Clone)]
pub struct Player {
    alliance: Alliance,
    king: Piece,
    moves: Vec<Move>,
    in_check: bool,
}

impl Player {
    pub(crate) fn new(alliance: Alliance, king: Piece, moves: Vec<Move>, in_check: bool) -> Player {
        Player {
            alliance,
            king,
            moves,
            in_check,
        }
    }

    /// Return this player's alliance.
    #[inline]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// Return this player's king.
    #[inline]
    pub fn king(&self) -> Piece {
        self.king
    }

    /// Return the pseudo-legal move set, castling moves included.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Return `true` if this player's king is attacked by an opponent
    /// pseudo-legal move.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }
}

/// Attack-on-tile query: does any move in `moves` land on `square`?
pub(crate) fn is_attacked(moves: &[Move], square: Square) -> bool {
    moves.iter().any(|m| m.to() == Some(square))
}

/// Fixed home-square layout for one alliance's castling rules.
struct CastleLayout {
    kingside_transit: [Square; 2],
    kingside_rook_from: Square,
    kingside_king_to: Square,
    kingside_rook_to: Square,
    queenside_clear: [Square; 3],
    queenside_transit: [Square; 2],
    queenside_rook_from: Square,
    queenside_king_to: Square,
    queenside_rook_to: Square,
}

const WHITE_CASTLES: CastleLayout = CastleLayout {
    kingside_transit: [Square::F1, Square::G1],
    kingside_rook_from: Square::H1,
    kingside_king_to: Square::G1,
    kingside_rook_to: Square::F1,
    queenside_clear: [Square::B1, Square::C1, Square::D1],
    queenside_transit: [Square::C1, Square::D1],
    queenside_rook_from: Square::A1,
    queenside_king_to: Square::C1,
    queenside_rook_to: Square::D1,
};

const BLACK_CASTLES: CastleLayout = CastleLayout {
    kingside_transit: [Square::F8, Square::G8],
    kingside_rook_from: Square::H8,
    kingside_king_to: Square::G8,
    kingside_rook_to: Square::F8,
    queenside_clear: [Square::B8, Square::C8, Square::D8],
    queenside_transit: [Square::C8, Square::D8],
    queenside_rook_from: Square::A8,
    queenside_king_to: Square::C8,
    queenside_rook_to: Square::D8,
};

/// Derive the castling moves available to `alliance`.
///
/// King-side: king unmoved and not in check, both squares between king
/// and rook empty and unattacked, unmoved rook at home. Queen-side:
/// symmetric with three intervening empty squares; safety is checked on
/// the two squares the king actually crosses.
pub(crate) fn calculate_king_castles(
    alliance: Alliance,
    king: Piece,
    tiles: &[Tile; 64],
    in_check: bool,
    opponent_moves: &[Move],
) -> Vec<Move> {
    let mut castles = Vec::new();
    if !king.is_first_move() || in_check {
        return castles;
    }
    let layout = match alliance {
        Alliance::White => &WHITE_CASTLES,
        Alliance::Black => &BLACK_CASTLES,
    };

    if let Some(rook) = castle_rook(tiles, layout.kingside_rook_from, alliance) {
        let clear = layout
            .kingside_transit
            .iter()
            .all(|sq| !tiles[sq.index()].is_occupied());
        let safe = layout
            .kingside_transit
            .iter()
            .all(|&sq| !is_attacked(opponent_moves, sq));
        if clear && safe {
            castles.push(Move::KingSideCastle(Castle {
                king,
                to: layout.kingside_king_to,
                rook,
                rook_from: layout.kingside_rook_from,
                rook_to: layout.kingside_rook_to,
            }));
        }
    }

    if let Some(rook) = castle_rook(tiles, layout.queenside_rook_from, alliance) {
        let clear = layout
            .queenside_clear
            .iter()
            .all(|sq| !tiles[sq.index()].is_occupied());
        let safe = layout
            .queenside_transit
            .iter()
            .all(|&sq| !is_attacked(opponent_moves, sq));
        if clear && safe {
            castles.push(Move::QueenSideCastle(Castle {
                king,
                to: layout.queenside_king_to,
                rook,
                rook_from: layout.queenside_rook_from,
                rook_to: layout.queenside_rook_to,
            }));
        }
    }

    castles
}

/// Return the castle-eligible rook on `home`: an unmoved rook of `alliance`.
fn castle_rook(tiles: &[Tile; 64], home: Square, alliance: Alliance) -> Option<Piece> {
    let piece = tiles[home.index()].piece()?;
    if piece.kind() == PieceKind::Rook && piece.alliance() == alliance && piece.is_first_move() {
        Some(piece)
    } else {
        None
    }
}

impl Board {
    /// Fully legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.side_to_move())
    }

    /// Fully legal moves for `alliance`: each pseudo-legal candidate is
    /// simulated, and any move whose resulting position leaves the
    /// mover's own king attacked is discarded.
    pub fn legal_moves_for(&self, alliance: Alliance) -> Vec<Move> {
        self.player(alliance)
            .moves()
            .iter()
            .filter(|mv| self.keeps_king_safe(alliance, mv))
            .copied()
            .collect()
    }

    fn keeps_king_safe(&self, alliance: Alliance, mv: &Move) -> bool {
        match mv.execute(self) {
            Ok(child) => !child.player(alliance).is_in_check(),
            Err(_) => false,
        }
    }

    /// Validate and apply a move for the side to move, producing the
    /// next position.
    ///
    /// # Errors
    ///
    /// [`MoveError::NullMove`] for the sentinel, [`MoveError::IllegalMove`]
    /// when the move is not in the current player's move set, and
    /// [`MoveError::LeavesKingInCheck`] when the simulated result exposes
    /// the mover's own king. The board itself is untouched on failure;
    /// callers re-query legal moves and pick again.
    pub fn make_move(&self, mv: &Move) -> Result<Board, MoveError> {
        let (Some(piece), Some(from), Some(to)) = (mv.moved_piece(), mv.from(), mv.to()) else {
            return Err(MoveError::NullMove);
        };
        let alliance = self.side_to_move();
        if piece.alliance() != alliance || !self.current_player().moves().contains(mv) {
            debug!(%from, %to, %alliance, "rejected move outside the current move set");
            return Err(MoveError::IllegalMove { from, to, alliance });
        }
        let child = mv.execute(self)?;
        if child.player(alliance).is_in_check() {
            debug!(%from, %to, %alliance, "rejected self-check move");
            return Err(MoveError::LeavesKingInCheck { from, to, alliance });
        }
        Ok(child)
    }

    /// Checkmate: in check with no legal response.
    pub fn is_checkmate(&self, alliance: Alliance) -> bool {
        self.player(alliance).is_in_check() && self.legal_moves_for(alliance).is_empty()
    }

    /// Stalemate: not in check, yet no legal move exists.
    pub fn is_stalemate(&self, alliance: Alliance) -> bool {
        !self.player(alliance).is_in_check() && self.legal_moves_for(alliance).is_empty()
    }
}
