//! The immutable board: tiles, active pieces, player views, side to move.

use std::fmt;

use crate::alliance::Alliance;
use crate::chess_move::Move;
use crate::error::BoardError;
use crate::movegen;
use crate::piece::{Piece, PieceKind};
use crate::player::{self, Player};
use crate::square::Square;
use crate::tile::Tile;

/// A complete position snapshot.
///
/// A board is fully immutable once constructed: tiles, active-piece
/// lists, and both [`Player`] views are computed eagerly at build time
/// and never change. Applying a move produces a brand-new board through
/// a [`Builder`]; the original is untouched, so a board may be shared
/// freely across threads for read-only queries.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Tile; 64],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_player: Player,
    black_player: Player,
    side_to_move: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Board {
    /// Return the standard 32-piece starting position, White to move.
    ///
    /// # Panics
    ///
    /// Never in practice: the standard setup always validates.
    pub fn standard() -> Board {
        let mut builder = Builder::new();
        // Black layout, back rank outward.
        builder.set_piece(Piece::new(PieceKind::Rook, Square::A8, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::Knight, Square::B8, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::Bishop, Square::C8, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::Queen, Square::D8, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::King, Square::E8, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::Bishop, Square::F8, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::Knight, Square::G8, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::Rook, Square::H8, Alliance::Black));
        for column in 0u8..8 {
            let square = Square::from_index(8 + column).expect("row 1 square");
            builder.set_piece(Piece::new(PieceKind::Pawn, square, Alliance::Black));
        }
        // White layout.
        for column in 0u8..8 {
            let square = Square::from_index(48 + column).expect("row 6 square");
            builder.set_piece(Piece::new(PieceKind::Pawn, square, Alliance::White));
        }
        builder.set_piece(Piece::new(PieceKind::Rook, Square::A1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::Knight, Square::B1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::Bishop, Square::C1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::Queen, Square::D1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::King, Square::E1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::Bishop, Square::F1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::Knight, Square::G1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::Rook, Square::H1, Alliance::White));
        builder.set_move_maker(Alliance::White);
        builder.build().expect("standard setup is structurally valid")
    }

    /// Return the tile at `square`.
    #[inline]
    pub fn tile(&self, square: Square) -> Tile {
        self.tiles[square.index()]
    }

    /// Return the full tile array in index order.
    #[inline]
    pub(crate) fn tiles(&self) -> &[Tile; 64] {
        &self.tiles
    }

    /// Return the active pieces of `alliance`, in square order.
    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    /// Return the player view for `alliance`.
    pub fn player(&self, alliance: Alliance) -> &Player {
        match alliance {
            Alliance::White => &self.white_player,
            Alliance::Black => &self.black_player,
        }
    }

    /// Return the view of the side to move.
    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Alliance {
        self.side_to_move
    }

    /// Return the pawn that double-stepped on the previous move, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Concatenate both sides' move sets, White first.
    pub fn all_moves(&self) -> impl Iterator<Item = &Move> {
        self.white_player
            .moves()
            .iter()
            .chain(self.black_player.moves().iter())
    }

    /// Look up a move by origin and destination in the full move list.
    ///
    /// Returns [`Move::Null`] when no such move exists; this is the seam
    /// a UI or engine uses to turn coordinates into a concrete move.
    pub fn find_move(&self, from: Square, to: Square) -> Move {
        self.all_moves()
            .find(|m| m.from() == Some(from) && m.to() == Some(to))
            .copied()
            .unwrap_or(Move::Null)
    }
}

impl fmt::Display for Board {
    /// Render an 8×8 grid of 3-character cells, row-major from Black's
    /// back rank, one row per line. Debug display only, not a protocol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            write!(f, "{:>3}", tile.to_string())?;
            if (i + 1) % 8 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Transient staging object for building a [`Board`].
///
/// Sparse piece placement keyed by square, plus the alliance to move
/// next and an optional en-passant pawn marker; consumed exactly once.
pub struct Builder {
    config: [Option<Piece>; 64],
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Builder {
    /// Create an empty builder with White to move.
    pub fn new() -> Builder {
        Builder {
            config: [None; 64],
            next_move_maker: Alliance::White,
            en_passant_pawn: None,
        }
    }

    /// Stage `piece` at its own square, displacing any previous occupant.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Builder {
        self.config[piece.square().index()] = Some(piece);
        self
    }

    /// Set the alliance to move next.
    pub fn set_move_maker(&mut self, alliance: Alliance) -> &mut Builder {
        self.next_move_maker = alliance;
        self
    }

    /// Mark `pawn` as en-passant-eligible for the position under construction.
    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Builder {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Finalize into an immutable [`Board`].
    ///
    /// Computes tiles, active-piece lists, both sides' pseudo-legal move
    /// sets (castles included), and check status — eagerly, exactly once.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidKingCount`] if either side does not have
    /// exactly one king.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut tiles = [Tile::Empty(Square::A8); 64];
        for square in Square::all() {
            tiles[square.index()] = match self.config[square.index()] {
                Some(piece) => Tile::Occupied(square, piece),
                None => Tile::Empty(square),
            };
        }

        let white_pieces = active_pieces(&tiles, Alliance::White);
        let black_pieces = active_pieces(&tiles, Alliance::Black);
        let white_king = find_king(&white_pieces, Alliance::White)?;
        let black_king = find_king(&black_pieces, Alliance::Black)?;

        let white_moves = standard_moves(&white_pieces, &tiles);
        let black_moves = standard_moves(&black_pieces, &tiles);

        let white_in_check = player::is_attacked(&black_moves, white_king.square());
        let black_in_check = player::is_attacked(&white_moves, black_king.square());

        let white_castles = player::calculate_king_castles(
            Alliance::White,
            white_king,
            &tiles,
            white_in_check,
            &black_moves,
        );
        let black_castles = player::calculate_king_castles(
            Alliance::Black,
            black_king,
            &tiles,
            black_in_check,
            &white_moves,
        );

        let white_player = Player::new(
            Alliance::White,
            white_king,
            concat_moves(white_moves, white_castles),
            white_in_check,
        );
        let black_player = Player::new(
            Alliance::Black,
            black_king,
            concat_moves(black_moves, black_castles),
            black_in_check,
        );

        Ok(Board {
            tiles,
            white_pieces,
            black_pieces,
            white_player,
            black_player,
            side_to_move: self.next_move_maker,
            en_passant_pawn: self.en_passant_pawn,
        })
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}

/// Collect the pieces of `alliance` from a tile array, in square order.
fn active_pieces(tiles: &[Tile; 64], alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(|tile| tile.piece())
        .filter(|piece| piece.alliance() == alliance)
        .collect()
}

/// Find the single king of `alliance`, rejecting malformed setups.
fn find_king(pieces: &[Piece], alliance: Alliance) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|p| p.kind() == PieceKind::King);
    let (first, second) = (kings.next(), kings.next());
    match (first, second) {
        (Some(&king), None) => Ok(king),
        _ => Err(BoardError::InvalidKingCount {
            alliance,
            count: pieces.iter().filter(|p| p.kind() == PieceKind::King).count(),
        }),
    }
}

/// Concatenate the pseudo-legal moves of every piece in `pieces`.
fn standard_moves(pieces: &[Piece], tiles: &[Tile; 64]) -> Vec<Move> {
    pieces
        .iter()
        .flat_map(|&piece| movegen::pseudo_legal_moves(piece, tiles))
        .collect()
}

fn concat_moves(mut standard: Vec<Move>, castles: Vec<Move>) -> Vec<Move> {
    standard.extend(castles);
    standard
}

#[cfg(test)]
mod tests {
    use super::{Board, Builder};
    use crate::alliance::Alliance;
    use crate::chess_move::Move;
    use crate::error::BoardError;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    #[test]
    fn standard_setup_tile_by_tile() {
        let board = Board::standard();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for square in Square::all() {
            let tile = board.tile(square);
            match square.row() {
                0 => {
                    let piece = tile.piece().expect("black back rank");
                    assert_eq!(piece.alliance(), Alliance::Black);
                    assert_eq!(piece.kind(), back_rank[square.column() as usize]);
                }
                1 => {
                    let piece = tile.piece().expect("black pawn row");
                    assert_eq!(piece.alliance(), Alliance::Black);
                    assert_eq!(piece.kind(), PieceKind::Pawn);
                }
                6 => {
                    let piece = tile.piece().expect("white pawn row");
                    assert_eq!(piece.alliance(), Alliance::White);
                    assert_eq!(piece.kind(), PieceKind::Pawn);
                }
                7 => {
                    let piece = tile.piece().expect("white back rank");
                    assert_eq!(piece.alliance(), Alliance::White);
                    assert_eq!(piece.kind(), back_rank[square.column() as usize]);
                }
                _ => assert!(!tile.is_occupied(), "unexpected piece on {square}"),
            }
            // Every occupied tile's piece reports the tile's square.
            if let Some(piece) = tile.piece() {
                assert_eq!(piece.square(), square);
            }
        }
        assert_eq!(board.active_pieces(Alliance::White).len(), 16);
        assert_eq!(board.active_pieces(Alliance::Black).len(), 16);
        assert_eq!(board.side_to_move(), Alliance::White);
        assert_eq!(board.en_passant_pawn(), None);
    }

    #[test]
    fn builder_rejects_missing_king() {
        let mut builder = Builder::new();
        builder.set_piece(Piece::new(PieceKind::King, Square::E1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::Rook, Square::A8, Alliance::Black));
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidKingCount {
                alliance: Alliance::Black,
                count: 0
            }
        );
    }

    #[test]
    fn builder_rejects_two_kings_for_one_side() {
        let mut builder = Builder::new();
        builder.set_piece(Piece::new(PieceKind::King, Square::E1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::King, Square::A1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::King, Square::E8, Alliance::Black));
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidKingCount {
                alliance: Alliance::White,
                count: 2
            }
        );
    }

    #[test]
    fn standard_position_has_20_moves_per_side() {
        let board = Board::standard();
        assert_eq!(board.player(Alliance::White).moves().len(), 20);
        assert_eq!(board.player(Alliance::Black).moves().len(), 20);
        assert_eq!(board.all_moves().count(), 40);
    }

    #[test]
    fn knight_from_b8_reaches_a6_and_c6_only() {
        let board = Board::standard();
        let knight_moves: Vec<&Move> = board
            .player(Alliance::Black)
            .moves()
            .iter()
            .filter(|m| m.from() == Some(Square::B8))
            .collect();
        let mut dests: Vec<Square> = knight_moves.iter().filter_map(|m| m.to()).collect();
        dests.sort();
        assert_eq!(dests, vec![Square::A6, Square::C6]);
    }

    #[test]
    fn find_move_hit_and_miss() {
        let board = Board::standard();
        let hit = board.find_move(Square::E2, Square::E4);
        assert_eq!(hit.from(), Some(Square::E2));
        assert_eq!(hit.to(), Some(Square::E4));

        let miss = board.find_move(Square::E2, Square::E5);
        assert!(miss.is_null());
    }

    #[test]
    fn display_renders_8_rows_of_3_char_cells() {
        let board = Board::standard();
        let rendered = format!("{board}");
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 8);
        for row in &rows {
            assert_eq!(row.len(), 24, "row not 8 cells of width 3: {row:?}");
        }
        assert!(rows[0].contains('r'), "black pieces lowercase on top row");
        assert!(rows[7].contains('R'), "white pieces uppercase on bottom row");
        assert!(rows[4].contains('-'), "empty squares rendered as placeholder");
    }

    #[test]
    fn builder_overwrite_keeps_last_piece() {
        let mut builder = Builder::new();
        builder.set_piece(Piece::new(PieceKind::King, Square::E1, Alliance::White));
        builder.set_piece(Piece::new(PieceKind::King, Square::E8, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::Pawn, Square::D4, Alliance::Black));
        builder.set_piece(Piece::new(PieceKind::Queen, Square::D4, Alliance::White));
        let board = builder.build().unwrap();
        let piece = board.tile(Square::D4).piece().expect("queen on d4");
        assert_eq!(piece.kind(), PieceKind::Queen);
        assert_eq!(piece.alliance(), Alliance::White);
        assert_eq!(board.active_pieces(Alliance::Black).len(), 1);
    }
}
