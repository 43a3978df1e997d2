//! Core chess rules: immutable board snapshots, move generation, and
//! move application.
//!
//! The board is a flat array of 64 tiles built through a staging
//! [`Builder`]. Applying a [`Move`] never mutates a board; it produces a
//! fresh one with the side to move flipped. Legality is settled in two
//! stages: piece generators emit pseudo-legal moves, and
//! [`Board::legal_moves`] simulates each candidate to discard any that
//! expose the mover's own king.

mod alliance;
mod board;
mod chess_move;
mod error;
mod movegen;
mod piece;
mod player;
mod square;
mod tile;

pub use alliance::Alliance;
pub use board::{Board, Builder};
pub use chess_move::{Castle, Move};
pub use error::{BoardError, MoveError};
pub use piece::{Piece, PieceKind};
pub use player::Player;
pub use square::Square;
pub use tile::Tile;
