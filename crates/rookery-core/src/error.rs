//! Error types for board construction and move application.

use crate::alliance::Alliance;
use crate::square::Square;

/// Errors from structural validation of a staged position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {alliance}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        alliance: Alliance,
        /// Number of kings staged for that side.
        count: usize,
    },
}

/// Errors from applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The null sentinel denotes "no move found" and cannot be applied.
    #[error("cannot execute the null move")]
    NullMove,
    /// The requested move is not in the current player's move set.
    #[error("no such move from {from} to {to} for {alliance}")]
    IllegalMove {
        /// Origin square of the request.
        from: Square,
        /// Destination square of the request.
        to: Square,
        /// The side that asked to move.
        alliance: Alliance,
    },
    /// Applying the move would leave the mover's own king attacked.
    #[error("move from {from} to {to} leaves the {alliance} king in check")]
    LeavesKingInCheck {
        /// Origin square of the rejected move.
        from: Square,
        /// Destination square of the rejected move.
        to: Square,
        /// The side whose king would be exposed.
        alliance: Alliance,
    },
    /// The resulting position failed structural validation.
    #[error(transparent)]
    Board(#[from] BoardError),
}
