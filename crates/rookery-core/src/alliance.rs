//! Side identity: White or Black, with direction-of-advance semantics.

use std::fmt;
use std::ops::Not;

use crate::square::Square;

/// The side a piece belongs to.
///
/// White advances toward index 0 (direction −1 in row steps), Black
/// toward index 63 (direction +1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Alliance {
    White = 0,
    Black = 1,
}

impl Alliance {
    /// Total number of alliances.
    pub const COUNT: usize = 2;

    /// Both alliances in index order.
    pub const ALL: [Alliance; 2] = [Alliance::White, Alliance::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row-step multiplier for pawn advancement.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    /// Return the opposing alliance.
    #[inline]
    pub const fn opposite(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Return `true` if `square` lies on this alliance's pawn starting row,
    /// the only row a double-step may begin from.
    #[inline]
    pub const fn is_pawn_start(self, square: Square) -> bool {
        match self {
            Alliance::White => square.row() == 6,
            Alliance::Black => square.row() == 1,
        }
    }
}

impl Not for Alliance {
    type Output = Alliance;

    #[inline]
    fn not(self) -> Alliance {
        self.opposite()
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "white"),
            Alliance::Black => write!(f, "black"),
        }
    }
}
