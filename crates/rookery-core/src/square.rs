//! Board squares, indexed row-major from Black's back rank.

use std::fmt;

/// A square on the board, encoded as a `u8` in [0,64).
///
/// Index = row * 8 + column, where row 0 is Black's back rank (a8..h8)
/// and row 7 is White's (a1..h1). So A8 = 0, B8 = 1, ..., H1 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0 = Black's back rank, 7 = White's).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column (0 = the a-file, 7 = the h-file).
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// Apply a raw index offset, returning `None` if the result leaves
    /// the board.
    ///
    /// Only bounds are checked here; edge-wrap exclusion is the move
    /// generators' responsibility.
    #[inline]
    pub fn offset(self, delta: i8) -> Option<Square> {
        let candidate = i16::from(self.0) + i16::from(delta);
        if (0..64).contains(&candidate) {
            Some(Square(candidate as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named square constants, in index order.
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A7: Square = Square(8);
    pub const B7: Square = Square(9);
    pub const C7: Square = Square(10);
    pub const D7: Square = Square(11);
    pub const E7: Square = Square(12);
    pub const F7: Square = Square(13);
    pub const G7: Square = Square(14);
    pub const H7: Square = Square(15);
    pub const A6: Square = Square(16);
    pub const B6: Square = Square(17);
    pub const C6: Square = Square(18);
    pub const D6: Square = Square(19);
    pub const E6: Square = Square(20);
    pub const F6: Square = Square(21);
    pub const G6: Square = Square(22);
    pub const H6: Square = Square(23);
    pub const A5: Square = Square(24);
    pub const B5: Square = Square(25);
    pub const C5: Square = Square(26);
    pub const D5: Square = Square(27);
    pub const E5: Square = Square(28);
    pub const F5: Square = Square(29);
    pub const G5: Square = Square(30);
    pub const H5: Square = Square(31);
    pub const A4: Square = Square(32);
    pub const B4: Square = Square(33);
    pub const C4: Square = Square(34);
    pub const D4: Square = Square(35);
    pub const E4: Square = Square(36);
    pub const F4: Square = Square(37);
    pub const G4: Square = Square(38);
    pub const H4: Square = Square(39);
    pub const A3: Square = Square(40);
    pub const B3: Square = Square(41);
    pub const C3: Square = Square(42);
    pub const D3: Square = Square(43);
    pub const E3: Square = Square(44);
    pub const F3: Square = Square(45);
    pub const G3: Square = Square(46);
    pub const H3: Square = Square(47);
    pub const A2: Square = Square(48);
    pub const B2: Square = Square(49);
    pub const C2: Square = Square(50);
    pub const D2: Square = Square(51);
    pub const E2: Square = Square(52);
    pub const F2: Square = Square(53);
    pub const G2: Square = Square(54);
    pub const H2: Square = Square(55);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.column()) as char;
        let rank = 8 - self.row();
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn from_index_valid() {
        for i in 0u8..64 {
            assert!(Square::from_index(i).is_some());
        }
    }

    #[test]
    fn from_index_invalid() {
        assert!(Square::from_index(64).is_none());
        assert!(Square::from_index(255).is_none());
    }

    #[test]
    fn row_and_column() {
        assert_eq!(Square::A8.row(), 0);
        assert_eq!(Square::A8.column(), 0);
        assert_eq!(Square::H8.column(), 7);
        assert_eq!(Square::E2.row(), 6);
        assert_eq!(Square::E2.column(), 4);
        assert_eq!(Square::H1.row(), 7);
        assert_eq!(Square::H1.column(), 7);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Square::A8.index(), 0);
        assert_eq!(Square::H8.index(), 7);
        assert_eq!(Square::E2.index(), 52);
        assert_eq!(Square::E4.index(), 36);
        assert_eq!(Square::E1.index(), 60);
        assert_eq!(Square::H1.index(), 63);
    }

    #[test]
    fn offset_within_board() {
        assert_eq!(Square::E2.offset(-16), Some(Square::E4));
        assert_eq!(Square::A8.offset(1), Some(Square::B8));
        assert_eq!(Square::H1.offset(-8), Some(Square::H2));
    }

    #[test]
    fn offset_off_board() {
        assert_eq!(Square::A8.offset(-1), None);
        assert_eq!(Square::H1.offset(1), None);
        assert_eq!(Square::E8.offset(-8), None);
        assert_eq!(Square::E1.offset(8), None);
    }

    #[test]
    fn offset_does_not_mask_wraps() {
        // Bounds checking alone permits horizontal wrap-around; the
        // generators must exclude these via column tests.
        assert_eq!(Square::H8.offset(1), Some(Square::A7));
    }

    #[test]
    fn display_algebraic() {
        assert_eq!(format!("{}", Square::A8), "a8");
        assert_eq!(format!("{}", Square::E2), "e2");
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{}", Square::H1), "h1");
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), 64);
    }
}
