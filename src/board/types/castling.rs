//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// File of the rook before castling
    #[must_use]
    pub const fn rook_home_file(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// File the rook lands on
    #[must_use]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    /// File the king lands on
    #[must_use]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// Files that must be empty for the king and rook to pass
    #[must_use]
    pub const fn empty_files(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[1, 2, 3],
        }
    }

    /// File the king crosses between its home and target squares
    #[must_use]
    pub const fn transit_file(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.remove(color, CastleSide::King);
        self.remove(color, CastleSide::Queen);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::King) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queen) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::King) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queen) => CASTLE_BLACK_Q,
        }
    }

    /// Parse the FEN castling field (`KQkq`, any subset, or `-`).
    ///
    /// Returns the first offending character on failure.
    pub(crate) fn from_fen(field: &str) -> Result<Self, char> {
        let mut rights = CastlingRights::none();
        if field == "-" {
            return Ok(rights);
        }
        for c in field.chars() {
            match c {
                'K' => rights.set(Color::White, CastleSide::King),
                'Q' => rights.set(Color::White, CastleSide::Queen),
                'k' => rights.set(Color::Black, CastleSide::King),
                'q' => rights.set(Color::Black, CastleSide::Queen),
                _ => return Err(c),
            }
        }
        Ok(rights)
    }

    /// Format as the FEN castling field
    pub(crate) fn to_fen(self) -> String {
        let mut out = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::King, 'K'),
            (Color::White, CastleSide::Queen, 'Q'),
            (Color::Black, CastleSide::King, 'k'),
            (Color::Black, CastleSide::Queen, 'q'),
        ] {
            if self.has(color, side) {
                out.push(c);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_remove() {
        let mut rights = CastlingRights::none();
        rights.set(Color::Black, CastleSide::Queen);
        assert!(rights.has(Color::Black, CastleSide::Queen));
        assert!(!rights.has(Color::White, CastleSide::Queen));
        rights.remove(Color::Black, CastleSide::Queen);
        assert!(rights.is_empty());
    }

    #[test]
    fn clear_only_touches_one_color() {
        let mut rights = CastlingRights::all();
        rights.clear(Color::White);
        assert_eq!(rights.to_fen(), "kq");
    }

    #[test]
    fn fen_field() {
        assert_eq!(CastlingRights::from_fen("-"), Ok(CastlingRights::none()));
        assert_eq!(CastlingRights::from_fen("KQkq"), Ok(CastlingRights::all()));
        assert_eq!(CastlingRights::from_fen("Kx"), Err('x'));
        assert_eq!(CastlingRights::from_fen("qK").map(|r| r.to_fen()), Ok("Kq".to_string()));
    }
}
