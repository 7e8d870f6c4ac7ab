//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move: origin, destination and optional promotion kind.
///
/// Moves carry no knowledge of the position they were generated for; the
/// board derives captures, castling and en passant from its own state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, promotion: Option<Piece>) -> Self {
        Move {
            from,
            to,
            promotion,
        }
    }

    /// Create a move without promotion
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, None)
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Equality on origin and destination only. Killer bookkeeping uses this
    /// so that a refuting promotion is remembered regardless of its kind.
    #[inline]
    #[must_use]
    pub fn same_squares(self, other: Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Parses the long algebraic form (`e2e4`, `e7e8q`) without consulting a
/// position. Use `Board::parse_move` to resolve against the legal moves.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c @ ('n' | 'b' | 'r' | 'q')) => Piece::from_char(c),
            Some(c) => return Err(MoveParseError::InvalidPromotion { char: c }),
        };

        Ok(Move::new(from, to, promotion))
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// Fixed-capacity move buffer; one lives on the stack per search node.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move::quiet(Square::A1, Square::A1); MAX_MOVES],
            len: 0,
        }
    }

    /// Append a move. The list is full at `MAX_MOVES`; further moves are
    /// dropped so generation on an overcrowded position cannot fail.
    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    /// Keep only the moves for which `keep` returns true, preserving order.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut kept = 0;
        for idx in 0..self.len {
            let mv = self.moves[idx];
            if keep(mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept;
    }

    /// Move the entry at `idx` to `slot`, shifting the entries in between
    /// one step back so their relative order is unchanged.
    pub(crate) fn promote(&mut self, idx: usize, slot: usize) {
        if idx > slot && idx < self.len {
            self.moves[slot..=idx].rotate_right(1);
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
