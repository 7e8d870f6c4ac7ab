//! Square attack queries.
//!
//! Looks outward from the target square instead of generating moves, so it is
//! independent of the move generator and usable as a cross-check for it.

use super::attack_tables::{BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// True when a piece of `attacker` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // A pawn attacks diagonally forward, so look one rank backward from
        // the target, seen from the attacker's side.
        let behind = -attacker.pawn_direction();
        for file_delta in [-1, 1] {
            if let Some(from) = square.offset(file_delta, behind) {
                if self.piece_at(from) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        let hits = |targets: &[Square], piece: Piece| {
            targets
                .iter()
                .any(|&from| self.piece_at(from) == Some((attacker, piece)))
        };
        if hits(KNIGHT_TARGETS[square.index()].as_slice(), Piece::Knight)
            || hits(KING_TARGETS[square.index()].as_slice(), Piece::King)
        {
            return true;
        }

        self.ray_hits(square, attacker, &BISHOP_DIRECTIONS, Piece::Bishop)
            || self.ray_hits(square, attacker, &ROOK_DIRECTIONS, Piece::Rook)
    }

    fn ray_hits(&self, square: Square, attacker: Color, directions: &[(i8, i8)], slider: Piece) -> bool {
        directions.iter().any(|&(df, dr)| {
            let mut next = square.offset(df, dr);
            while let Some(sq) = next {
                if let Some((color, piece)) = self.piece_at(sq) {
                    return color == attacker && (piece == slider || piece == Piece::Queen);
                }
                next = sq.offset(df, dr);
            }
            false
        })
    }

    /// True when any king of `color` is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_squares(color)
            .any(|sq| self.is_square_attacked(sq, color.opponent()))
    }

    /// Side to move is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// Side to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }
}
