//! Pseudo-legal move generation.
//!
//! Moves follow each piece's movement pattern but may leave the mover's own
//! king attacked; `legality` filters those out. Output order is board scan
//! order (a1..h8) with a fixed per-piece order, so enumeration is
//! reproducible.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Every move consistent with piece movement rules for the side to move.
    #[must_use]
    pub fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for from in Square::all() {
            if let Some((owner, piece)) = self.piece_at(from) {
                if owner == color {
                    self.generate_piece_moves(from, piece, &mut moves);
                }
            }
        }

        moves
    }

    fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, moves),
            Piece::Knight => self.generate_knight_moves(from, moves),
            Piece::Bishop => self.generate_sliding_moves(from, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, &ROOK_DIRECTIONS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, &BISHOP_DIRECTIONS, moves);
                self.generate_sliding_moves(from, &ROOK_DIRECTIONS, moves);
            }
            Piece::King => self.generate_king_moves(from, moves),
        }
    }

    /// Push `from -> to` unless `to` holds a piece of the side to move.
    #[inline]
    fn push_unless_own(&self, from: Square, to: Square, moves: &mut MoveList) {
        match self.piece_at(to) {
            Some((color, _)) if color == self.side_to_move => {}
            _ => moves.push(Move::quiet(from, to)),
        }
    }
}
