//! Legality oracle.
//!
//! A pseudo-legal move is legal when, after playing it, no opponent
//! pseudo-legal move lands on a square holding one of the mover's kings. For
//! castling the king is also copied onto its origin and the square it
//! crosses, so castling out of or through an attack is rejected too.

use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Decide whether a pseudo-legal move leaves the mover's king safe.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        let mover = self.side_to_move;
        let mut after = self.with_move(mv);

        if let Some(side) = self.castle_side(mv) {
            let rank = mv.from().rank();
            after.set_piece(mv.from(), mover, Piece::King);
            after.set_piece(Square::at(rank, side.transit_file()), mover, Piece::King);
        }

        !after
            .generate_pseudo_moves()
            .iter()
            .any(|reply| after.piece_at(reply.to()) == Some((mover, Piece::King)))
    }

    /// Legal moves for the side to move, in pseudo-legal generation order.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = self.generate_pseudo_moves();
        moves.retain(|mv| self.is_legal(mv));
        moves
    }

    /// Resolve long algebraic text (`e2e4`, `e7e8q`) against the legal moves.
    pub fn parse_move(&self, text: &str) -> Result<Move, super::MoveParseError> {
        let wanted: Move = text.parse()?;
        if self.generate_moves().contains(&wanted) {
            Ok(wanted)
        } else {
            Err(super::MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Parse a move, check it is legal, and play it.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, super::MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}
