use super::super::{Board, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let forward = color.pawn_direction();

        if let Some(one_step) = from.offset(0, forward) {
            if self.is_empty(one_step) {
                self.push_pawn_move(from, one_step, moves);

                if from.rank() == color.pawn_start_rank() {
                    if let Some(two_step) = one_step.offset(0, forward) {
                        if self.is_empty(two_step) {
                            self.push_pawn_move(from, two_step, moves);
                        }
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            if let Some(target) = from.offset(file_delta, forward) {
                let enemy = matches!(self.piece_at(target), Some((owner, _)) if owner != color);
                if enemy || self.en_passant_target == Some(target) {
                    self.push_pawn_move(from, target, moves);
                }
            }
        }
    }

    /// A pawn arriving on the last rank always promotes: one move per
    /// promotion kind, never a plain move.
    fn push_pawn_move(&self, from: Square, to: Square, moves: &mut MoveList) {
        if to.rank() == self.side_to_move.pawn_promotion_rank() {
            for piece in PROMOTION_PIECES {
                moves.push(Move::new(from, to, Some(piece)));
            }
        } else {
            moves.push(Move::quiet(from, to));
        }
    }
}
