use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, CastleSide, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        for &to in KING_TARGETS[from.index()].as_slice() {
            self.push_unless_own(from, to, moves);
        }

        let color = self.side_to_move;
        let back_rank = color.back_rank();
        if from != Square::at(back_rank, 4) {
            return;
        }

        // Attacks on the transit squares are checked by the legality stage.
        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let path_clear = side
                .empty_files()
                .iter()
                .all(|&file| self.is_empty(Square::at(back_rank, file)));
            if path_clear {
                let to = Square::at(back_rank, side.king_target_file());
                moves.push(Move::quiet(from, to));
            }
        }
    }
}
