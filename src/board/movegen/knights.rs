use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        for &to in KNIGHT_TARGETS[from.index()].as_slice() {
            self.push_unless_own(from, to, moves);
        }
    }
}
