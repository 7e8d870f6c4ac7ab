use crate::board::{Move, MoveList};

use super::MAX_DEPTH;

/// Two killer moves per remaining depth, newest first.
///
/// One table belongs to one top-level search (or one root worker) and is
/// threaded through the recursion by `&mut`.
#[derive(Clone, Debug)]
pub struct KillerTable {
    slots: [[Option<Move>; 2]; MAX_DEPTH],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[None; 2]; MAX_DEPTH],
        }
    }

    /// Newer killer stored for `depth`.
    #[must_use]
    pub fn primary(&self, depth: u32) -> Option<Move> {
        self.slots.get(depth as usize).and_then(|row| row[0])
    }

    /// Older killer stored for `depth`.
    #[must_use]
    pub fn secondary(&self, depth: u32) -> Option<Move> {
        self.slots.get(depth as usize).and_then(|row| row[1])
    }

    /// Record a move that caused a cutoff at `depth`.
    ///
    /// The previous newer killer slides into the older slot unless the move
    /// already occupies the newer slot (compared by origin and destination).
    pub fn update(&mut self, depth: u32, mv: Move) {
        let Some(row) = self.slots.get_mut(depth as usize) else {
            return;
        };
        if row[0].is_some_and(|newer| newer.same_squares(mv)) {
            return;
        }
        row[1] = row[0];
        row[0] = Some(mv);
    }

    pub fn reset(&mut self) {
        self.slots = [[None; 2]; MAX_DEPTH];
    }

    /// Move the killers for `depth` that appear in `moves` to the front of
    /// the list, newer killer first. Every other move keeps its relative
    /// order and nothing is duplicated.
    pub(crate) fn order_front(&self, depth: u32, moves: &mut MoveList) {
        let mut slot = 0;
        for killer in [self.primary(depth), self.secondary(depth)].into_iter().flatten() {
            let found = moves.as_slice()[slot..]
                .iter()
                .position(|&mv| mv == killer)
                .map(|offset| offset + slot);
            if let Some(idx) = found {
                moves.promote(idx, slot);
                slot += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    #[test]
    fn update_rotates_slots() {
        let mut killers = KillerTable::new();
        killers.update(3, mv("e2e4"));
        killers.update(3, mv("d2d4"));
        assert_eq!(killers.primary(3), Some(mv("d2d4")));
        assert_eq!(killers.secondary(3), Some(mv("e2e4")));
        assert_eq!(killers.primary(2), None);
    }

    #[test]
    fn update_skips_move_already_in_newer_slot() {
        let mut killers = KillerTable::new();
        killers.update(1, mv("e2e4"));
        killers.update(1, mv("g1f3"));
        killers.update(1, mv("g1f3"));
        assert_eq!(killers.primary(1), Some(mv("g1f3")));
        assert_eq!(killers.secondary(1), Some(mv("e2e4")));

        // promotion piece is ignored when comparing
        killers.update(2, mv("a7a8q"));
        killers.update(2, mv("a7a8n"));
        assert_eq!(killers.primary(2), Some(mv("a7a8q")));
        assert_eq!(killers.secondary(2), None);
    }

    #[test]
    fn out_of_range_depth_is_ignored() {
        let mut killers = KillerTable::new();
        killers.update(MAX_DEPTH as u32, mv("e2e4"));
        assert_eq!(killers.primary(MAX_DEPTH as u32), None);
    }

    #[test]
    fn order_front_promotes_legal_killers_without_duplicates() {
        let board = Board::new();
        let mut moves = board.generate_moves();
        let before = moves.len();

        let mut killers = KillerTable::new();
        killers.update(2, mv("g1f3"));
        killers.update(2, mv("e7e5")); // not legal for White
        killers.update(2, mv("e2e4"));
        // newer: e2e4, older: e7e5

        killers.order_front(2, &mut moves);
        assert_eq!(moves.len(), before);
        assert_eq!(moves[0], mv("e2e4"));
        assert_eq!(moves.iter().filter(|&&m| m == mv("e2e4")).count(), 1);

        let mut untouched = board.generate_moves();
        killers.order_front(5, &mut untouched);
        assert_eq!(untouched.as_slice(), board.generate_moves().as_slice());
    }

    #[test]
    fn reset_clears_everything() {
        let mut killers = KillerTable::new();
        killers.update(0, mv("e2e4"));
        killers.reset();
        assert_eq!(killers.primary(0), None);
    }
}
