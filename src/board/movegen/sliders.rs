use super::super::{Board, Move, MoveList, Square};

impl Board {
    /// Cast a ray per direction until it leaves the board or meets a piece.
    /// An enemy blocker is included as a capture, a friendly one is not.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move;

        for &(df, dr) in directions {
            let mut next = from.offset(df, dr);
            while let Some(to) = next {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some((owner, _)) => {
                        if owner != color {
                            moves.push(Move::quiet(from, to));
                        }
                        break;
                    }
                }
                next = to.offset(df, dr);
            }
        }
    }
}
