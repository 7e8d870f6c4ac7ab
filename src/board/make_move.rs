use super::{Board, CastleSide, Color, Move, Piece, Square};

impl Board {
    /// Castling side if `mv` is a king move of two files on this board.
    #[must_use]
    pub fn castle_side(&self, mv: Move) -> Option<CastleSide> {
        if self.piece_on(mv.from()) != Some(Piece::King) || mv.from().rank() != mv.to().rank() {
            return None;
        }
        match i16::from(mv.to().file()) - i16::from(mv.from().file()) {
            2 => Some(CastleSide::King),
            -2 => Some(CastleSide::Queen),
            _ => None,
        }
    }

    /// Apply a pseudo-legal move in place.
    ///
    /// The move must be pseudo-legal for this position; anything else leaves
    /// the board in an unspecified (but memory-safe) state. An empty origin
    /// square is ignored.
    pub fn make_move(&mut self, mv: Move) {
        let Some((color, piece)) = self.piece_at(mv.from()) else {
            return;
        };
        let from = mv.from();
        let to = mv.to();
        let previous_en_passant = self.en_passant_target;
        let castle = self.castle_side(mv);

        self.clear_square(from);
        self.set_piece(to, color, mv.promotion().unwrap_or(piece));

        self.en_passant_target = None;
        if piece == Piece::Pawn {
            if from.rank().abs_diff(to.rank()) == 2 {
                self.en_passant_target = Some(Square::at((from.rank() + to.rank()) / 2, from.file()));
            }
            if previous_en_passant == Some(to) {
                self.clear_square(Square::at(from.rank(), to.file()));
            }
        }

        self.update_castling_rights(color, piece, from, to);

        if let Some(side) = castle {
            let rank = from.rank();
            self.clear_square(Square::at(rank, side.rook_home_file()));
            self.set_piece(Square::at(rank, side.rook_target_file()), color, Piece::Rook);
        }

        self.side_to_move = color.opponent();
    }

    /// Copy the board and apply `mv` to the copy.
    #[must_use]
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.make_move(mv);
        next
    }

    fn update_castling_rights(&mut self, color: Color, piece: Piece, from: Square, to: Square) {
        if piece == Piece::King {
            self.castling_rights.clear(color);
        }

        let own_rank = color.back_rank();
        for side in CastleSide::BOTH {
            if from == Square::at(own_rank, side.rook_home_file()) {
                self.castling_rights.remove(color, side);
            }
        }

        let opponent = color.opponent();
        let their_rank = opponent.back_rank();
        for side in CastleSide::BOTH {
            if to == Square::at(their_rank, side.rook_home_file()) {
                self.castling_rights.remove(opponent, side);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let board = Board::new().with_move(mv("e2e4"));
        assert_eq!(board.en_passant_target(), Some(sq("e3")));
        assert_eq!(board.side_to_move(), Color::Black);

        let board = board.with_move(mv("g8f6"));
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn en_passant_removes_captured_pawn() {
        let board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
        let after = board.with_move(mv("e5d6"));
        assert_eq!(after.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
        assert!(after.is_empty(sq("d5")));
        assert!(after.is_empty(sq("e5")));
    }

    #[test]
    fn promotion_replaces_pawn() {
        let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let after = board.with_move(Move::new(sq("a7"), sq("a8"), Some(Piece::Knight)));
        assert_eq!(after.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

        let short = board.with_move(mv("e1g1"));
        assert_eq!(short.piece_at(sq("g1")), Some((Color::White, Piece::King)));
        assert_eq!(short.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
        assert!(short.is_empty(sq("h1")));
        assert!(!short.castling_rights().has(Color::White, CastleSide::King));
        assert!(!short.castling_rights().has(Color::White, CastleSide::Queen));
        assert!(short.castling_rights().has(Color::Black, CastleSide::King));

        let long = board.with_move(mv("e1c1"));
        assert_eq!(long.piece_at(sq("c1")), Some((Color::White, Piece::King)));
        assert_eq!(long.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
        assert!(long.is_empty(sq("a1")));
    }

    #[test]
    fn rook_moves_and_captures_forfeit_single_rights() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

        let after = board.with_move(mv("h1h8"));
        assert!(!after.castling_rights().has(Color::White, CastleSide::King));
        assert!(after.castling_rights().has(Color::White, CastleSide::Queen));
        assert!(!after.castling_rights().has(Color::Black, CastleSide::King));
        assert!(after.castling_rights().has(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn castle_side_detection() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(board.castle_side(mv("e1g1")), Some(CastleSide::King));
        assert_eq!(board.castle_side(mv("e1c1")), Some(CastleSide::Queen));
        assert_eq!(board.castle_side(mv("e1f1")), None);
        assert_eq!(board.castle_side(mv("a1c1")), None);
    }
}
