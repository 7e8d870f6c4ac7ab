//! Static evaluation.
//!
//! Scores are centipawns from the point of view of the side to move.

use super::{Board, Color, Piece};

/// Leaf scorer used by the search.
///
/// Implementations must be deterministic and return the score relative to
/// `board.side_to_move()`: positive is good for the player about to move.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, board: &Board) -> i32;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, board: &Board) -> i32 {
        (**self).evaluate(board)
    }
}

/// Material balance only.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        let white: i32 = side_total(board, Color::White, |piece, _| piece.value());
        let black: i32 = side_total(board, Color::Black, |piece, _| piece.value());
        relative(board, white - black)
    }
}

/// Material plus piece-square bonuses. The default evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct PieceSquareEvaluator;

impl Evaluator for PieceSquareEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        let score = |piece: Piece, table_idx: usize| piece.value() + pst(piece)[table_idx];
        let white = side_total(board, Color::White, score);
        let black = side_total(board, Color::Black, score);
        relative(board, white - black)
    }
}

/// Sum `score(piece, table_index)` over the pieces of one color.
///
/// Tables are laid out as printed, rank 8 first, from White's side. White
/// squares are flipped vertically to index them; Black squares index the
/// table directly, which mirrors it.
fn side_total(board: &Board, color: Color, score: impl Fn(Piece, usize) -> i32) -> i32 {
    board
        .pieces()
        .filter(|&(_, c, _)| c == color)
        .map(|(sq, _, piece)| {
            let idx = match color {
                Color::White => sq.index() ^ 56,
                Color::Black => sq.index(),
            };
            score(piece, idx)
        })
        .sum()
}

#[inline]
fn relative(board: &Board, white_minus_black: i32) -> i32 {
    match board.side_to_move() {
        Color::White => white_minus_black,
        Color::Black => -white_minus_black,
    }
}

fn pst(piece: Piece) -> &'static [i32; 64] {
    match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => &KING_TABLE,
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -20, -20,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
    -5, -5,  0,  5,  5,  0, -5, -5,
    -5,  0,  5, 10, 10,  5,  0, -5,
    -5,  0,  5, 10, 10,  5,  0, -5,
    -5,  0,  5, 10, 10,  5,  0, -5,
    -5,  0,  5, 10, 10,  5,  0, -5,
    -5,  0,  5, 10, 10,  5,  0, -5,
     0,  5, 10, 15, 15, 10,  5,  0,
    -5, -5,  0,  5,  5,  0, -5, -5,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   5,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -50, -40, -30, -20, -20, -30, -40, -50,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -50, -30, -30, -30, -30, -30, -30, -50,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let board = Board::new();
        assert_eq!(PieceSquareEvaluator.evaluate(&board), 0);
        assert_eq!(MaterialEvaluator.evaluate(&board), 0);
    }

    #[test]
    fn score_is_relative_to_side_to_move() {
        let white_up = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        let mut black_view = white_up;
        black_view.set_side_to_move(Color::Black);
        assert_eq!(MaterialEvaluator.evaluate(&white_up), 900);
        assert_eq!(MaterialEvaluator.evaluate(&black_view), -900);
        assert_eq!(
            PieceSquareEvaluator.evaluate(&white_up),
            -PieceSquareEvaluator.evaluate(&black_view)
        );
    }

    #[test]
    fn tables_are_mirrored_between_colors() {
        // Same knight placement seen from either side scores the same.
        let white = Board::from_fen("4k3/8/8/8/4N3/8/8/4K3 w - - 0 1");
        let black = Board::from_fen("4k3/8/8/4n3/8/8/8/4K3 b - - 0 1");
        assert_eq!(
            PieceSquareEvaluator.evaluate(&white),
            PieceSquareEvaluator.evaluate(&black)
        );
    }

    #[test]
    fn central_pawn_push_is_rewarded() {
        let before = Board::new();
        let mut after = before.with_move("e2e4".parse().unwrap());
        after.set_side_to_move(Color::White);
        assert!(PieceSquareEvaluator.evaluate(&after) > PieceSquareEvaluator.evaluate(&before));
    }

    #[test]
    fn evaluator_by_reference() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let by_ref: &dyn Evaluator = &MaterialEvaluator;
        assert_eq!(by_ref.evaluate(&board), 500);
        fn score_with<E: Evaluator>(evaluator: E, board: &Board) -> i32 {
            evaluator.evaluate(board)
        }
        assert_eq!(score_with(by_ref, &board), 500);
    }
}
