//! Chess position representation and game logic.
//!
//! A position is a 64-cell mailbox copied by value. Moves are generated
//! pseudo-legally, filtered by replaying the opponent's replies, and searched
//! with fixed-depth negamax alpha-beta.
//!
//! # Example
//! ```
//! use mailbox_engine::board::Board;
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod attacks;
mod error;
pub mod eval;
mod fen;
mod legality;
mod make_move;
mod movegen;
pub mod perft;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{Evaluator, MaterialEvaluator, PieceSquareEvaluator};
pub use perft::{PerftCase, PerftOutcome, REFERENCE_SUITE};
pub use search::{
    alpha_beta, find_best_move, minimax, search, search_as, KillerTable, Perspective,
    SearchContext, SearchLimits, SearchReport, SearchResult, SearchStats,
};
pub use state::Board;
pub use types::{CastleSide, CastlingRights, Color, Move, MoveList, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
