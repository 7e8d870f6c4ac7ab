pub mod board;
pub mod logger;
pub mod uci;

pub use board::{Board, Color, Move, Piece, Square};
