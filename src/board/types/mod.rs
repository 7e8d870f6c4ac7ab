//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - cell index 0-63
//! - `Move` and `MoveList` - move representation and fixed-capacity buffer
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
