//! Core chess types.
//!
//! This module contains the fundamental types shared by the board and the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - board square as (rank, file)
//! - `Move` and `MoveFlags` - generated moves with their metadata
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveFlags};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
