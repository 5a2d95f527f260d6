//! Chess board representation and game logic.
//!
//! A mailbox board with full legal move generation, SAN, FEN, draw
//! detection and undo. The engine talks to it only through
//! [`crate::rules::Rules`].
//!
//! # Example
//! ```
//! use chess_opponent::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod fen;
mod make_unmake;
mod movegen;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use state::Board;
pub use types::{CastlingRights, Color, Move, MoveFlags, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
