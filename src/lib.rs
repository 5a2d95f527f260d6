//! A casual chess opponent.
//!
//! [`Opponent::select_move`] picks a move for the side to move at one of
//! three [`Difficulty`] levels: a random legal move, or a fixed-depth
//! alpha-beta search over a material, piece-square, mobility, rook-file,
//! bishop-pair and king-shelter evaluation.
//!
//! The engine reaches the game only through the [`Rules`] trait. [`Board`]
//! is the bundled rules engine.

#[macro_use]
mod logging;

pub mod board;
pub mod engine;
pub mod rules;
mod zobrist;

pub use board::{Board, Color, FenError, Move, MoveError, Piece, Square};
pub use engine::{
    evaluate, Difficulty, DifficultyError, EvalParams, Evaluator, Opponent, SearchResult,
    SearchStats, Searcher,
};
pub use rules::{BoardView, Rules};
