//! The opponent: evaluation, move ordering and search.
//!
//! # Example
//! ```
//! use chess_opponent::{Board, Difficulty, Opponent};
//!
//! let mut board = Board::new();
//! let mut opponent = Opponent::seeded(42);
//! let chosen = opponent.select_move(&mut board, Difficulty::Medium);
//! assert!(chosen.is_some());
//! assert_eq!(board, Board::new());
//! ```

mod difficulty;
mod eval;
pub mod move_order;
mod search;
mod tables;

pub use difficulty::{Difficulty, DifficultyError};
pub use eval::{evaluate, EvalBreakdown, EvalParams, Evaluator};
pub use move_order::{order_moves, score_move};
pub use search::{Opponent, SearchResult, SearchStats, Searcher, INFINITY};
