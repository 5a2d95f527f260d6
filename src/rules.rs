//! The rules-engine seam the opponent searches through.
//!
//! The engine never touches a concrete board. It evaluates through
//! [`BoardView`] and walks the game tree through [`Rules`]; [`Board`] is the
//! implementation shipped with the crate.

use crate::board::{Board, Color, Move, MoveError, Piece, Square};

/// Read-only square-by-square view of a position.
pub trait BoardView {
    /// Color and type of the piece on `sq`, or `None` when empty.
    fn piece_at(&self, sq: Square) -> Option<(Color, Piece)>;
}

/// Operations the search needs from a rules engine.
///
/// Implementations own legality. The search only reorders and selects the
/// moves returned by [`Rules::legal_moves`], applies them one at a time, and
/// undoes each before trying the next.
pub trait Rules: BoardView {
    /// Legal moves for the side to move, with metadata and SAN filled in.
    fn legal_moves(&mut self) -> Vec<Move>;

    /// Play `m` in place.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when `m` is not legal here.
    fn apply(&mut self, m: &Move) -> Result<(), MoveError>;

    /// Take back the last applied move.
    fn undo(&mut self) -> Option<Move>;

    /// Checkmate, stalemate or a draw.
    fn is_game_over(&mut self) -> bool;

    /// The side to move is checkmated.
    fn is_checkmate(&mut self) -> bool;

    fn side_to_move(&self) -> Color;
}

impl BoardView for Board {
    #[inline]
    fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        Board::piece_at(self, sq)
    }
}

impl Rules for Board {
    fn legal_moves(&mut self) -> Vec<Move> {
        self.generate_moves()
    }

    fn apply(&mut self, m: &Move) -> Result<(), MoveError> {
        Board::apply(self, m)
    }

    fn undo(&mut self) -> Option<Move> {
        Board::undo(self)
    }

    fn is_game_over(&mut self) -> bool {
        Board::is_game_over(self)
    }

    fn is_checkmate(&mut self) -> bool {
        Board::is_checkmate(self)
    }

    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }
}
