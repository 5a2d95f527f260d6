//! Standard Algebraic Notation (SAN) output.
//!
//! Every move handed out by [`Board::generate_moves`] carries its SAN,
//! including the `+`/`#` suffix. Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! # Examples
//! ```
//! use chess_opponent::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert!(moves.iter().any(|m| m.san() == "Nf3"));
//! ```

use super::{Board, Move, Piece};

impl Board {
    /// SAN of `mv` in the current position.
    pub(crate) fn move_to_san(&mut self, mv: &Move) -> String {
        let legal = self.generate_legal();
        self.san_with(mv, &legal)
    }

    /// Fill in the SAN of every move in `moves`, all legal in this position.
    pub(crate) fn annotate_san(&mut self, moves: &mut [Move]) {
        let legal = moves.to_vec();
        for mv in moves.iter_mut() {
            let san = self.san_with(mv, &legal);
            mv.set_san(san);
        }
    }

    fn san_with(&mut self, mv: &Move, legal: &[Move]) -> String {
        let mut san = String::new();

        if mv.is_castle_kingside() {
            san.push_str("O-O");
        } else if mv.is_castle_queenside() {
            san.push_str("O-O-O");
        } else {
            if mv.piece() == Piece::Pawn {
                // Pawn captures include the file
                if mv.is_capture() {
                    san.push(file_char(mv.from().file()));
                }
            } else {
                san.push(mv.piece().to_char().to_ascii_uppercase());
                let (needs_file, needs_rank) = needs_disambiguation(mv, legal);
                if needs_file {
                    san.push(file_char(mv.from().file()));
                }
                if needs_rank {
                    san.push(rank_char(mv.from().rank()));
                }
            }

            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());

            if let Some(promo) = mv.promotion() {
                san.push('=');
                san.push(promo.to_char().to_ascii_uppercase());
            }
        }

        let info = self.make_move(mv);
        if self.is_check() {
            san.push(if self.has_legal_move() { '+' } else { '#' });
        }
        self.unmake_move(mv, info);

        san
    }
}

/// Whether the origin file and/or rank must be spelled out.
/// Returns (`needs_file`, `needs_rank`).
fn needs_disambiguation(mv: &Move, legal: &[Move]) -> (bool, bool) {
    let rivals: Vec<&Move> = legal
        .iter()
        .filter(|m| m.to() == mv.to() && m.piece() == mv.piece() && m.from() != mv.from())
        .collect();

    if rivals.is_empty() {
        return (false, false);
    }

    let same_file = rivals.iter().any(|m| m.from().file() == mv.from().file());
    let same_rank = rivals.iter().any(|m| m.from().rank() == mv.from().rank());

    match (same_file, same_rank) {
        (false, _) => (true, false),
        (true, false) => (false, true),
        (true, true) => (true, true),
    }
}

fn file_char(file: usize) -> char {
    (b'a' + file as u8) as char
}

fn rank_char(rank: usize) -> char {
    (b'1' + rank as u8) as char
}
