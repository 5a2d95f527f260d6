use crate::zobrist::ZOBRIST;

use super::error::MoveError;
use super::state::UnmakeInfo;
use super::{Board, Color, Move, Piece, Square};

/// Rook (from, to) files for a castling move landing on `king_to_file`.
#[inline]
fn castling_rook_files(king_to_file: usize) -> (usize, usize) {
    if king_to_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Board {
    /// Play `m` without any legality check.
    ///
    /// `m` must come from this position's generator. The returned record
    /// restores the position exactly through [`Board::unmake_move`].
    pub(crate) fn make_move(&mut self, m: &Move) -> UnmakeInfo {
        let color = self.side_to_move;
        let previous_hash = self.hash;
        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        self.hash ^= ZOBRIST.black_to_move_key;
        self.hash ^= ZOBRIST.en_passant(self.en_passant_target);
        self.hash ^= ZOBRIST.castling(self.castling_rights);

        let captured_piece_info = if m.is_en_passant() {
            Square::new(m.from().rank(), m.to().file()).and_then(|sq| self.remove_piece(sq))
        } else if m.is_castling() {
            None
        } else {
            self.remove_piece(m.to())
        };

        let moving = self.remove_piece(m.from());
        let moving_piece = moving.map_or(m.piece(), |(_, piece)| piece);
        self.set_piece(m.to(), color, m.promotion().unwrap_or(moving_piece));

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_files(m.to().file());
            let rank = m.to().rank();
            if let (Some(from), Some(to)) = (Square::new(rank, rook_from), Square::new(rank, rook_to))
            {
                if let Some((rook_color, rook)) = self.remove_piece(from) {
                    self.set_piece(to, rook_color, rook);
                }
            }
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            Square::new((m.from().rank() + m.to().rank()) / 2, m.from().file())
        } else {
            None
        };

        if moving_piece == Piece::Pawn || captured_piece_info.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.update_castling_rights(m, moving_piece, captured_piece_info);

        self.side_to_move = color.opponent();
        self.hash ^= ZOBRIST.en_passant(self.en_passant_target);
        self.hash ^= ZOBRIST.castling(self.castling_rights);

        let made_hash = self.hash;
        let previous_repetition_count = self.repetition_counts.get(made_hash);
        self.repetition_counts.increment(made_hash);

        UnmakeInfo {
            captured_piece_info,
            previous_en_passant_target,
            previous_castling_rights,
            previous_hash,
            previous_halfmove_clock,
            previous_fullmove_number,
            made_hash,
            previous_repetition_count,
        }
    }

    fn update_castling_rights(
        &mut self,
        m: &Move,
        moving_piece: Piece,
        captured: Option<(Color, Piece)>,
    ) {
        let color = self.side_to_move;
        let rook_corner = |color: Color, sq: Square| {
            (sq.rank() == color.back_rank()).then_some(sq.file())
        };

        match moving_piece {
            Piece::King => self.castling_rights.remove_color(color),
            Piece::Rook => match rook_corner(color, m.from()) {
                Some(0) => self.castling_rights.remove(color, false),
                Some(7) => self.castling_rights.remove(color, true),
                _ => {}
            },
            _ => {}
        }

        if let Some((captured_color, Piece::Rook)) = captured {
            match rook_corner(captured_color, m.to()) {
                Some(0) => self.castling_rights.remove(captured_color, false),
                Some(7) => self.castling_rights.remove(captured_color, true),
                _ => {}
            }
        }
    }

    /// Reverse [`Board::make_move`].
    pub(crate) fn unmake_move(&mut self, m: &Move, info: UnmakeInfo) {
        self.repetition_counts
            .set(info.made_hash, info.previous_repetition_count);

        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_files(m.to().file());
            let rank = m.to().rank();
            if let (Some(from), Some(to)) = (Square::new(rank, rook_from), Square::new(rank, rook_to))
            {
                if let Some((rook_color, rook)) = self.remove_piece(to) {
                    self.set_piece(from, rook_color, rook);
                }
            }
        }

        let placed = self.remove_piece(m.to());
        let original = if m.is_promotion() {
            Piece::Pawn
        } else {
            placed.map_or(m.piece(), |(_, piece)| piece)
        };
        self.set_piece(m.from(), color, original);

        if let Some((captured_color, captured)) = info.captured_piece_info {
            let square = if m.is_en_passant() {
                Square::new(m.from().rank(), m.to().file())
            } else {
                Some(m.to())
            };
            if let Some(sq) = square {
                self.set_piece(sq, captured_color, captured);
            }
        }

        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.hash = info.previous_hash;
    }

    /// Play a legal move and record it in the history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] when `m` is not a legal move in
    /// this position; the board is left untouched.
    pub fn apply(&mut self, m: &Move) -> Result<(), MoveError> {
        let legal = self
            .generate_pseudo_moves()
            .into_iter()
            .find(|candidate| {
                candidate.same_squares(m)
                    && candidate.piece() == m.piece()
                    && candidate.captured() == m.captured()
                    && candidate.flags() == m.flags()
            })
            .filter(|candidate| self.leaves_king_safe(candidate));

        let Some(mut legal) = legal else {
            return Err(MoveError::IllegalMove {
                notation: m.to_string(),
            });
        };

        if m.san().is_empty() {
            let san = self.move_to_san(&legal);
            legal.set_san(san);
        } else {
            legal.set_san(m.san().to_string());
        }

        let info = self.make_move(&legal);
        self.history.push((legal, info));
        Ok(())
    }

    /// Undo the most recent [`Board::apply`], returning the move taken back.
    pub fn undo(&mut self) -> Option<Move> {
        let (m, info) = self.history.pop()?;
        self.unmake_move(&m, info);
        Some(m)
    }

    /// Play a move given in SAN, e.g. "Nf3", "exd5", "O-O", "e8=Q+".
    ///
    /// Check markers and annotation suffixes are optional.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoMatchingMove`] when no legal move has that notation.
    pub fn apply_san(&mut self, san: &str) -> Result<Move, MoveError> {
        let wanted = strip_san_suffix(san);
        let found = self
            .generate_moves()
            .into_iter()
            .find(|m| strip_san_suffix(m.san()) == wanted);

        let Some(m) = found else {
            return Err(MoveError::NoMatchingMove {
                notation: san.to_string(),
            });
        };
        self.apply(&m)?;
        Ok(m)
    }

    /// Play a move given in long algebraic (UCI) form, e.g. "e2e4", "e7e8q".
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoMatchingMove`] when the text is malformed or
    /// names no legal move.
    pub fn apply_uci(&mut self, uci: &str) -> Result<Move, MoveError> {
        let no_match = || MoveError::NoMatchingMove {
            notation: uci.to_string(),
        };

        let from: Square = uci.get(0..2).ok_or_else(no_match)?.parse().map_err(|_| no_match())?;
        let to: Square = uci.get(2..4).ok_or_else(no_match)?.parse().map_err(|_| no_match())?;
        let promotion = match uci.get(4..) {
            None | Some("") => None,
            Some(p) => {
                let mut chars = p.chars();
                match (chars.next().and_then(Piece::from_char), chars.next()) {
                    (Some(piece), None) => Some(piece),
                    _ => return Err(no_match()),
                }
            }
        };

        let mut found = self
            .generate_legal()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
            .ok_or_else(no_match)?;
        let san = self.move_to_san(&found);
        found.set_san(san);
        self.apply(&found)?;
        Ok(found)
    }
}

fn strip_san_suffix(san: &str) -> &str {
    san.trim_end_matches(['+', '#', '!', '?'])
}
