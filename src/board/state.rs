use std::collections::HashMap;
use std::fmt;

use crate::zobrist::ZOBRIST;

use super::{CastlingRights, Color, Move, Piece, Square};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_hash: u64,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) made_hash: u64,
    pub(crate) previous_repetition_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }
}

/// Mailbox chess position with move history.
///
/// `Board` is the crate's rules engine: it generates legal moves with full
/// metadata, plays and takes back moves, and reports check, mate and draws.
/// Two boards compare equal only when placement, side to move, castling,
/// en passant, clocks, repetition counts and history all match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) history: Vec<(Move, UnmakeInfo)>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            board.put(0, file, Color::White, piece);
            board.put(7, file, Color::Black, piece);
            board.put(1, file, Color::White, Piece::Pawn);
            board.put(6, file, Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board.reset_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            repetition_counts: RepetitionTable::new(),
            history: Vec::new(),
        }
    }

    fn put(&mut self, rank: usize, file: usize, color: Color, piece: Piece) {
        if let Some(sq) = Square::new(rank, file) {
            self.set_piece(sq, color, piece);
        }
    }

    /// Recompute the hash from scratch and restart repetition tracking.
    pub(crate) fn reset_hash(&mut self) {
        self.hash = self.calculate_hash();
        self.repetition_counts = RepetitionTable::new();
        self.repetition_counts.set(self.hash, 1);
    }

    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }
        hash ^ ZOBRIST.castling(self.castling_rights) ^ ZOBRIST.en_passant(self.en_passant_target)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        if let Some((old_color, old_piece)) = self.squares[sq.index()] {
            self.hash ^= ZOBRIST.piece(old_color, old_piece, sq);
        }
        self.squares[sq.index()] = Some((color, piece));
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let removed = self.squares[sq.index()].take();
        if let Some((color, piece)) = removed {
            self.hash ^= ZOBRIST.piece(color, piece, sq);
        }
        removed
    }

    /// Color and type of the piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves played on this board, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().map(|(mv, _)| mv)
    }

    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Fifty-move rule, threefold repetition or insufficient material.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= 100
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
    }

    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_counts.get(self.hash) >= 3
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on the same square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut light_bishops = 0;
        let mut dark_bishops = 0;

        for sq in Square::all() {
            match self.piece_at(sq) {
                Some((_, Piece::Pawn | Piece::Rook | Piece::Queen)) => return false,
                Some((_, Piece::Knight)) => {
                    minors += 1;
                    knights += 1;
                }
                Some((_, Piece::Bishop)) => {
                    minors += 1;
                    if sq.is_light() {
                        light_bishops += 1;
                    } else {
                        dark_bishops += 1;
                    }
                }
                Some((_, Piece::King)) | None => {}
            }
        }

        if minors <= 1 {
            return true;
        }
        knights == 0 && (light_bishops == 0 || dark_bishops == 0)
    }

    /// The same position seen from the other side: every piece is rotated
    /// 180 degrees and changes color, and the other side is to move.
    ///
    /// Castling rights are dropped because the kings no longer stand on
    /// their castling squares. History is not carried over.
    #[must_use]
    pub fn rotated(&self) -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                board.set_piece(sq.rotate(), color.opponent(), piece);
            }
        }
        board.side_to_move = self.side_to_move.opponent();
        board.en_passant_target = self.en_passant_target.map(Square::rotate);
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number;
        board.reset_hash();
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// ASCII diagram, rank 8 at the top, uppercase for White.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = Square::new(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
