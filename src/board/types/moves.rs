//! Move type and move flags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

const FLAG_CASTLE_KINGSIDE: u8 = 1 << 0;
const FLAG_CASTLE_QUEENSIDE: u8 = 1 << 1;
const FLAG_EN_PASSANT: u8 = 1 << 2;
const FLAG_DOUBLE_PAWN: u8 = 1 << 3;

/// Special-move flags carried by a [`Move`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const CASTLE_KINGSIDE: MoveFlags = MoveFlags(FLAG_CASTLE_KINGSIDE);
    pub const CASTLE_QUEENSIDE: MoveFlags = MoveFlags(FLAG_CASTLE_QUEENSIDE);
    pub const EN_PASSANT: MoveFlags = MoveFlags(FLAG_EN_PASSANT);
    pub const DOUBLE_PAWN_PUSH: MoveFlags = MoveFlags(FLAG_DOUBLE_PAWN);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A legal move together with the metadata the engine orders and filters on.
///
/// Moves are produced by the board's generator and never modified afterwards.
/// `san` is the Standard Algebraic Notation of the move in the position it
/// was generated from, ending in `+` or `#` when the move gives check or mate.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    promotion: Option<Piece>,
    captured: Option<Piece>,
    flags: MoveFlags,
    san: String,
}

impl Move {
    pub(crate) fn new(
        from: Square,
        to: Square,
        piece: Piece,
        promotion: Option<Piece>,
        captured: Option<Piece>,
        flags: MoveFlags,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            promotion,
            captured,
            flags,
            san: String::new(),
        }
    }

    pub(crate) fn set_san(&mut self, san: String) {
        self.san = san;
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The piece being moved (a pawn for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    /// The captured piece type, if any (a pawn for en passant)
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> MoveFlags {
        self.flags
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.flags.contains(MoveFlags::CASTLE_KINGSIDE)
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(&self) -> bool {
        self.flags.contains(MoveFlags::CASTLE_QUEENSIDE)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.is_castle_kingside() || self.is_castle_queenside()
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(&self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_PAWN_PUSH)
    }

    /// Standard Algebraic Notation, e.g. "Nf3", "exd6", "O-O", "e8=Q#"
    #[inline]
    #[must_use]
    pub fn san(&self) -> &str {
        &self.san
    }

    /// True when the notation carries a check or checkmate marker
    #[inline]
    #[must_use]
    pub fn gives_check(&self) -> bool {
        self.san.ends_with(['+', '#'])
    }

    /// True when the notation carries a checkmate marker
    #[inline]
    #[must_use]
    pub fn is_mate(&self) -> bool {
        self.san.ends_with('#')
    }

    /// Same from/to/promotion, ignoring notation and metadata
    #[inline]
    #[must_use]
    pub(crate) fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.to_char())?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if !self.san.is_empty() {
            write!(f, " {}", self.san)?;
        }
        write!(f, ")")
    }
}

/// Long algebraic (UCI) form, e.g. "e2e4", "e7e8q"
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
