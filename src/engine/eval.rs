//! Static position evaluation.
//!
//! Scores are centipawns from White's point of view: positive favors White.
//! The evaluator reads the position through [`BoardView`] only and never
//! mutates it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Piece, Square};
use crate::rules::BoardView;

use super::tables::pst_value;

/// Evaluator weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalParams {
    /// Per reachable square for knights, bishops, rooks and queens
    pub mobility_weight: i32,
    pub bishop_pair_bonus: i32,
    /// Rook on a file with no pawns at all
    pub rook_open_file_bonus: i32,
    /// Rook on a file with only enemy pawns
    pub rook_semi_open_file_bonus: i32,
    /// Friendly pawn in front of a king on its home rank
    pub king_shield_bonus: i32,
    /// Empty square in front of a king on its home rank
    pub king_open_file_penalty: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            mobility_weight: 5,
            bishop_pair_bonus: 50,
            rook_open_file_bonus: 25,
            rook_semi_open_file_bonus: 10,
            king_shield_bonus: 20,
            king_open_file_penalty: 25,
        }
    }
}

/// Evaluation split into its terms, each already signed for White.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub piece_square: i32,
    pub mobility: i32,
    pub rook_files: i32,
    pub bishop_pair: i32,
    pub king_safety: i32,
}

impl EvalBreakdown {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.material
            + self.piece_square
            + self.mobility
            + self.rook_files
            + self.bishop_pair
            + self.king_safety
    }
}

/// Facts gathered on the first pass and consumed by the file and king terms.
#[derive(Default)]
struct Census {
    pawns_on_file: [[u8; 8]; 2],
    bishops: [u8; 2],
    rooks: [Vec<Square>; 2],
    kings: [Option<Square>; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    params: EvalParams,
}

impl Evaluator {
    #[must_use]
    pub fn new(params: EvalParams) -> Self {
        Evaluator { params }
    }

    #[must_use]
    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    /// Score `pos` in centipawns, positive for White.
    pub fn evaluate<B: BoardView + ?Sized>(&self, pos: &B) -> i32 {
        self.breakdown(pos).total()
    }

    /// Score `pos` term by term.
    pub fn breakdown<B: BoardView + ?Sized>(&self, pos: &B) -> EvalBreakdown {
        let mut out = EvalBreakdown::default();
        let mut census = Census::default();
        let mut mobility = [0i32; 2];

        for sq in Square::all() {
            let Some((color, piece)) = pos.piece_at(sq) else {
                continue;
            };
            let sign = color.sign();
            let side = color.index();

            out.material += sign * piece.value();
            out.piece_square += sign * pst_value(color, piece, sq);

            match piece {
                Piece::Pawn => census.pawns_on_file[side][sq.file()] += 1,
                Piece::Bishop => census.bishops[side] += 1,
                Piece::Rook => census.rooks[side].push(sq),
                Piece::King => census.kings[side] = Some(sq),
                Piece::Knight | Piece::Queen => {}
            }

            if piece != Piece::Pawn && piece != Piece::King {
                mobility[side] += mobility_count(pos, sq, color, piece);
            }
        }

        out.mobility = self.params.mobility_weight * (mobility[0] - mobility[1]);

        for color in Color::BOTH {
            let side = color.index();
            let sign = color.sign();

            for rook in &census.rooks[side] {
                let file = rook.file();
                if census.pawns_on_file[side][file] != 0 {
                    continue;
                }
                let bonus = if census.pawns_on_file[color.opponent().index()][file] == 0 {
                    self.params.rook_open_file_bonus
                } else {
                    self.params.rook_semi_open_file_bonus
                };
                out.rook_files += sign * bonus;
            }

            if census.bishops[side] >= 2 {
                out.bishop_pair += sign * self.params.bishop_pair_bonus;
            }

            if let Some(king) = census.kings[side] {
                out.king_safety += sign * self.king_shelter(pos, king, color);
            }
        }

        out
    }

    /// Pawn cover on the three files around a king still on its home rank.
    fn king_shelter<B: BoardView + ?Sized>(&self, pos: &B, king: Square, color: Color) -> i32 {
        if king.rank() != color.back_rank() {
            return 0;
        }

        let mut score = 0;
        for df in -1..=1 {
            let Some(front) = king.offset(color.pawn_direction(), df) else {
                continue;
            };
            match pos.piece_at(front) {
                Some((c, Piece::Pawn)) if c == color => score += self.params.king_shield_bonus,
                None => score -= self.params.king_open_file_penalty,
                Some(_) => {}
            }
        }
        score
    }
}

/// Pseudo-mobility: squares a piece could move to, ignoring pins and checks.
fn mobility_count<B: BoardView + ?Sized>(pos: &B, from: Square, color: Color, piece: Piece) -> i32 {
    let mut count = 0;

    if !piece.is_slider() {
        for &(dr, df) in piece.offsets() {
            if let Some(to) = from.offset(dr, df) {
                if pos.piece_at(to).map_or(true, |(c, _)| c != color) {
                    count += 1;
                }
            }
        }
        return count;
    }

    for &(dr, df) in piece.offsets() {
        let mut current = from;
        while let Some(to) = current.offset(dr, df) {
            match pos.piece_at(to) {
                None => count += 1,
                Some((c, _)) => {
                    if c != color {
                        count += 1;
                    }
                    break;
                }
            }
            current = to;
        }
    }
    count
}

/// Evaluate with the default weights.
pub fn evaluate<B: BoardView + ?Sized>(pos: &B) -> i32 {
    Evaluator::default().evaluate(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn start_position_is_balanced() {
        let board = Board::new();
        let terms = Evaluator::default().breakdown(&board);
        assert_eq!(terms.material, 0);
        assert_eq!(terms.piece_square, 0);
        assert_eq!(terms.mobility, 0);
        assert_eq!(terms.king_safety, 0);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn start_position_mobility_is_knights_only() {
        let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        // Each side: two knights with two squares each.
        assert_eq!(mobility_count(&board, "b1".parse().unwrap(), Color::White, Piece::Knight), 2);
        assert_eq!(mobility_count(&board, "c1".parse().unwrap(), Color::White, Piece::Bishop), 0);
    }

    #[test]
    fn slider_counts_enemy_blocker_once() {
        let board = Board::from_fen("4k3/8/8/8/8/8/r7/R3K3 w - - 0 1");
        // a1 rook: up to a2 (enemy), right to b1, c1, d1 (stops before own king).
        assert_eq!(mobility_count(&board, "a1".parse().unwrap(), Color::White, Piece::Rook), 4);
    }

    #[test]
    fn extra_queen_is_worth_material() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        let terms = Evaluator::default().breakdown(&board);
        assert_eq!(terms.material, 900);
        assert!(evaluate(&board) > 800);
    }

    #[test]
    fn bishop_pair_is_rewarded() {
        let pair = Board::from_fen("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1");
        let terms = Evaluator::default().breakdown(&pair);
        assert_eq!(terms.bishop_pair, 50);

        let single = Board::from_fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1");
        assert_eq!(Evaluator::default().breakdown(&single).bishop_pair, 0);
    }

    #[test]
    fn rook_file_bonuses() {
        // White rook on an open file, Black rook on a file with only a White pawn.
        let board = Board::from_fen("3rk3/8/8/8/8/8/3P4/R3K3 w - - 0 1");
        let terms = Evaluator::default().breakdown(&board);
        assert_eq!(terms.rook_files, 25 - 10);
    }

    #[test]
    fn king_shelter_counts_pawns_and_holes() {
        let params = EvalParams::default();
        // White king g1 with f2, g2, h2 intact; Black king e8 with nothing in front.
        let board = Board::from_fen("4k3/8/8/8/8/8/5PPP/6K1 w - - 0 1");
        let terms = Evaluator::new(params).breakdown(&board);
        assert_eq!(
            terms.king_safety,
            3 * params.king_shield_bonus + 3 * params.king_open_file_penalty
        );
    }

    #[test]
    fn king_off_home_rank_gets_no_shelter_score() {
        let board = Board::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1");
        assert_eq!(Evaluator::default().breakdown(&board).king_safety, 0);
    }

    #[test]
    fn rotated_position_negates_score() {
        let board = Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
        assert_eq!(evaluate(&board.rotated()), -evaluate(&board));
    }

    #[test]
    fn custom_weights_change_the_score() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1");
        let base = Evaluator::default().evaluate(&board);
        let heavier = Evaluator::new(EvalParams {
            bishop_pair_bonus: 150,
            ..EvalParams::default()
        })
        .evaluate(&board);
        assert_eq!(heavier - base, 100);
    }
}
