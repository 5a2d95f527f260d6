//! Move ordering for alpha-beta.
//!
//! Ordering only changes how fast the search prunes, never its result.

use std::cmp::Reverse;

use crate::board::{Move, Piece};

pub const CAPTURE_BASE: i32 = 10_000;
pub const QUEEN_PROMOTION_BONUS: i32 = 9_000;
pub const MINOR_PROMOTION_BONUS: i32 = 4_000;
pub const CHECK_BONUS: i32 = 2_000;
pub const CASTLE_BONUS: i32 = 500;

/// Ordering score of a move; higher is searched first.
///
/// Captures use MVV-LVA (most valuable victim, least valuable attacker).
/// Promotions, checks and castling add flat bonuses on top.
#[must_use]
pub fn score_move(m: &Move) -> i32 {
    let mut score = 0;

    if let Some(victim) = m.captured() {
        score += CAPTURE_BASE + 10 * victim.value() - m.piece().value();
    }

    match m.promotion() {
        Some(Piece::Queen) => score += QUEEN_PROMOTION_BONUS,
        Some(_) => score += MINOR_PROMOTION_BONUS,
        None => {}
    }

    if m.gives_check() {
        score += CHECK_BONUS;
    }

    if m.is_castling() {
        score += CASTLE_BONUS;
    }

    score
}

/// Sort best-first. Equal scores keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|m| Reverse(score_move(m)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn find(moves: &[Move], san: &str) -> Move {
        moves
            .iter()
            .find(|m| m.san() == san)
            .cloned()
            .unwrap_or_else(|| panic!("{san} not generated"))
    }

    #[test]
    fn pawn_takes_queen_beats_queen_takes_pawn() {
        let mut board = Board::from_fen("4k3/8/8/3q4/2P1p3/8/8/3QK3 w - - 0 1");
        let mut white = board.generate_moves();
        let pxq = find(&white, "cxd5");
        assert_eq!(score_move(&pxq), CAPTURE_BASE + 9000 - 100);

        board.apply(&find(&white, "Qd2")).unwrap();
        let black = board.generate_moves();
        let qxp = find(&black, "Qxc4");
        assert!(score_move(&pxq) > score_move(&qxp));

        order_moves(&mut white);
        assert_eq!(white[0].san(), "cxd5");
    }

    #[test]
    fn promotions_and_checks() {
        let mut board = Board::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1");
        let moves = board.generate_moves();
        let queen = find(&moves, "a8=Q+");
        let knight = find(&moves, "a8=N");
        assert_eq!(score_move(&queen), QUEEN_PROMOTION_BONUS + CHECK_BONUS);
        assert_eq!(score_move(&knight), MINOR_PROMOTION_BONUS);
    }

    #[test]
    fn castling_bonus() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let moves = board.generate_moves();
        assert_eq!(score_move(&find(&moves, "O-O")), CASTLE_BONUS);
        assert_eq!(score_move(&find(&moves, "Kd1")), 0);
    }

    #[test]
    fn ties_keep_generation_order() {
        let mut board = Board::new();
        let generated = board.generate_moves();
        let mut ordered = generated.clone();
        order_moves(&mut ordered);
        assert_eq!(ordered, generated);
    }
}
