//! Edge case tests for special chess positions and moves.

use crate::board::{Board, Color, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_underpromotions_are_generated_queen_first() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<Option<Piece>> = board
        .generate_moves()
        .iter()
        .filter(|m| m.is_promotion())
        .map(|m| m.promotion())
        .collect();
    assert_eq!(
        promotions,
        [
            Some(Piece::Queen),
            Some(Piece::Rook),
            Some(Piece::Bishop),
            Some(Piece::Knight)
        ]
    );
}

#[test]
fn test_en_passant_only_right_after_double_push() {
    let mut board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    board.apply_san("d5").unwrap();
    assert!(board.generate_moves().iter().any(|m| m.san() == "exd6"));

    board.apply_san("Kd2").unwrap();
    board.apply_san("Ke7").unwrap();
    assert!(board.generate_moves().iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_en_passant_cannot_expose_king() {
    // Capturing en passant would clear the fifth rank between rook and king.
    let mut board = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    assert!(board.generate_moves().iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_castling_blocked_by_check() {
    let mut board = Board::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    assert!(board.generate_moves().iter().all(|m| !m.is_castling()));
}

#[test]
fn test_castling_through_attacked_square() {
    // The f8 rook covers f1, so only the long castle remains.
    let mut board = Board::from_fen("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let castles: Vec<String> = board
        .generate_moves()
        .iter()
        .filter(|m| m.is_castling())
        .map(|m| m.san().to_string())
        .collect();
    assert_eq!(castles, ["O-O-O"]);
}

#[test]
fn test_castling_needs_the_rook() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1");
    assert!(board.generate_moves().iter().all(|m| !m.is_castling()));
}

#[test]
fn test_double_check_only_king_can_move() {
    let mut board = Board::from_fen("4k3/8/8/1b6/8/8/3r4/3K4 w - - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.from() == sq("d1")));
}

#[test]
fn test_rotated_swaps_sides() {
    let board = Board::from_fen("4k3/8/8/8/8/8/4P3/R3K3 w Q - 0 1");
    let rotated = board.rotated();
    assert_eq!(rotated.side_to_move(), Color::Black);
    assert_eq!(rotated.piece_at(sq("h8")), Some((Color::Black, Piece::Rook)));
    assert_eq!(rotated.piece_at(sq("d7")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(rotated.piece_at(sq("d1")), Some((Color::White, Piece::King)));
    assert_eq!(rotated.castling_rights().to_fen(), "-");
    assert_eq!(rotated.rotated().to_fen(), "4k3/8/8/8/8/8/4P3/R3K3 w - - 0 1");
}

#[test]
fn test_display_diagram() {
    let text = Board::new().to_string();
    let first = text.lines().next().unwrap();
    assert_eq!(first, "8  r n b q k b n r");
    assert!(text.ends_with("a b c d e f g h"));
}
