//! Notation attached to generated moves.

use crate::board::Board;

fn sans(fen: &str) -> Vec<String> {
    Board::from_fen(fen)
        .generate_moves()
        .iter()
        .map(|m| m.san().to_string())
        .collect()
}

#[test]
fn test_pawn_and_knight_moves() {
    let moves = sans("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(moves.len(), 20);
    for expected in ["e4", "e3", "a3", "Nf3", "Nc3", "Na3", "Nh3"] {
        assert!(moves.iter().any(|m| m == expected), "{expected} missing");
    }
}

#[test]
fn test_captures() {
    let moves = sans("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2");
    assert!(moves.iter().any(|m| m == "exd5"));
}

#[test]
fn test_castling() {
    let moves = sans("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(moves.iter().any(|m| m == "O-O"));
    assert!(moves.iter().any(|m| m == "O-O-O"));
}

#[test]
fn test_promotion() {
    let moves = sans("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    for expected in ["a8=Q", "a8=R", "a8=B", "a8=N"] {
        assert!(moves.iter().any(|m| m == expected), "{expected} missing");
    }
}

#[test]
fn test_file_disambiguation() {
    let moves = sans("4k3/8/8/8/8/8/4K3/R6R w - - 0 1");
    assert!(moves.iter().any(|m| m == "Rad1"));
    assert!(moves.iter().any(|m| m == "Rhf1"));
    assert!(moves.iter().any(|m| m == "Ra7"));
}

#[test]
fn test_rank_disambiguation() {
    let moves = sans("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1");
    assert!(moves.iter().any(|m| m == "R5a3"));
    assert!(moves.iter().any(|m| m == "R1a3"));
}

#[test]
fn test_check_and_mate_markers() {
    let moves = sans("6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1");
    assert!(moves.iter().any(|m| m == "Re8#"));
    assert!(moves.iter().any(|m| m == "Re7"));

    let moves = sans("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert!(moves.iter().any(|m| m == "Ra8+"));
}

#[test]
fn test_apply_san_accepts_missing_suffix() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1");
    let mv = board.apply_san("Re8").unwrap();
    assert_eq!(mv.san(), "Re8#");
    assert!(board.is_checkmate());
}
