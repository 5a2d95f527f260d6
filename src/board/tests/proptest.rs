//! Property-based tests using proptest.

use crate::board::Board;
use crate::engine::evaluate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves from the start position.
fn random_game(seed: u64, plies: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = &moves[rng.gen_range(0..moves.len())];
        board.apply(mv).expect("generated move is legal");
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: apply followed by undo restores board state exactly
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_game(seed, num_moves);
        let snapshot = board.clone();

        let moves = board.generate_moves();
        for mv in &moves {
            board.apply(mv).unwrap();
            board.undo();
            prop_assert_eq!(&board, &snapshot);
        }
    }

    /// Property: hash is always consistent with recomputed hash
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_game(seed, num_moves);
        prop_assert_eq!(board.hash(), board.calculate_hash());
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_game(seed, num_moves);
        let fen = board.to_fen();
        let parsed = Board::from_fen(&fen);
        prop_assert_eq!(parsed.to_fen(), fen);
        prop_assert_eq!(parsed.hash(), board.hash());
    }

    /// Property: rotating the board and swapping colors negates the evaluation
    #[test]
    fn prop_rotation_negates_eval(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_game(seed, num_moves);
        prop_assert_eq!(evaluate(&board.rotated()), -evaluate(&board));
        prop_assert_eq!(evaluate(&board), evaluate(&board));
    }
}
