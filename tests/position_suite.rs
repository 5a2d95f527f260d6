use serde::Deserialize;

use chess_opponent::{Board, Difficulty, Opponent};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    #[serde(default)]
    legal_moves: Option<usize>,
    difficulties: Vec<String>,
    /// `any`, `none`, or the SAN of the only acceptable move
    expect: String,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn fixture_positions_parse() {
    for position in load().positions {
        let mut board = Board::try_from_fen(&position.fen)
            .unwrap_or_else(|e| panic!("{}: {e}", position.name));
        if let Some(count) = position.legal_moves {
            assert_eq!(
                board.generate_moves().len(),
                count,
                "legal move count for {}",
                position.name
            );
        }
    }
}

#[test]
fn opponent_position_suite() {
    let mut opponent = Opponent::seeded(7);

    for position in load().positions {
        for name in &position.difficulties {
            let difficulty: Difficulty = name.parse().expect("bad difficulty in fixture");
            let mut board = Board::from_fen(&position.fen);
            let before = board.clone();
            let legal = board.generate_moves();

            let chosen = opponent.select_move(&mut board, difficulty);
            assert_eq!(board, before, "{} at {difficulty} left the board changed", position.name);

            match position.expect.as_str() {
                "none" => assert!(
                    chosen.is_none(),
                    "{} at {difficulty}: expected no move, got {:?}",
                    position.name,
                    chosen
                ),
                "any" => {
                    let mv = chosen.unwrap_or_else(|| panic!("{}: no move", position.name));
                    assert!(legal.contains(&mv), "{}: {mv} is not legal", position.name);
                }
                san => {
                    let mv = chosen.unwrap_or_else(|| panic!("{}: no move", position.name));
                    assert_eq!(mv.san(), san, "{} at {difficulty}", position.name);
                }
            }
        }
    }
}
