use std::env;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use chess_opponent::{Board, Difficulty, Opponent};

const USAGE: &str = "usage: chess_opponent [easy|medium|hard] [FEN] [--think-ms N]";

struct Args {
    difficulty: Difficulty,
    fen: Option<String>,
    think_ms: u64,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut difficulty = None;
    let mut fen_parts: Vec<&str> = Vec::new();
    let mut think_ms = 0;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--think-ms" => {
                let value = iter.next().ok_or("--think-ms needs a value")?;
                think_ms = value
                    .parse()
                    .map_err(|_| format!("invalid --think-ms value '{value}'"))?;
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            text if difficulty.is_none() && fen_parts.is_empty() && !text.contains('/') => {
                difficulty = Some(text.parse::<Difficulty>().map_err(|e| e.to_string())?);
            }
            text => fen_parts.push(text),
        }
    }

    Ok(Args {
        difficulty: difficulty.unwrap_or_default(),
        fen: (!fen_parts.is_empty()).then(|| fen_parts.join(" ")),
        think_ms,
    })
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let mut board = match args.fen.as_deref() {
        Some(fen) => match Board::try_from_fen(fen) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Board::new(),
    };

    if args.think_ms > 0 {
        thread::sleep(Duration::from_millis(args.think_ms));
    }

    let mut opponent = Opponent::new();
    match opponent.select_move(&mut board, args.difficulty) {
        Some(mv) => {
            println!("{}", mv.san());
            if let Err(err) = board.apply(&mv) {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
            println!("{}", board.to_fen());
        }
        None => println!("none"),
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn defaults_to_medium_from_the_start() {
        let parsed = parse_args(&[]).unwrap();
        assert_eq!(parsed.difficulty, Difficulty::Medium);
        assert!(parsed.fen.is_none());
        assert_eq!(parsed.think_ms, 0);
    }

    #[test]
    fn difficulty_fen_and_delay() {
        let parsed = parse_args(&args(&[
            "hard",
            "4k3/8/8/8/8/8/8/4K3",
            "w",
            "-",
            "-",
            "--think-ms",
            "250",
        ]))
        .unwrap();
        assert_eq!(parsed.difficulty, Difficulty::Hard);
        assert_eq!(parsed.fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w - -"));
        assert_eq!(parsed.think_ms, 250);
    }

    #[test]
    fn fen_without_difficulty() {
        let parsed = parse_args(&args(&["4k3/8/8/8/8/8/8/4K3", "b", "-", "-"])).unwrap();
        assert_eq!(parsed.difficulty, Difficulty::Medium);
        assert_eq!(parsed.fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 b - -"));
    }

    #[test]
    fn rejects_unknown_difficulty_and_bad_delay() {
        assert!(parse_args(&args(&["expert"])).is_err());
        assert!(parse_args(&args(&["--think-ms", "soon"])).is_err());
        assert!(parse_args(&args(&["--think-ms"])).is_err());
    }
}
