//! Difficulty levels.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How hard the opponent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    /// Uniformly random legal move
    Easy,
    /// Two-ply search
    #[default]
    Medium,
    /// Three-ply search
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search depth in plies, or `None` for random play.
    #[must_use]
    pub const fn depth(self) -> Option<u8> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Hard => Some(3),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for unknown difficulty names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyError {
    pub name: String,
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown difficulty '{}', expected easy, medium or hard",
            self.name
        )
    }
}

impl std::error::Error for DifficultyError {}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DifficultyError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_table() {
        assert_eq!(Difficulty::Easy.depth(), None);
        assert_eq!(Difficulty::Medium.depth(), Some(2));
        assert_eq!(Difficulty::Hard.depth(), Some(3));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn parse_and_display() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("expert"));
    }
}
