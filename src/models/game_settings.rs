use chess::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::game::utils::{color_from_str, color_to_process_arg, color_to_string};

/// Reasons a start-game request is rejected before anything is launched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Missing required parameter: {0}")]
    Missing(&'static str),

    #[error("Invalid difficulty '{0}': expected a level from 0 to 4")]
    InvalidDifficulty(String),

    #[error("Invalid color '{0}': expected 'white' or 'black'")]
    InvalidColor(String),
}

/// AI strength, passed unchanged to the game process as its skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Beginner = 0,
    Easy = 1,
    Intermediate = 2,
    Hard = 3,
    Impossible = 4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Intermediate,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.get(usize::from(level)).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
            Difficulty::Impossible => "Impossible",
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ParamError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| ParamError::InvalidDifficulty(level.to_string()))
    }
}

impl FromStr for Difficulty {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_level)
            .ok_or_else(|| ParamError::InvalidDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// The side the human plays in the launched game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 2] = [PlayerColor::White, PlayerColor::Black];

    pub fn label(self) -> &'static str {
        match self {
            PlayerColor::White => "White",
            PlayerColor::Black => "Black",
        }
    }

    /// Value of the game process's `--color` flag
    pub fn process_arg(self) -> &'static str {
        color_to_process_arg(self.into())
    }
}

impl From<PlayerColor> for Color {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::White => Color::White,
            PlayerColor::Black => Color::Black,
        }
    }
}

impl From<Color> for PlayerColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => PlayerColor::White,
            Color::Black => PlayerColor::Black,
        }
    }
}

impl FromStr for PlayerColor {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        color_from_str(s)
            .map(PlayerColor::from)
            .ok_or_else(|| ParamError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&color_to_string((*self).into()))
    }
}

/// A complete, validated game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub color: PlayerColor,
}

impl GameSettings {
    pub fn new(difficulty: Difficulty, color: PlayerColor) -> Self {
        GameSettings { difficulty, color }
    }

    /// Validate raw query parameters. Both must be present and in range.
    pub fn from_params(difficulty: Option<&str>, color: Option<&str>) -> Result<Self, ParamError> {
        let difficulty = difficulty
            .filter(|d| !d.trim().is_empty())
            .ok_or(ParamError::Missing("difficulty"))?
            .parse::<Difficulty>()?;
        let color = color
            .filter(|c| !c.trim().is_empty())
            .ok_or(ParamError::Missing("color"))?
            .parse::<PlayerColor>()?;
        Ok(GameSettings { difficulty, color })
    }

    /// Flags understood by the game program
    pub fn process_args(&self) -> Vec<String> {
        vec![
            "--skill".to_string(),
            self.difficulty.level().to_string(),
            "--color".to_string(),
            self.color.process_arg().to_string(),
        ]
    }
}

/// Choices made on one settings page; each category holds at most one value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub difficulty: Option<Difficulty>,
    pub color: Option<PlayerColor>,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    pub fn complete(&self) -> Option<GameSettings> {
        Some(GameSettings::new(self.difficulty?, self.color?))
    }
}
