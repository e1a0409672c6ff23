//! The closed set of mini-game kinds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// One of the five mini-game kinds offered by the game center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    Matching,
    Memory,
    Sorting,
    SpeedQuiz,
    FillBlank,
}

impl GameVariant {
    /// Every variant, in menu order.
    pub const ALL: [GameVariant; 5] = [
        GameVariant::Matching,
        GameVariant::Memory,
        GameVariant::Sorting,
        GameVariant::SpeedQuiz,
        GameVariant::FillBlank,
    ];

    /// Menu title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            GameVariant::Matching => "Match the Pairs",
            GameVariant::Memory => "Memory Challenge",
            GameVariant::Sorting => "Sort It Out",
            GameVariant::SpeedQuiz => "Speed Quiz",
            GameVariant::FillBlank => "Fill the Blank",
        }
    }

    /// One-line menu description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            GameVariant::Matching => "Connect terms with their definitions",
            GameVariant::Memory => "Find matching pairs by memory",
            GameVariant::Sorting => "Arrange items in correct order",
            GameVariant::SpeedQuiz => "Answer fast for bonus points!",
            GameVariant::FillBlank => "Complete the sentence",
        }
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameVariant::Matching => "Matching",
            GameVariant::Memory => "Memory",
            GameVariant::Sorting => "Sorting",
            GameVariant::SpeedQuiz => "SpeedQuiz",
            GameVariant::FillBlank => "FillBlank",
        };
        f.write_str(name)
    }
}

impl FromStr for GameVariant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "matching" => Ok(GameVariant::Matching),
            "memory" => Ok(GameVariant::Memory),
            "sorting" => Ok(GameVariant::Sorting),
            "speedquiz" => Ok(GameVariant::SpeedQuiz),
            "fillblank" => Ok(GameVariant::FillBlank),
            _ => Err(GameError::InvalidVariant(s.to_string())),
        }
    }
}
