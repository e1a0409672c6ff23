//! Read-only views handed to the presentation layer.
//!
//! A snapshot is taken on every render. Game state lives in `im`
//! persistent collections, so cloning it here is cheap.

use serde::{Deserialize, Serialize};

use crate::core::{GameVariant, SessionId};
use crate::games::Game;

/// Lifecycle of the controller's current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No game running; the player is choosing one.
    #[default]
    Selecting,
    InProgress,
    Complete,
}

/// Everything a presentation needs to draw the current frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: Option<SessionId>,
    pub variant: Option<GameVariant>,
    pub score: u32,
    pub status: SessionStatus,
    /// Virtual clock, in milliseconds.
    pub now_ms: u64,
    pub game: Option<Game>,
}

/// Variant-specific end-of-game numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum SummaryStats {
    Matching { matched: usize, total: usize },
    Memory { moves: u32, pairs: usize },
    Sorting { title: String, items: usize },
    SpeedQuiz { correct: usize, total: usize },
    FillBlank { correct: usize, total: usize },
}

/// Terminal summary for the completion screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session: SessionId,
    pub variant: GameVariant,
    pub score: u32,
    pub stats: SummaryStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status() {
        assert_eq!(SessionStatus::default(), SessionStatus::Selecting);
    }

    #[test]
    fn test_summary_serde() {
        let summary = SessionSummary {
            session: SessionId::new(3),
            variant: GameVariant::Memory,
            score: 600,
            stats: SummaryStats::Memory { moves: 7, pairs: 4 },
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["stats"]["variant"], "Memory");
        assert_eq!(json["stats"]["moves"], 7);

        let back: SessionSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }
}
