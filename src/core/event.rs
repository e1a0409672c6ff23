//! Events emitted to the presentation layer.
//!
//! The controller queues these as sessions progress; a presentation drains
//! the queue after each dispatch or clock advance and reacts (score pop-ups,
//! completion screen).

use serde::{Deserialize, Serialize};

use super::{GameVariant, SessionId};

/// Something the presentation may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A session started (or restarted).
    Started {
        session: SessionId,
        variant: GameVariant,
    },
    /// Points were awarded or deducted.
    ///
    /// `delta` is what the game asked for; `score` is the total after
    /// clamping at zero.
    ScoreChanged {
        session: SessionId,
        delta: i64,
        score: u32,
    },
    /// The session reached its terminal state.
    Completed {
        session: SessionId,
        variant: GameVariant,
        score: u32,
    },
}

impl GameEvent {
    /// Session the event belongs to.
    #[must_use]
    pub fn session(&self) -> SessionId {
        match self {
            GameEvent::Started { session, .. }
            | GameEvent::ScoreChanged { session, .. }
            | GameEvent::Completed { session, .. } => *session,
        }
    }
}
