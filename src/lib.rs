//! # chem-games
//!
//! Game-state engine for a chemistry-education game center.
//!
//! ## Design Principles
//!
//! 1. **One owner**: All mutable state lives in a `SessionController`.
//!    Games never touch score, clock or events directly; they return a
//!    `Transition` describing what should happen.
//!
//! 2. **Deterministic**: Sampling and shuffling go through a seeded
//!    `GameRng`, and time is a virtual clock advanced by the caller.
//!
//! 3. **No-op over error**: Player input that makes no sense in the current
//!    state is ignored. Only session setup can fail.
//!
//! ## Modules
//!
//! - `core`: ids, variants, score, RNG, configuration, errors, events
//! - `content`: static content units, pool validation, built-in library
//! - `rules`: the `MiniGame` trait and `Transition`
//! - `games`: the five game machines and the `Game` sum type
//! - `timer`: virtual-clock scheduler with cancellation
//! - `session`: the controller, snapshots and summaries

pub mod content;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    CardId, DelayConfig, EngineConfig, GameError, GameEvent, GameRng, GameVariant, ItemId, PairId,
    PointsConfig, QuestionId, Result, Score, SessionId,
};

pub use crate::content::{Blank, ContentPair, ContentPool, Question, SortItem, SortingSet};

pub use crate::rules::{Deferred, MiniGame, Transition};

pub use crate::games::{
    Card, CardRole, FillBlankGame, Game, MatchingGame, MemoryGame, PlayerAction, QuizAnswer,
    SortingGame, SpeedQuizGame,
};

pub use crate::timer::{Scheduler, TimerId};

pub use crate::session::{
    SessionController, SessionSnapshot, SessionStatus, SessionSummary, SummaryStats,
};
