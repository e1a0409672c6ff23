//! Core engine types: ids, variants, score, RNG, configuration, errors, events.
//!
//! Everything here is independent of any particular mini-game.

pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod rng;
pub mod score;
pub mod variant;

pub use config::{DelayConfig, EngineConfig, PointsConfig};
pub use error::{GameError, Result};
pub use event::GameEvent;
pub use ids::{CardId, ItemId, PairId, QuestionId, SessionId};
pub use rng::GameRng;
pub use score::Score;
pub use variant::GameVariant;
