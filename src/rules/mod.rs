//! Contract between game machines and the session controller.
//!
//! Games implement `MiniGame` and report every step as a `Transition`.
//! The controller calls into games but never interprets game-specific
//! state directly.

pub mod engine;
pub mod transition;

pub use engine::MiniGame;
pub use transition::{Deferred, Transition};
