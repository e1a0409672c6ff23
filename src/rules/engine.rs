//! Behaviour shared by every mini-game machine.
//!
//! Each game exposes its own typed actions (`select_term`, `flip`, ...);
//! this trait covers what the controller needs regardless of variant:
//! - Timers to start when the session begins
//! - How deferred transitions modify state
//! - Completion detection and end-of-game stats

use super::transition::{Deferred, Transition};
use crate::core::GameVariant;
use crate::session::SummaryStats;

/// A single mini-game state machine.
///
/// ## Implementation Notes
///
/// - Every method must be deterministic given the same inputs.
/// - A timer the game no longer expects (its state moved on) must return
///   `Transition::none()` rather than panic.
/// - `is_complete` must become `true` in the same step that returns a
///   transition with `completed` set.
pub trait MiniGame {
    /// Which variant this machine implements.
    fn variant(&self) -> GameVariant;

    /// Timers to start when the session begins.
    fn on_start(&mut self) -> Transition {
        Transition::none()
    }

    /// Apply a deferred transition that came due.
    fn on_timer(&mut self, deferred: Deferred) -> Transition;

    /// Check if the game has reached its terminal state.
    fn is_complete(&self) -> bool;

    /// Variant-specific statistics for the end-of-game summary.
    fn stats(&self) -> SummaryStats;
}
