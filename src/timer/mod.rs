//! Deferred transitions on a virtual clock.
//!
//! Replaces ad-hoc timeouts and intervals with an explicit queue whose
//! entries can be cancelled by handle, and which are tagged
//! with the session that created them.

pub mod scheduler;

pub use scheduler::{Fired, Scheduler, TimerId};
