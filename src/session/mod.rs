//! Session lifecycle, scoring and presentation views.

pub mod controller;
pub mod snapshot;

pub use controller::SessionController;
pub use snapshot::{SessionSnapshot, SessionStatus, SessionSummary, SummaryStats};
