//! Session score with floor-at-zero clamping.

use serde::{Deserialize, Serialize};

/// Score of a single session.
///
/// Deltas may be negative (matching penalty) but the total never drops
/// below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    /// A zero score.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Current value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Add `delta`, clamping the result at zero.
    ///
    /// Returns `true` if the clamp kicked in.
    pub fn apply(&mut self, delta: i64) -> bool {
        let raw = i64::from(self.0) + delta;
        let clamped = raw.clamp(0, i64::from(u32::MAX));
        self.0 = clamped as u32;
        clamped != raw
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
