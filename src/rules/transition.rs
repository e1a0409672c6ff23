//! What a game machine hands back after each action or timer.
//!
//! Games never touch the score, the clock, or the event queue directly.
//! They describe the consequences of a step in a `Transition` and the
//! controller applies it.

use smallvec::SmallVec;

/// Deferred transitions a game can ask the controller to schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deferred {
    /// Matching: clear the wrong-match highlight.
    ClearWrongMatch,
    /// Memory: resolve the two face-up cards.
    ResolveMemoryTurn,
    /// Sorting: finish after the solved order has been shown.
    CompleteSorting,
    /// Speed quiz: one countdown second elapsed.
    QuizTick,
    /// Speed quiz: move to the next question.
    AdvanceQuestion,
    /// Fill-in-the-blank: move to the next blank.
    AdvanceBlank,
}

/// Consequences of one step of a game machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Points to add (negative to deduct).
    pub delta: i64,
    /// The game reached its terminal state.
    pub completed: bool,
    /// Timers to start: `(delay_ms, what)`.
    pub schedule: SmallVec<[(u64, Deferred); 2]>,
    /// Pending timers to cancel, matched by kind.
    pub cancel: SmallVec<[Deferred; 2]>,
}

impl Transition {
    /// A step with no consequences (the action was a no-op).
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Award (or deduct) points.
    #[must_use]
    pub fn award(mut self, points: i64) -> Self {
        self.delta += points;
        self
    }

    /// Signal completion.
    #[must_use]
    pub fn complete(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Schedule a deferred transition.
    #[must_use]
    pub fn after(mut self, delay_ms: u64, deferred: Deferred) -> Self {
        self.schedule.push((delay_ms, deferred));
        self
    }

    /// Cancel pending timers of a kind.
    #[must_use]
    pub fn cancel(mut self, deferred: Deferred) -> Self {
        self.cancel.push(deferred);
        self
    }

    /// Check if the step changed nothing the controller has to act on.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.delta == 0 && !self.completed && self.schedule.is_empty() && self.cancel.is_empty()
    }
}
