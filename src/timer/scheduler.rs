//! Virtual-clock timer queue.
//!
//! Deferred transitions ("clear the wrong-match highlight in 600 ms",
//! "next question in 1 s", the quiz countdown tick) are scheduled here
//! instead of on a real clock. `schedule` hands back a `TimerId` that the
//! owner keeps to cancel that one timer later. The owner advances time explicitly, which
//! keeps every session deterministic and testable.
//!
//! ## Ordering
//!
//! Entries are keyed by `(due_ms, sequence)`: earlier deadlines fire first,
//! and entries with the same deadline fire in the order they were scheduled.
//!
//! ## Session guard
//!
//! Every entry records the `SessionId` that created it. The scheduler does
//! not interpret it; the controller compares it against the live session
//! when the entry fires and drops stale ones.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::SessionId;

/// Cancellation handle for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    session: SessionId,
    payload: T,
}

/// A timer that came due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub session: SessionId,
    pub due_ms: u64,
    pub payload: T,
}

/// Deterministic timer queue driven by an explicit clock.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), Entry<T>>,
    /// TimerId -> queue key, for O(log n) cancellation.
    index: FxHashMap<TimerId, (u64, u64)>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Schedule `payload` to fire `delay_ms` from now.
    pub fn schedule(&mut self, session: SessionId, delay_ms: u64, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;

        let id = TimerId(seq);
        let key = (self.now_ms.saturating_add(delay_ms), seq);
        self.queue.insert(key, Entry { session, payload });
        self.index.insert(id, key);
        id
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Drop every pending timer. The clock is not reset.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.index.clear();
    }

    /// Pop the earliest timer due at or before `until_ms`.
    ///
    /// Moves the clock to that timer's deadline, so anything it schedules
    /// is relative to when it fired rather than to `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired<T>> {
        let &(due, seq) = self.queue.keys().next()?;
        if due > until_ms {
            return None;
        }

        let entry = self.queue.remove(&(due, seq))?;
        let id = TimerId(seq);
        self.index.remove(&id);
        self.now_ms = self.now_ms.max(due);

        Some(Fired {
            id,
            session: entry.session,
            due_ms: due,
            payload: entry.payload,
        })
    }

    /// Move the clock forward to `target_ms` without firing anything.
    ///
    /// Callers drain `pop_due(target_ms)` first. Never moves backwards.
    pub fn advance_to(&mut self, target_ms: u64) {
        self.now_ms = self.now_ms.max(target_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: SessionId = SessionId::new(1);

    fn drain(sched: &mut Scheduler<&'static str>, until: u64) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Some(fired) = sched.pop_due(until) {
            out.push(fired.payload);
        }
        sched.advance_to(until);
        out
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut sched = Scheduler::new();
        sched.schedule(S, 1000, "late");
        sched.schedule(S, 500, "early");
        sched.schedule(S, 750, "middle");

        assert_eq!(sched.next_due(), Some(500));
        assert_eq!(drain(&mut sched, 2000), vec!["early", "middle", "late"]);
        assert!(sched.is_empty());
        assert_eq!(sched.now_ms(), 2000);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut sched = Scheduler::new();
        sched.schedule(S, 100, "a");
        sched.schedule(S, 100, "b");
        sched.schedule(S, 100, "c");

        assert_eq!(drain(&mut sched, 100), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut sched = Scheduler::new();
        sched.schedule(S, 600, "clear");

        assert!(drain(&mut sched, 599).is_empty());
        assert_eq!(sched.len(), 1);
        assert_eq!(drain(&mut sched, 600), vec!["clear"]);
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut sched = Scheduler::new();
        sched.advance_to(1000);
        sched.schedule(S, 500, "x");
        assert_eq!(sched.next_due(), Some(1500));
    }

    #[test]
    fn test_pop_moves_clock_to_deadline() {
        let mut sched = Scheduler::new();
        sched.schedule(S, 300, "x");

        let fired = sched.pop_due(10_000).unwrap();
        assert_eq!(fired.due_ms, 300);
        assert_eq!(fired.session, S);
        assert_eq!(sched.now_ms(), 300);
    }

    #[test]
    fn test_cancel() {
        let mut sched = Scheduler::new();
        let keep = sched.schedule(S, 100, "keep");
        let dropped = sched.schedule(S, 100, "drop");

        assert!(sched.cancel(dropped));
        assert!(!sched.cancel(dropped));
        assert_eq!(drain(&mut sched, 100), vec!["keep"]);
        assert!(!sched.cancel(keep));
    }

    #[test]
    fn test_clear_keeps_clock() {
        let mut sched = Scheduler::new();
        sched.advance_to(42);
        sched.schedule(S, 1, "x");
        sched.clear();

        assert!(sched.is_empty());
        assert_eq!(sched.now_ms(), 42);
    }
}
