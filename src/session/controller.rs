//! Session controller: the single owner of game state.
//!
//! ## Responsibilities
//!
//! - Start, replay and exit sessions
//! - Route player actions into the active game
//! - Apply each game `Transition`: score (clamped at zero), timers,
//!   completion
//! - Drive deferred transitions from a virtual clock
//! - Queue events for the presentation layer
//!
//! ## Timers
//!
//! The controller keeps the `TimerId` of every pending timer, grouped by
//! kind, and cancels through those handles when a game asks for it. All
//! pending timers are dropped whenever a session starts, ends or is exited.
//! As a second line, every timer carries the id of the session that
//! scheduled it and is discarded if that session is no longer live when it
//! comes due.

use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::snapshot::{SessionSnapshot, SessionStatus, SessionSummary};
use crate::content::ContentPool;
use crate::core::{EngineConfig, GameEvent, GameRng, GameVariant, Result, Score, SessionId};
use crate::games::{Game, PlayerAction};
use crate::rules::{Deferred, Transition};
use crate::timer::{Scheduler, TimerId};

/// One play-through of a single variant.
#[derive(Clone, Debug)]
struct GameSession {
    id: SessionId,
    variant: GameVariant,
    score: Score,
    status: SessionStatus,
    game: Game,
    /// Forked per session; used for in-game reshuffles.
    rng: GameRng,
}

/// Owns the active session and mediates every change to it.
///
/// ## Example
///
/// ```
/// use chem_games::{EngineConfig, GameVariant, PlayerAction, SessionController, SessionStatus};
///
/// let mut controller = SessionController::new(EngineConfig::default().with_seed(7)).unwrap();
/// controller.start(GameVariant::FillBlank).unwrap();
///
/// let answer = controller.game().unwrap().as_fill_blank().unwrap()
///     .current_blank().unwrap().correct_answer.clone();
/// controller.dispatch(&PlayerAction::FillIn { text: answer });
/// assert_eq!(controller.score(), 100);
///
/// // Feedback delay, then the next blank
/// controller.advance(1200);
/// assert_eq!(controller.game().unwrap().as_fill_blank().unwrap().current_index(), 1);
/// assert_eq!(controller.status(), SessionStatus::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct SessionController {
    config: Arc<EngineConfig>,
    pool: Arc<ContentPool>,
    rng: GameRng,
    scheduler: Scheduler<Deferred>,
    /// Handles of pending timers, by kind.
    handles: FxHashMap<Deferred, SmallVec<[TimerId; 2]>>,
    next_session: SessionId,
    session: Option<GameSession>,
    events: VecDeque<GameEvent>,
}

impl SessionController {
    /// Create a controller over the built-in chemistry content.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_pool(config, ContentPool::chemistry())
    }

    /// Create a controller over a custom content pool.
    ///
    /// The pool is checked per variant when a session starts.
    pub fn with_pool(config: EngineConfig, pool: ContentPool) -> Result<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            config: Arc::new(config),
            pool: Arc::new(pool),
            rng,
            scheduler: Scheduler::new(),
            handles: FxHashMap::default(),
            next_session: SessionId::new(1),
            session: None,
            events: VecDeque::new(),
        })
    }

    // === Lifecycle ===

    /// Start a new session of `variant`, discarding any current one.
    ///
    /// On error the current session (if any) is left untouched.
    pub fn start(&mut self, variant: GameVariant) -> Result<SessionId> {
        let mut rng = self.rng.fork();
        let game = Game::new(variant, &self.pool, &mut rng, Arc::clone(&self.config))?;

        self.clear_timers();
        self.events.clear();

        let id = self.next_session;
        self.next_session = id.next();
        info!("{id}: starting {variant} (seed {})", rng.seed());

        self.session = Some(GameSession {
            id,
            variant,
            score: Score::zero(),
            status: SessionStatus::InProgress,
            game,
            rng,
        });
        self.events.push_back(GameEvent::Started { session: id, variant });

        let step = match self.session.as_mut() {
            Some(session) => session.game.on_start(),
            None => Transition::none(),
        };
        self.apply_transition(step);
        Ok(id)
    }

    /// Start a session over a different content pool.
    ///
    /// The pool replaces the current one for later sessions too.
    pub fn start_with_pool(
        &mut self,
        variant: GameVariant,
        pool: ContentPool,
    ) -> Result<SessionId> {
        let previous = std::mem::replace(&mut self.pool, Arc::new(pool));
        let started = self.start(variant);
        if started.is_err() {
            self.pool = previous;
        }
        started
    }

    /// Start a session from a variant name such as `"speed-quiz"`.
    pub fn start_named(&mut self, name: &str) -> Result<SessionId> {
        let variant = name.parse::<GameVariant>()?;
        self.start(variant)
    }

    /// Start over with `variant` and a fresh random sample.
    pub fn reset(&mut self, variant: GameVariant) -> Result<SessionId> {
        self.start(variant)
    }

    /// Start over with the current variant. `Ok(None)` if nothing is running.
    pub fn replay(&mut self) -> Result<Option<SessionId>> {
        match self.variant() {
            Some(variant) => self.start(variant).map(Some),
            None => Ok(None),
        }
    }

    /// Abandon the current session and go back to game selection.
    pub fn exit(&mut self) {
        if let Some(session) = self.session.take() {
            info!("{}: exited {} with score {}", session.id, session.variant, session.score);
        }
        self.clear_timers();
    }

    // === Scoring ===

    /// Add `points` to the score, clamping at zero.
    pub fn apply_delta(&mut self, points: i64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if session.score.apply(points) {
            warn!("{}: score clamped at {} after delta {points}", session.id, session.score);
        }
        self.events.push_back(GameEvent::ScoreChanged {
            session: session.id,
            delta: points,
            score: session.score.value(),
        });
    }

    /// Mark the session complete. Idempotent.
    pub fn mark_complete(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.status == SessionStatus::Complete {
            return;
        }

        session.status = SessionStatus::Complete;
        info!("{}: {} complete with score {}", session.id, session.variant, session.score);
        self.events.push_back(GameEvent::Completed {
            session: session.id,
            variant: session.variant,
            score: session.score.value(),
        });
        self.clear_timers();
    }

    // === Input and time ===

    /// Route a player action into the active game.
    ///
    /// Ignored when no session is in progress or the action belongs to
    /// another variant.
    pub fn dispatch(&mut self, action: &PlayerAction) {
        let step = match self.session.as_mut() {
            Some(session) if session.status == SessionStatus::InProgress => {
                session.game.apply(action, &mut session.rng)
            }
            _ => {
                debug!("no session in progress, ignoring {action:?}");
                return;
            }
        };
        self.apply_transition(step);
    }

    /// Move the virtual clock forward, firing every timer that comes due.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let target = self.scheduler.now_ms().saturating_add(elapsed_ms);

        while let Some(fired) = self.scheduler.pop_due(target) {
            self.forget_handle(fired.payload, fired.id);
            let step = match self.session.as_mut() {
                Some(session)
                    if session.id == fired.session
                        && session.status == SessionStatus::InProgress =>
                {
                    debug!("{}: {:?} fired at {}ms", session.id, fired.payload, fired.due_ms);
                    session.game.on_timer(fired.payload)
                }
                _ => {
                    warn!("dropping stale {:?} from {}", fired.payload, fired.session);
                    continue;
                }
            };
            self.apply_transition(step);
        }

        self.scheduler.advance_to(target);
    }

    /// Deadline of the next pending timer, for presentations that sleep.
    #[must_use]
    pub fn next_timer_due(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    fn apply_transition(&mut self, step: Transition) {
        let Some(id) = self.session.as_ref().map(|s| s.id) else {
            return;
        };

        for deferred in &step.cancel {
            let Some(timers) = self.handles.remove(deferred) else {
                continue;
            };
            for timer in timers {
                if self.scheduler.cancel(timer) {
                    debug!("{id}: cancelled {timer} ({deferred:?})");
                }
            }
        }
        for &(delay_ms, deferred) in &step.schedule {
            let timer = self.scheduler.schedule(id, delay_ms, deferred);
            self.handles.entry(deferred).or_default().push(timer);
            debug!("{id}: {timer} {deferred:?} in {delay_ms}ms");
        }

        if step.delta != 0 {
            self.apply_delta(step.delta);
        }
        if step.completed {
            self.mark_complete();
        }
    }

    fn clear_timers(&mut self) {
        self.scheduler.clear();
        self.handles.clear();
    }

    fn forget_handle(&mut self, deferred: Deferred, timer: TimerId) {
        if let Some(timers) = self.handles.get_mut(&deferred) {
            timers.retain(|t| *t != timer);
            if timers.is_empty() {
                self.handles.remove(&deferred);
            }
        }
    }

    // === Views ===

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.as_ref().map_or(SessionStatus::Selecting, |s| s.status)
    }

    /// Current score (0 when no session).
    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.score.value())
    }

    /// Variant being played.
    #[must_use]
    pub fn variant(&self) -> Option<GameVariant> {
        self.session.as_ref().map(|s| s.variant)
    }

    /// Id of the live session.
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// State of the game being played.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.session.as_ref().map(|s| &s.game)
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Content pool sessions sample from.
    #[must_use]
    pub fn pool(&self) -> &ContentPool {
        &self.pool
    }

    /// Virtual clock, in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.session_id(),
            variant: self.variant(),
            score: self.score(),
            status: self.status(),
            now_ms: self.scheduler.now_ms(),
            game: self.game().cloned(),
        }
    }

    /// Summary for the completion screen, once the session is complete.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        let session = self.session.as_ref()?;
        if session.status != SessionStatus::Complete {
            return None;
        }
        Some(SessionSummary {
            session: session.id,
            variant: session.variant,
            score: session.score.value(),
            stats: session.game.stats(),
        })
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}
