//! The five mini-game machines and the sum type over them.
//!
//! - `matching`: pair terms with definitions
//! - `memory`: find term/definition pairs among face-down cards
//! - `sorting`: put a curated set in order
//! - `speed_quiz`: timed multiple choice with a speed bonus
//! - `fill_blank`: complete sentences in curated order

pub mod action;
pub mod fill_blank;
pub mod matching;
pub mod memory;
pub mod sorting;
pub mod speed_quiz;

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::content::ContentPool;
use crate::core::{EngineConfig, GameError, GameRng, GameVariant, Result};
use crate::rules::{Deferred, MiniGame, Transition};
use crate::session::SummaryStats;

pub use action::PlayerAction;
pub use fill_blank::FillBlankGame;
pub use matching::MatchingGame;
pub use memory::{Card, CardRole, MemoryGame};
pub use sorting::SortingGame;
pub use speed_quiz::{QuizAnswer, SpeedQuizGame};

/// State of whichever game a session is playing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "variant", content = "state")]
pub enum Game {
    Matching(MatchingGame),
    Memory(MemoryGame),
    Sorting(SortingGame),
    SpeedQuiz(SpeedQuizGame),
    FillBlank(FillBlankGame),
}

impl Game {
    /// Sample content for `variant` and build its initial state.
    ///
    /// Fails if the pool cannot populate the game.
    pub fn new(
        variant: GameVariant,
        pool: &ContentPool,
        rng: &mut GameRng,
        config: Arc<EngineConfig>,
    ) -> Result<Self> {
        pool.require(variant, &config)?;

        let game = match variant {
            GameVariant::Matching => {
                let pairs = rng.sample(&pool.pairs, config.matching_pairs);
                Game::Matching(MatchingGame::new(pairs, config))
            }
            GameVariant::Memory => {
                let pairs = rng.sample(&pool.pairs, config.memory_pairs);
                Game::Memory(MemoryGame::new(&pairs, rng, config))
            }
            GameVariant::Sorting => {
                let set = rng.choose(&pool.sorting_sets).ok_or(GameError::InsufficientContent {
                    variant,
                    required: 1,
                    available: 0,
                })?;
                Game::Sorting(SortingGame::new(set, rng, config))
            }
            GameVariant::SpeedQuiz => {
                let questions = rng.sample(&pool.questions, config.quiz_questions);
                Game::SpeedQuiz(SpeedQuizGame::new(questions, config))
            }
            GameVariant::FillBlank => {
                Game::FillBlank(FillBlankGame::new(pool.blanks.clone(), config))
            }
        };
        Ok(game)
    }

    fn machine(&self) -> &dyn MiniGame {
        match self {
            Game::Matching(g) => g,
            Game::Memory(g) => g,
            Game::Sorting(g) => g,
            Game::SpeedQuiz(g) => g,
            Game::FillBlank(g) => g,
        }
    }

    fn machine_mut(&mut self) -> &mut dyn MiniGame {
        match self {
            Game::Matching(g) => g,
            Game::Memory(g) => g,
            Game::Sorting(g) => g,
            Game::SpeedQuiz(g) => g,
            Game::FillBlank(g) => g,
        }
    }

    /// Route a player action to the game.
    ///
    /// Actions meant for another variant are ignored.
    pub fn apply(&mut self, action: &PlayerAction, rng: &mut GameRng) -> Transition {
        match (self, action) {
            (Game::Matching(g), PlayerAction::SelectTerm { pair }) => g.select_term(*pair),
            (Game::Matching(g), PlayerAction::SelectDefinition { pair }) => {
                g.select_definition(*pair)
            }
            (Game::Memory(g), PlayerAction::Flip { card }) => g.flip(*card),
            (Game::Sorting(g), PlayerAction::MoveItem { item, to }) => g.move_item(*item, *to),
            (Game::Sorting(g), PlayerAction::Check) => g.check(),
            (Game::Sorting(g), PlayerAction::Reshuffle) => g.reset(rng),
            (Game::SpeedQuiz(g), PlayerAction::Answer { option }) => g.answer_option(*option),
            (Game::SpeedQuiz(g), PlayerAction::Timeout) => g.timeout(),
            (Game::FillBlank(g), PlayerAction::FillIn { text }) => g.answer(text),
            (game, action) => {
                debug!(
                    "{} action dispatched to {} game, ignoring",
                    action.variant(),
                    game.variant()
                );
                Transition::none()
            }
        }
    }

    /// Variant of the game.
    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.machine().variant()
    }

    /// Timers to start when the session begins.
    pub fn on_start(&mut self) -> Transition {
        self.machine_mut().on_start()
    }

    /// Apply a deferred transition.
    pub fn on_timer(&mut self, deferred: Deferred) -> Transition {
        self.machine_mut().on_timer(deferred)
    }

    /// Check if the game has reached its terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.machine().is_complete()
    }

    /// End-of-game statistics.
    #[must_use]
    pub fn stats(&self) -> SummaryStats {
        self.machine().stats()
    }

    /// The matching game, if that is what is being played.
    #[must_use]
    pub fn as_matching(&self) -> Option<&MatchingGame> {
        match self {
            Game::Matching(g) => Some(g),
            _ => None,
        }
    }

    /// The memory game, if that is what is being played.
    #[must_use]
    pub fn as_memory(&self) -> Option<&MemoryGame> {
        match self {
            Game::Memory(g) => Some(g),
            _ => None,
        }
    }

    /// The sorting game, if that is what is being played.
    #[must_use]
    pub fn as_sorting(&self) -> Option<&SortingGame> {
        match self {
            Game::Sorting(g) => Some(g),
            _ => None,
        }
    }

    /// The speed quiz, if that is what is being played.
    #[must_use]
    pub fn as_speed_quiz(&self) -> Option<&SpeedQuizGame> {
        match self {
            Game::SpeedQuiz(g) => Some(g),
            _ => None,
        }
    }

    /// The fill-in-the-blank game, if that is what is being played.
    #[must_use]
    pub fn as_fill_blank(&self) -> Option<&FillBlankGame> {
        match self {
            Game::FillBlank(g) => Some(g),
            _ => None,
        }
    }
}
