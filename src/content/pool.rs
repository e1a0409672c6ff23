//! Validated content pool.
//!
//! A `ContentPool` bundles everything the five games draw from. It is
//! checked once when a session starts so a game never begins
//! under-populated or with an unanswerable prompt.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::item::{Blank, ContentPair, Question, SortingSet, OPTION_COUNT};
use crate::core::{EngineConfig, GameError, GameVariant, Result};

/// Static, read-only content for every game variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPool {
    /// Term/definition pairs (matching, memory).
    pub pairs: Vec<ContentPair>,
    /// Curated orderable sets (sorting).
    pub sorting_sets: Vec<SortingSet>,
    /// Multiple-choice questions (speed quiz).
    pub questions: Vec<Question>,
    /// Sentences with a gap, in presentation order (fill-in-the-blank).
    pub blanks: Vec<Blank>,
}

impl ContentPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair.
    #[must_use]
    pub fn with_pair(mut self, pair: ContentPair) -> Self {
        self.pairs.push(pair);
        self
    }

    /// Add a sorting set.
    #[must_use]
    pub fn with_sorting_set(mut self, set: SortingSet) -> Self {
        self.sorting_sets.push(set);
        self
    }

    /// Add a question.
    #[must_use]
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Add a blank.
    #[must_use]
    pub fn with_blank(mut self, blank: Blank) -> Self {
        self.blanks.push(blank);
        self
    }

    /// Parse a pool from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let pool: Self =
            serde_json::from_str(json).map_err(|e| GameError::MalformedContent(e.to_string()))?;
        pool.validate()?;
        Ok(pool)
    }

    /// Check every structural invariant of the pool.
    ///
    /// Does not check sizes; see [`ContentPool::require`].
    pub fn validate(&self) -> Result<()> {
        self.validate_pairs()?;
        self.validate_sorting_sets()?;
        self.validate_questions()?;
        self.validate_blanks()
    }

    /// Check that the pool can populate `variant` under `config`.
    pub fn require(&self, variant: GameVariant, config: &EngineConfig) -> Result<()> {
        let (required, available) = match variant {
            GameVariant::Matching => {
                self.validate_pairs()?;
                (config.matching_pairs, self.pairs.len())
            }
            GameVariant::Memory => {
                self.validate_pairs()?;
                (config.memory_pairs, self.pairs.len())
            }
            GameVariant::Sorting => {
                self.validate_sorting_sets()?;
                (1, self.sorting_sets.len())
            }
            GameVariant::SpeedQuiz => {
                self.validate_questions()?;
                (config.quiz_questions, self.questions.len())
            }
            GameVariant::FillBlank => {
                self.validate_blanks()?;
                (1, self.blanks.len())
            }
        };

        if available < required {
            return Err(GameError::InsufficientContent {
                variant,
                required,
                available,
            });
        }
        Ok(())
    }

    fn validate_pairs(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for pair in &self.pairs {
            if !seen.insert(pair.id) {
                return Err(GameError::MalformedContent(format!("duplicate pair id {}", pair.id)));
            }
        }
        Ok(())
    }

    fn validate_sorting_sets(&self) -> Result<()> {
        for set in &self.sorting_sets {
            if set.items.len() < 2 {
                return Err(GameError::MalformedContent(format!(
                    "sorting set {:?} needs at least 2 items",
                    set.title
                )));
            }

            let mut ids = FxHashSet::default();
            let mut orders = vec![false; set.items.len()];
            for item in &set.items {
                if !ids.insert(item.id) {
                    return Err(GameError::MalformedContent(format!(
                        "sorting set {:?} repeats {}",
                        set.title, item.id
                    )));
                }
                match orders.get_mut(item.correct_order) {
                    Some(slot) if !*slot => *slot = true,
                    _ => {
                        return Err(GameError::MalformedContent(format!(
                            "sorting set {:?} has bad correct_order {} for {}",
                            set.title, item.correct_order, item.id
                        )))
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_questions(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(GameError::MalformedContent(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
            if question.correct_index >= OPTION_COUNT {
                return Err(GameError::MalformedContent(format!(
                    "{} has correct_index {} out of range",
                    question.id, question.correct_index
                )));
            }
        }
        Ok(())
    }

    fn validate_blanks(&self) -> Result<()> {
        for blank in &self.blanks {
            if !blank.options.contains(&blank.correct_answer) {
                return Err(GameError::MalformedContent(format!(
                    "blank {:?} does not offer its answer {:?}",
                    blank.sentence, blank.correct_answer
                )));
            }
        }
        Ok(())
    }
}
