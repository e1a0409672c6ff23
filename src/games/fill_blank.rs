//! Fill-in-the-blank, presented in curated order.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::content::Blank;
use crate::core::{EngineConfig, GameVariant};
use crate::rules::{Deferred, MiniGame, Transition};
use crate::session::SummaryStats;

/// Fill-in-the-blank state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FillBlankGame {
    #[serde(skip)]
    config: Arc<EngineConfig>,
    blanks: Vector<Blank>,
    current: usize,
    selected: Option<String>,
    checked: bool,
    correct_count: usize,
}

impl FillBlankGame {
    /// Create a game over `blanks`, in the order given.
    pub fn new(blanks: Vec<Blank>, config: Arc<EngineConfig>) -> Self {
        Self {
            config,
            blanks: blanks.into_iter().collect(),
            current: 0,
            selected: None,
            checked: false,
            correct_count: 0,
        }
    }

    /// All blanks in order.
    #[must_use]
    pub fn blanks(&self) -> &Vector<Blank> {
        &self.blanks
    }

    /// Index of the current blank.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The blank being shown, `None` once the game is over.
    #[must_use]
    pub fn current_blank(&self) -> Option<&Blank> {
        self.blanks.get(self.current)
    }

    /// The answer picked for the current blank.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the current blank has been answered.
    #[must_use]
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Whether the picked answer is correct. `None` until answered.
    #[must_use]
    pub fn is_selected_correct(&self) -> Option<bool> {
        let blank = self.current_blank()?;
        let selected = self.selected.as_deref()?;
        Some(selected == blank.correct_answer)
    }

    /// Blanks answered correctly so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Answer the current blank.
    pub fn answer(&mut self, option: &str) -> Transition {
        let Some(blank) = self.current_blank() else {
            return Transition::none();
        };
        if self.checked {
            return Transition::none();
        }

        let correct = option == blank.correct_answer;
        self.selected = Some(option.to_string());
        self.checked = true;

        let step = Transition::none().after(
            self.config.delays.fill_blank_advance_ms,
            Deferred::AdvanceBlank,
        );
        if correct {
            self.correct_count += 1;
            step.award(self.config.points.fill_blank)
        } else {
            step
        }
    }

    fn advance(&mut self) -> Transition {
        if !self.checked {
            return Transition::none();
        }

        self.current += 1;
        self.selected = None;
        self.checked = false;

        if self.is_complete() {
            self.current = self.blanks.len();
            Transition::none().complete()
        } else {
            Transition::none()
        }
    }
}

impl MiniGame for FillBlankGame {
    fn variant(&self) -> GameVariant {
        GameVariant::FillBlank
    }

    fn on_timer(&mut self, deferred: Deferred) -> Transition {
        match deferred {
            Deferred::AdvanceBlank => self.advance(),
            _ => Transition::none(),
        }
    }

    fn is_complete(&self) -> bool {
        self.current >= self.blanks.len()
    }

    fn stats(&self) -> SummaryStats {
        SummaryStats::FillBlank {
            correct: self.correct_count,
            total: self.blanks.len(),
        }
    }
}
