//! Timed multiple-choice quiz.
//!
//! Each question runs a countdown. A correct answer is worth the seconds
//! left times `quiz_per_second`; a wrong answer or an expired countdown is
//! worth nothing. The countdown tick is only pending while the current
//! question is unanswered, so a tick can never land on a stale question.

use std::sync::Arc;

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::content::Question;
use crate::core::{EngineConfig, GameVariant};
use crate::rules::{Deferred, MiniGame, Transition};
use crate::session::SummaryStats;

/// How the current question was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizAnswer {
    /// The player picked this option.
    Chosen(usize),
    /// The countdown ran out (or the player gave up).
    TimedOut,
}

/// Speed quiz state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeedQuizGame {
    #[serde(skip)]
    config: Arc<EngineConfig>,
    questions: Vector<Question>,
    /// Equals `questions.len()` once the quiz is over.
    current: usize,
    remaining_secs: u32,
    answer: Option<QuizAnswer>,
    correct_count: usize,
}

impl SpeedQuizGame {
    /// Create a quiz over already-sampled questions.
    pub fn new(questions: Vec<Question>, config: Arc<EngineConfig>) -> Self {
        let remaining_secs = config.quiz_countdown_secs;
        Self {
            config,
            questions: questions.into_iter().collect(),
            current: 0,
            remaining_secs,
            answer: None,
            correct_count: 0,
        }
    }

    /// All questions in order.
    #[must_use]
    pub fn questions(&self) -> &Vector<Question> {
        &self.questions
    }

    /// Index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question being shown, `None` once the quiz is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// How the current question was resolved, if it has been.
    #[must_use]
    pub fn answer(&self) -> Option<QuizAnswer> {
        self.answer
    }

    /// Questions answered correctly so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Answer the current question.
    pub fn answer_option(&mut self, index: usize) -> Transition {
        let Some(question) = self.current_question() else {
            return Transition::none();
        };
        if self.answer.is_some() {
            debug!("speed quiz: question {} already answered", self.current);
            return Transition::none();
        }

        let correct = question.is_correct(index);
        self.answer = Some(QuizAnswer::Chosen(index));

        let mut step = self.stop_clock();
        if correct {
            self.correct_count += 1;
            step = step.award(i64::from(self.remaining_secs) * self.config.points.quiz_per_second);
        }
        step
    }

    /// Resolve the current question as timed out. Always worth 0.
    pub fn timeout(&mut self) -> Transition {
        if self.current_question().is_none() || self.answer.is_some() {
            return Transition::none();
        }
        self.answer = Some(QuizAnswer::TimedOut);
        self.stop_clock()
    }

    fn stop_clock(&self) -> Transition {
        Transition::none()
            .cancel(Deferred::QuizTick)
            .after(self.config.delays.quiz_advance_ms, Deferred::AdvanceQuestion)
    }

    fn tick(&mut self) -> Transition {
        if self.current_question().is_none() || self.answer.is_some() {
            return Transition::none();
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.timeout()
        } else {
            Transition::none().after(self.config.quiz_tick_ms, Deferred::QuizTick)
        }
    }

    fn advance(&mut self) -> Transition {
        if self.answer.is_none() {
            return Transition::none();
        }

        self.current += 1;
        self.answer = None;
        self.remaining_secs = self.config.quiz_countdown_secs;

        if self.current >= self.questions.len() {
            self.current = self.questions.len();
            Transition::none().complete()
        } else {
            Transition::none().after(self.config.quiz_tick_ms, Deferred::QuizTick)
        }
    }
}

impl MiniGame for SpeedQuizGame {
    fn variant(&self) -> GameVariant {
        GameVariant::SpeedQuiz
    }

    fn on_start(&mut self) -> Transition {
        if self.current_question().is_none() {
            return Transition::none();
        }
        Transition::none().after(self.config.quiz_tick_ms, Deferred::QuizTick)
    }

    fn on_timer(&mut self, deferred: Deferred) -> Transition {
        match deferred {
            Deferred::QuizTick => self.tick(),
            Deferred::AdvanceQuestion => self.advance(),
            _ => Transition::none(),
        }
    }

    fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    fn stats(&self) -> SummaryStats {
        SummaryStats::SpeedQuiz {
            correct: self.correct_count,
            total: self.questions.len(),
        }
    }
}
