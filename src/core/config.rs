//! Engine configuration.
//!
//! Every constant a game machine uses (sample sizes, point values, feedback
//! delays, quiz countdown) lives here so presentations can tune them and
//! tests can shorten them. Defaults match the game center as shipped.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Point values awarded (or deducted) by the game machines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// Correct term/definition match.
    pub correct_match: i64,
    /// Deducted on a wrong match (stored positive).
    pub wrong_match_penalty: i64,
    /// Memory pair found.
    pub memory_pair: i64,
    /// Sorting set solved.
    pub sorting_solved: i64,
    /// Speed-quiz points per remaining second.
    pub quiz_per_second: i64,
    /// Correct fill-in-the-blank answer.
    pub fill_blank: i64,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            correct_match: 100,
            wrong_match_penalty: 25,
            memory_pair: 150,
            sorting_solved: 200,
            quiz_per_second: 10,
            fill_blank: 100,
        }
    }
}

/// Feedback delays before a deferred transition fires, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    /// Wrong-match highlight duration.
    pub wrong_match_ms: u64,
    /// Two matching memory cards stay face-up this long.
    pub memory_match_ms: u64,
    /// Two mismatched memory cards stay face-up this long.
    pub memory_mismatch_ms: u64,
    /// Solved sorting set is shown this long before completion.
    pub sorting_complete_ms: u64,
    /// Answer feedback before the next quiz question.
    pub quiz_advance_ms: u64,
    /// Answer feedback before the next blank.
    pub fill_blank_advance_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            wrong_match_ms: 600,
            memory_match_ms: 500,
            memory_mismatch_ms: 1000,
            sorting_complete_ms: 1500,
            quiz_advance_ms: 1000,
            fill_blank_advance_ms: 1200,
        }
    }
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the controller RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Pairs sampled for a matching game.
    pub matching_pairs: usize,

    /// Pairs sampled for a memory game (two cards each).
    pub memory_pairs: usize,

    /// Questions sampled for a speed quiz.
    pub quiz_questions: usize,

    /// Seconds on the quiz countdown at the start of each question.
    pub quiz_countdown_secs: u32,

    /// Countdown tick interval in milliseconds.
    pub quiz_tick_ms: u64,

    pub points: PointsConfig,

    pub delays: DelayConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            matching_pairs: 6,
            memory_pairs: 4,
            quiz_questions: 5,
            quiz_countdown_secs: 10,
            quiz_tick_ms: 1000,
            points: PointsConfig::default(),
            delays: DelayConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of matching pairs.
    #[must_use]
    pub fn with_matching_pairs(mut self, count: usize) -> Self {
        self.matching_pairs = count;
        self
    }

    /// Set the number of memory pairs.
    #[must_use]
    pub fn with_memory_pairs(mut self, count: usize) -> Self {
        self.memory_pairs = count;
        self
    }

    /// Set the number of quiz questions.
    #[must_use]
    pub fn with_quiz_questions(mut self, count: usize) -> Self {
        self.quiz_questions = count;
        self
    }

    /// Set the quiz countdown length.
    #[must_use]
    pub fn with_quiz_countdown(mut self, secs: u32) -> Self {
        self.quiz_countdown_secs = secs;
        self
    }

    /// Replace the feedback delays.
    #[must_use]
    pub fn with_delays(mut self, delays: DelayConfig) -> Self {
        self.delays = delays;
        self
    }

    /// Replace the point values.
    #[must_use]
    pub fn with_points(mut self, points: PointsConfig) -> Self {
        self.points = points;
        self
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no game can run with.
    pub fn validate(&self) -> Result<()> {
        if self.matching_pairs == 0 {
            return Err(GameError::Config("matching_pairs must be at least 1".into()));
        }
        if self.memory_pairs == 0 {
            return Err(GameError::Config("memory_pairs must be at least 1".into()));
        }
        if self.quiz_questions == 0 {
            return Err(GameError::Config("quiz_questions must be at least 1".into()));
        }
        if self.quiz_countdown_secs == 0 {
            return Err(GameError::Config("quiz_countdown_secs must be at least 1".into()));
        }
        if self.quiz_tick_ms == 0 {
            return Err(GameError::Config("quiz_tick_ms must be positive".into()));
        }
        if self.points.wrong_match_penalty < 0 {
            return Err(GameError::Config("wrong_match_penalty is a magnitude, not a delta".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.matching_pairs, 6);
        assert_eq!(config.memory_pairs, 4);
        assert_eq!(config.quiz_questions, 5);
        assert_eq!(config.quiz_countdown_secs, 10);
        assert_eq!(config.points.correct_match, 100);
        assert_eq!(config.delays.wrong_match_ms, 600);
        assert_eq!(config.delays.fill_blank_advance_ms, 1200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_matching_pairs(3)
            .with_quiz_countdown(5);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.matching_pairs, 3);
        assert_eq!(config.quiz_countdown_secs, 5);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"seed": 9, "points": {"memory_pair": 300}}"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.points.memory_pair, 300);
        assert_eq!(config.points.correct_match, 100);
        assert_eq!(config.memory_pairs, 4);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            EngineConfig::from_json(r#"{"quiz_questions": 0}"#),
            Err(GameError::Config(_))
        ));
        assert!(matches!(EngineConfig::from_json("not json"), Err(GameError::Config(_))));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
