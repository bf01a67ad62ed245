//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::training_engine::error::QuizError;

pub const DEFAULT_TOTAL_QUESTIONS: usize = 10;
pub const DEFAULT_STREAK_THRESHOLD: u32 = 3;

fn default_total_questions() -> usize {
    DEFAULT_TOTAL_QUESTIONS
}

fn default_streak_threshold() -> u32 {
    DEFAULT_STREAK_THRESHOLD
}

/// Settings for a [`QuizSession`](crate::training_engine::session::QuizSession).
///
/// Every field has a serde default, so `{}` is a valid document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions per session.
    #[serde(default = "default_total_questions")]
    pub total_questions: usize,
    /// Streak length at which the streak badge becomes visible.
    #[serde(default = "default_streak_threshold")]
    pub streak_threshold: u32,
    /// Fixed seed for reproducible sessions; entropy when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            streak_threshold: DEFAULT_STREAK_THRESHOLD,
            rng_seed: None,
        }
    }
}

impl QuizConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(s: &str) -> Result<Self, QuizError> {
        let config: QuizConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.total_questions == 0 {
            return Err(QuizError::InvalidConfig(
                "total_questions must be at least 1".to_string(),
            ));
        }
        if self.streak_threshold == 0 {
            return Err(QuizError::InvalidConfig(
                "streak_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
