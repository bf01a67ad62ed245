//! Error types for the configuration surface.
//!
//! Question generation, scoring and simplification never fail; only parsing
//! caller-supplied settings and kind tags can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A question kind tag did not match any known kind.
    #[error("unknown question kind: {0}")]
    UnknownKind(String),

    /// The configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
