//! Engine error types.
//!
//! Only session setup can fail. Player interactions that make no sense in
//! the current state (flipping a third card, re-answering a question) are
//! no-ops, never errors.

use thiserror::Error;

use super::GameVariant;

/// Errors raised when configuring or starting a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Unknown game variant name.
    #[error("invalid game variant: {0:?}")]
    InvalidVariant(String),

    /// The content pool cannot populate the requested game.
    #[error("{variant} needs {required} content items, pool has {available}")]
    InsufficientContent {
        variant: GameVariant,
        required: usize,
        available: usize,
    },

    /// Content that breaks a pool invariant (duplicate ids, bad option lists).
    #[error("malformed content: {0}")]
    MalformedContent(String),

    /// Engine configuration that cannot be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidVariant("chess".into());
        assert_eq!(err.to_string(), "invalid game variant: \"chess\"");

        let err = GameError::InsufficientContent {
            variant: GameVariant::Matching,
            required: 6,
            available: 2,
        };
        assert_eq!(err.to_string(), "Matching needs 6 content items, pool has 2");
    }
}
