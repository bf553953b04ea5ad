//! Challenge engine errors.

use thiserror::Error;

/// Errors from catalog loading and progression operations.
#[derive(Debug, Error)]
pub enum ChallengeError {
    /// `!hint` or `!skip` with nothing active.
    #[error("No active challenge. Type !tutorial to start.")]
    NoActiveChallenge,

    #[error("Unknown category: {name}. Available categories: {}", .known.join(", "))]
    UnknownCategory { name: String, known: Vec<String> },

    #[error("Category '{0}' has no challenges")]
    EmptyCategory(String),

    #[error("failed to parse challenge catalog '{category}'")]
    Catalog {
        category: String,
        #[source]
        source: serde_json::Error,
    },
}
