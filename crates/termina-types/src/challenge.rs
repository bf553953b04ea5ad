//! Challenge records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How hard a challenge is meant to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        };
        f.write_str(s)
    }
}

/// A scripted task with acceptance criteria and scaffolding.
///
/// Field names on the wire are camelCase to match the catalog documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub level: u32,
    pub scenario: String,
    /// Acceptable command strings, matched case-insensitively by equality or prefix.
    pub expected_commands: Vec<String>,
    pub hints: Vec<String>,
    pub xp_reward: u64,
    /// Position of the challenge within its category.
    pub order_index: u32,
}

impl Challenge {
    /// Check a submitted command line against `expected_commands`.
    ///
    /// The trimmed input matches if, ignoring case, it equals an expected
    /// command or starts with one. The first match wins.
    pub fn accepts(&self, command: &str) -> bool {
        let normalized = command.trim().to_lowercase();
        self.expected_commands.iter().any(|expected| {
            let expected = expected.to_lowercase();
            normalized == expected || normalized.starts_with(&expected)
        })
    }

    /// The terminal hint message once every hint has been shown.
    pub fn answer_summary(&self) -> String {
        format!(
            "No more hints available. Expected commands: {}",
            self.expected_commands.join(" or ")
        )
    }
}
