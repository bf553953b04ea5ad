//! Records exchanged with an optional persistence collaborator.
//!
//! The kernel only emits these; it never reads them back and does not depend
//! on how a sink stores them.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Aggregate profile of the session user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub total_commands: u64,
    /// Running success percentage, 0..=100.
    pub avg_accuracy: f64,
    /// Running average in characters per minute.
    pub avg_typing_speed: f64,
    pub level: u64,
    pub total_xp: u64,
}

/// An achievement definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// What the requirement counts, e.g. `challenges_completed`.
    pub requirement_type: String,
    pub requirement_value: u64,
}

/// A badge earned by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeAward {
    pub username: String,
    pub badge_id: String,
    pub earned_at: DateTime<Local>,
}

/// One executed (non-meta) command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub command: String,
    pub success: bool,
    pub typing_speed: f64,
    pub accuracy: f64,
    /// Active challenge when the command ran.
    pub challenge_id: Option<String>,
    pub executed_at: DateTime<Local>,
}

/// Per-challenge progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeProgress {
    pub challenge_id: String,
    pub completed: bool,
    /// Successful commands submitted while the challenge was active.
    pub attempts: u32,
    /// Seconds from presentation to completion.
    pub best_time: Option<f64>,
    pub completed_at: Option<DateTime<Local>>,
}
