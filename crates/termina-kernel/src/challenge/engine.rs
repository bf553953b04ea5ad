//! Challenge progression state machine.
//!
//! ```text
//!          start / switch_category
//!   Idle ───────────────────────────▶ Active(i, hint)
//!                                      │   │  skip ──▶ Active(i+1) | Exhausted
//!                                      │   └─ submit (match)
//!                                      ▼
//!                              Advancing(i+1) ──advance()──▶ Active(i+1)
//!                              or Exhausted
//! ```
//!
//! XP only grows; the level is always derived from it.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use termina_types::Challenge;
use tokio::time::Instant;
use tracing::debug;

use super::catalog::{Catalog, Category};
use super::error::ChallengeError;
use crate::stats::TypingStats;

/// XP needed per level.
pub const XP_PER_LEVEL: u64 = 100;

/// Level for a given XP total: `floor(xp / 100) + 1`.
pub fn level_for(xp: u64) -> u64 {
    xp / XP_PER_LEVEL + 1
}

/// Where the engine is in its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing started yet.
    Idle,
    /// A challenge is presented and accepting submissions.
    Active {
        index: usize,
        hint_index: usize,
        started_at: Instant,
    },
    /// Completed; `next` is waiting for its presentation delay.
    Advancing { next: usize },
    /// No challenges left in the category.
    Exhausted,
}

/// Result of `request_hint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// 1-based `number` out of `total`.
    Hint {
        number: usize,
        total: usize,
        text: String,
    },
    /// Every hint was shown; lists the expected commands instead.
    NoMoreHints(String),
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub challenge: Challenge,
    pub xp_awarded: u64,
    pub elapsed: Duration,
    pub total_xp: u64,
    pub level: u64,
    /// True if another challenge follows in this category.
    pub has_next: bool,
}

/// Snapshot for `!stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStats {
    pub xp: u64,
    pub level: u64,
    pub completed: usize,
    pub total: usize,
    pub commands: u64,
    pub avg_speed: f64,
    pub avg_accuracy: f64,
}

/// Owns the catalog cursor and the derived progression state.
#[derive(Debug, Clone)]
pub struct ChallengeEngine {
    catalog: Arc<Catalog>,
    category: String,
    state: EngineState,
    xp: u64,
    completed: HashSet<String>,
}

impl ChallengeEngine {
    /// An idle engine positioned on `category`, which must exist.
    pub fn new(catalog: Arc<Catalog>, category: &str) -> Result<Self, ChallengeError> {
        catalog.require(category)?;
        Ok(Self {
            catalog,
            category: category.to_string(),
            state: EngineState::Idle,
            xp: 0,
            completed: HashSet::new(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The selected category name.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn level(&self) -> u64 {
        level_for(self.xp)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    fn current_category(&self) -> Option<&Category> {
        self.catalog.get(&self.category)
    }

    /// The active challenge, if one is accepting submissions.
    pub fn current(&self) -> Option<&Challenge> {
        match self.state {
            EngineState::Active { index, .. } => self.current_category()?.get(index),
            _ => None,
        }
    }

    /// True while a completed challenge waits for `advance`.
    pub fn is_advancing(&self) -> bool {
        matches!(self.state, EngineState::Advancing { .. })
    }

    fn activate(&mut self, index: usize) -> Option<&Challenge> {
        let len = self.current_category().map_or(0, Category::len);
        if index < len {
            self.state = EngineState::Active {
                index,
                hint_index: 0,
                started_at: Instant::now(),
            };
            debug!(category = %self.category, index, "challenge active");
            self.current()
        } else {
            self.state = EngineState::Exhausted;
            debug!(category = %self.category, "category exhausted");
            None
        }
    }

    /// Present the first challenge of `category`.
    pub fn start(&mut self, category: &str) -> Result<&Challenge, ChallengeError> {
        let found = self.catalog.require(category)?;
        if found.is_empty() {
            return Err(ChallengeError::EmptyCategory(category.to_string()));
        }
        self.category = category.to_string();
        self.activate(0)
            .ok_or_else(|| ChallengeError::EmptyCategory(category.to_string()))
    }

    /// Select another category and restart at its first challenge.
    ///
    /// Rejected names leave the engine untouched.
    pub fn switch_category(&mut self, name: &str) -> Result<&Challenge, ChallengeError> {
        self.start(name)
    }

    /// Next hint for the active challenge.
    pub fn request_hint(&mut self) -> Result<HintOutcome, ChallengeError> {
        let EngineState::Active {
            index,
            hint_index,
            started_at,
        } = self.state
        else {
            return Err(ChallengeError::NoActiveChallenge);
        };
        let challenge = self
            .current_category()
            .and_then(|c| c.get(index))
            .ok_or(ChallengeError::NoActiveChallenge)?;

        let total = challenge.hints.len();
        let outcome = match challenge.hints.get(hint_index) {
            Some(text) => HintOutcome::Hint {
                number: hint_index + 1,
                total,
                text: text.clone(),
            },
            None => return Ok(HintOutcome::NoMoreHints(challenge.answer_summary())),
        };
        self.state = EngineState::Active {
            index,
            hint_index: hint_index + 1,
            started_at,
        };
        Ok(outcome)
    }

    /// Abandon the active challenge without XP.
    ///
    /// Returns the newly active challenge, or `None` when the category is
    /// exhausted.
    pub fn skip(&mut self) -> Result<Option<&Challenge>, ChallengeError> {
        let EngineState::Active { index, .. } = self.state else {
            return Err(ChallengeError::NoActiveChallenge);
        };
        debug!(category = %self.category, index, "challenge skipped");
        Ok(self.activate(index + 1))
    }

    /// Validate a command against the active challenge.
    ///
    /// Only successful commands count. On a match XP is awarded and the engine
    /// moves to `Advancing` (or `Exhausted` after the last challenge).
    pub fn submit(&mut self, command: &str, succeeded: bool) -> Option<Completion> {
        if !succeeded {
            return None;
        }
        let EngineState::Active {
            index, started_at, ..
        } = self.state
        else {
            return None;
        };
        let category = self.current_category()?;
        let challenge = category.get(index)?.clone();
        if !challenge.accepts(command) {
            return None;
        }

        let has_next = index + 1 < category.len();
        self.xp += challenge.xp_reward;
        self.completed.insert(challenge.id.clone());
        self.state = if has_next {
            EngineState::Advancing { next: index + 1 }
        } else {
            EngineState::Exhausted
        };
        debug!(id = %challenge.id, xp = self.xp, "challenge completed");

        Some(Completion {
            xp_awarded: challenge.xp_reward,
            elapsed: started_at.elapsed(),
            total_xp: self.xp,
            level: self.level(),
            has_next,
            challenge,
        })
    }

    /// Apply a pending advance. Returns the newly active challenge.
    pub fn advance(&mut self) -> Option<&Challenge> {
        let EngineState::Advancing { next } = self.state else {
            return None;
        };
        self.activate(next)
    }

    pub fn stats(&self, typing: &TypingStats) -> ProgressStats {
        ProgressStats {
            xp: self.xp,
            level: self.level(),
            completed: self.completed.len(),
            total: self.catalog.total_challenges(),
            commands: typing.total_commands,
            avg_speed: typing.avg_speed,
            avg_accuracy: typing.avg_accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termina_types::Difficulty;

    fn challenge(id: &str, order: u32, expected: &[&str], xp: u64) -> Challenge {
        Challenge {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            difficulty: Difficulty::Beginner,
            level: 1,
            scenario: String::new(),
            expected_commands: expected.iter().map(|s| s.to_string()).collect(),
            hints: vec!["first".into(), "second".into()],
            xp_reward: xp,
            order_index: order,
        }
    }

    fn make_engine() -> ChallengeEngine {
        let catalog = Catalog::new(vec![
            Category::new(
                "default",
                vec![
                    challenge("one", 1, &["pwd"], 40),
                    challenge("two", 2, &["ls -la", "ls -al"], 30),
                    challenge("three", 3, &["cat welcome.txt"], 50),
                ],
            ),
            Category::new("other", vec![challenge("x", 1, &["whoami"], 10)]),
        ]);
        ChallengeEngine::new(Arc::new(catalog), "default").unwrap()
    }

    #[test]
    fn test_level_formula() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(99), 1);
        assert_eq!(level_for(100), 2);
        assert_eq!(level_for(250), 3);
    }

    #[test]
    fn test_new_rejects_unknown_category() {
        let catalog = Arc::new(Catalog::new(vec![]));
        assert!(matches!(
            ChallengeEngine::new(catalog, "nope"),
            Err(ChallengeError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_hints_then_answer_summary() {
        let mut engine = make_engine();
        engine.start("default").unwrap();
        engine.skip().unwrap();

        assert_eq!(
            engine.request_hint().unwrap(),
            HintOutcome::Hint {
                number: 1,
                total: 2,
                text: "first".into()
            }
        );
        engine.request_hint().unwrap();
        assert_eq!(
            engine.request_hint().unwrap(),
            HintOutcome::NoMoreHints("No more hints available. Expected commands: ls -la or ls -al".into())
        );
    }

    #[test]
    fn test_hint_without_active() {
        let mut engine = make_engine();
        assert!(matches!(engine.request_hint(), Err(ChallengeError::NoActiveChallenge)));
        assert!(matches!(engine.skip(), Err(ChallengeError::NoActiveChallenge)));
    }

    #[test]
    fn test_failed_command_never_completes() {
        let mut engine = make_engine();
        engine.start("default").unwrap();
        assert!(engine.submit("pwd", false).is_none());
        assert_eq!(engine.xp(), 0);
    }

    #[test]
    fn test_prefix_match_completes() {
        let mut engine = make_engine();
        engine.start("default").unwrap();
        let done = engine.submit("  PWD --logical ", true).unwrap();
        assert_eq!(done.xp_awarded, 40);
        assert!(done.has_next);
        assert_eq!(engine.state(), EngineState::Advancing { next: 1 });
        // Nothing is active until the advance is applied
        assert!(engine.current().is_none());
        assert!(engine.submit("ls -la", true).is_none());

        assert_eq!(engine.advance().unwrap().id, "two");
    }

    #[test]
    fn test_xp_accumulates_and_levels() {
        let mut engine = make_engine();
        engine.start("default").unwrap();
        engine.submit("pwd", true).unwrap();
        engine.advance();
        engine.submit("ls -al", true).unwrap();
        engine.advance();
        let done = engine.submit("cat welcome.txt", true).unwrap();

        assert_eq!(done.total_xp, 120);
        assert_eq!(done.level, 2);
        assert!(!done.has_next);
        assert_eq!(engine.state(), EngineState::Exhausted);
        assert_eq!(engine.completed_count(), 3);
    }

    #[test]
    fn test_skip_past_end_exhausts() {
        let mut engine = make_engine();
        engine.start("other").unwrap();
        assert!(engine.skip().unwrap().is_none());
        assert_eq!(engine.state(), EngineState::Exhausted);
        assert_eq!(engine.xp(), 0);
    }

    #[test]
    fn test_switch_category_resets_cursor() {
        let mut engine = make_engine();
        engine.start("default").unwrap();
        engine.skip().unwrap();
        engine.request_hint().unwrap();

        let first = engine.switch_category("other").unwrap().id.clone();
        assert_eq!(first, "x");
        assert!(matches!(
            engine.state(),
            EngineState::Active {
                index: 0,
                hint_index: 0,
                ..
            }
        ));
        assert_eq!(engine.category(), "other");
    }

    #[test]
    fn test_switch_unknown_category_keeps_state() {
        let mut engine = make_engine();
        engine.start("default").unwrap();
        let err = engine.switch_category("docker").unwrap_err();
        assert!(matches!(err, ChallengeError::UnknownCategory { ref known, .. } if known.len() == 2));
        assert_eq!(engine.current().unwrap().id, "one");
        assert_eq!(engine.category(), "default");
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_time_measured_from_presentation() {
        let mut engine = make_engine();
        engine.start("default").unwrap();
        tokio::time::advance(Duration::from_millis(2500)).await;
        let done = engine.submit("pwd", true).unwrap();
        assert_eq!(done.elapsed, Duration::from_millis(2500));
    }

    #[test]
    fn test_stats_include_typing() {
        let mut engine = make_engine();
        engine.start("default").unwrap();
        engine.submit("pwd", true);
        let typing = TypingStats {
            total_commands: 3,
            successful_commands: 2,
            avg_speed: 120.0,
            avg_accuracy: 66.6,
        };
        let stats = engine.stats(&typing);
        assert_eq!(stats.xp, 40);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.commands, 3);
    }
}
