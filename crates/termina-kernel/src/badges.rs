//! Achievement badges.

use std::collections::HashSet;

use termina_types::Badge;

use crate::challenge::ProgressStats;

fn badge(id: &str, name: &str, description: &str, icon: &str, kind: &str, value: u64) -> Badge {
    Badge {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
        requirement_type: kind.into(),
        requirement_value: value,
    }
}

/// The badges every session can earn.
pub fn builtin_badges() -> Vec<Badge> {
    vec![
        badge("first-steps", "First Steps", "Complete your first challenge", "🎯", "challenges_completed", 1),
        badge("apprentice", "Apprentice", "Complete five challenges", "📜", "challenges_completed", 5),
        badge("centurion", "Centurion", "Earn 100 XP", "💯", "total_xp", 100),
        badge("rising-star", "Rising Star", "Reach level 3", "⭐", "level", 3),
        badge("keyboard-warrior", "Keyboard Warrior", "Execute 50 commands", "⌨️", "commands_executed", 50),
    ]
}

/// Tracks which badges are earned and hands out new ones once.
#[derive(Debug, Clone)]
pub struct BadgeTracker {
    badges: Vec<Badge>,
    earned: HashSet<String>,
}

impl Default for BadgeTracker {
    fn default() -> Self {
        Self::new(builtin_badges())
    }
}

impl BadgeTracker {
    pub fn new(badges: Vec<Badge>) -> Self {
        Self {
            badges,
            earned: HashSet::new(),
        }
    }

    /// Badges whose requirement `stats` now meets and that were not yet earned.
    pub fn evaluate(&mut self, stats: &ProgressStats) -> Vec<Badge> {
        let mut fresh = Vec::new();
        for badge in &self.badges {
            if self.earned.contains(&badge.id) {
                continue;
            }
            let current = match badge.requirement_type.as_str() {
                "challenges_completed" => stats.completed as u64,
                "total_xp" => stats.xp,
                "level" => stats.level,
                "commands_executed" => stats.commands,
                _ => continue,
            };
            if current >= badge.requirement_value {
                fresh.push(badge.clone());
            }
        }
        for badge in &fresh {
            self.earned.insert(badge.id.clone());
        }
        fresh
    }

    pub fn earned(&self) -> usize {
        self.earned.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(completed: usize, xp: u64, commands: u64) -> ProgressStats {
        ProgressStats {
            xp,
            level: crate::challenge::level_for(xp),
            completed,
            total: 10,
            commands,
            avg_speed: 0.0,
            avg_accuracy: 0.0,
        }
    }

    #[test]
    fn awards_once() {
        let mut tracker = BadgeTracker::default();
        let first = tracker.evaluate(&stats(1, 10, 1));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, "first-steps");
        assert!(tracker.evaluate(&stats(1, 10, 2)).is_empty());
    }

    #[test]
    fn several_at_once() {
        let mut tracker = BadgeTracker::default();
        let ids: Vec<_> = tracker
            .evaluate(&stats(5, 210, 3))
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["first-steps", "apprentice", "centurion", "rising-star"]);
        assert_eq!(tracker.earned(), 4);
    }
}
