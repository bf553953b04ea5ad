//! Typing statistics.

use std::time::Duration;

/// Characters per minute for `text` typed over `elapsed`. Zero time yields 0.
pub fn chars_per_minute(text: &str, elapsed: Duration) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes > 0.0 {
        text.chars().count() as f64 / minutes
    } else {
        0.0
    }
}

/// Running aggregates over every non-meta command of a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypingStats {
    pub total_commands: u64,
    pub successful_commands: u64,
    /// Mean characters per minute.
    pub avg_speed: f64,
    /// Percentage of commands that succeeded.
    pub avg_accuracy: f64,
}

impl TypingStats {
    /// Fold one command into the aggregates.
    pub fn record(&mut self, speed: f64, success: bool) {
        let n = self.total_commands as f64;
        self.avg_speed = (self.avg_speed * n + speed) / (n + 1.0);
        self.total_commands += 1;
        if success {
            self.successful_commands += 1;
        }
        self.avg_accuracy = self.successful_commands as f64 * 100.0 / self.total_commands as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpm_from_duration() {
        assert_eq!(chars_per_minute("ls -la", Duration::from_secs(3)), 120.0);
        assert_eq!(chars_per_minute("ls", Duration::ZERO), 0.0);
    }

    #[test]
    fn running_averages() {
        let mut stats = TypingStats::default();
        stats.record(100.0, true);
        stats.record(200.0, false);
        stats.record(300.0, true);
        assert_eq!(stats.total_commands, 3);
        assert_eq!(stats.avg_speed, 200.0);
        assert!((stats.avg_accuracy - 66.666).abs() < 0.01);
    }
}
