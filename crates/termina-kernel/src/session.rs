//! The session: one user's shell, filesystem and progression.
//!
//! A `Session` owns everything a running terminal needs. Input lines come in
//! through `process_line`; rendering records come out as `TerminalLine`s.
//!
//! ```text
//! line ──▶ settle pending advance ──▶ echo prompt
//!            │
//!            ├── "!…" meta-command ──▶ ChallengeEngine / Session
//!            └── otherwise ──▶ Dispatcher ──▶ Tool on the VFS
//!                                   │
//!                      success ──▶ ChallengeEngine::submit
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use termina_types::{
    BadgeAward, Challenge, ChallengeProgress, CommandRecord, ExecResult, Signal, TerminalLine,
    UserProfile,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::badges::BadgeTracker;
use crate::challenge::{Catalog, ChallengeEngine, ChallengeError, Completion, HintOutcome};
use crate::dispatch::Dispatcher;
use crate::scheduler::{AdvanceScheduler, SessionEvent};
use crate::sink::{NullSink, Record, RecordSink};
use crate::stats::{chars_per_minute, TypingStats};
use crate::tools::ExecContext;
use crate::vfs::VirtualFileSystem;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Second line of the prompt, after which the user types.
pub const PROMPT_TAIL: &str = "└──╼ $ ";

/// Knobs for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub username: String,
    pub hostname: String,
    /// Category for `!tutorial` and the initial selection.
    pub default_category: String,
    /// Delay before the next challenge is presented.
    pub advance_delay: Duration,
    pub show_best_practices: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            username: "user".into(),
            hostname: "terminal".into(),
            default_category: "default".into(),
            advance_delay: Duration::from_millis(1000),
            show_best_practices: true,
        }
    }
}

/// What the renderer should do for one input line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Clear everything rendered so far before printing `lines`.
    pub clear_screen: bool,
    pub lines: Vec<TerminalLine>,
}

impl Response {
    fn new(lines: Vec<TerminalLine>) -> Self {
        Self {
            clear_screen: false,
            lines,
        }
    }
}

/// One user's terminal.
pub struct Session {
    options: SessionOptions,
    catalog: Arc<Catalog>,
    dispatcher: Dispatcher,
    ctx: ExecContext,
    engine: ChallengeEngine,
    history: Vec<String>,
    typing: TypingStats,
    badges: BadgeTracker,
    /// Successful commands per challenge id while it was active.
    attempts: HashMap<String, u32>,
    scheduler: AdvanceScheduler,
    events: Option<mpsc::UnboundedReceiver<SessionEvent>>,
    sink: Arc<dyn RecordSink>,
}

impl Session {
    /// A session over the builtin challenge catalog.
    pub fn new(options: SessionOptions) -> Result<Self, ChallengeError> {
        Self::with_catalog(options, Catalog::builtin()?)
    }

    pub fn with_catalog(options: SessionOptions, catalog: Catalog) -> Result<Self, ChallengeError> {
        let catalog = Arc::new(catalog);
        let engine = ChallengeEngine::new(catalog.clone(), &options.default_category)?;
        let dispatcher = Dispatcher::new();
        let ctx = ExecContext::with_schemas(
            VirtualFileSystem::for_user(&options.username),
            dispatcher.schemas(),
        );
        let (scheduler, events) = AdvanceScheduler::new(options.advance_delay);

        Ok(Self {
            options,
            catalog,
            dispatcher,
            ctx,
            engine,
            history: Vec::new(),
            typing: TypingStats::default(),
            badges: BadgeTracker::default(),
            attempts: HashMap::new(),
            scheduler,
            events: Some(events),
            sink: Arc::new(NullSink),
        })
    }

    /// Route records to `sink` instead of discarding them.
    pub fn with_sink(mut self, sink: Arc<dyn RecordSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn vfs(&self) -> &VirtualFileSystem {
        &self.ctx.vfs
    }

    pub fn engine(&self) -> &ChallengeEngine {
        &self.engine
    }

    /// Command history, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn typing(&self) -> &TypingStats {
        &self.typing
    }

    /// Take the event receiver so an outer loop can `select!` on it.
    ///
    /// Returns `None` after the first call.
    pub fn take_events(&mut self) -> Option<mpsc::UnboundedReceiver<SessionEvent>> {
        self.events.take()
    }

    /// `┌─[user@host]─[cwd]` followed by a newline and `PROMPT_TAIL`.
    pub fn prompt(&self) -> String {
        format!("{}\n{}", self.prompt_header(), PROMPT_TAIL)
    }

    /// First prompt line only.
    pub fn prompt_header(&self) -> String {
        format!(
            "┌─[{}@{}]─[{}]",
            self.options.username,
            self.options.hostname,
            self.ctx.cwd()
        )
    }

    /// Banner shown when a terminal first opens.
    pub fn welcome(&self) -> Vec<TerminalLine> {
        vec![TerminalLine::info(format!(
            "╔═══════════════════════════════════════════════════╗\n\
             ║                   T E R M I N A                   ║\n\
             ║          Linux Command Learning Platform          ║\n\
             ╚═══════════════════════════════════════════════════╝\n\
             \n\
             Welcome, {}.\n\
             Type 'help' for available commands\n\
             Type '!tutorial' to begin your training",
            self.options.username
        ))]
    }

    /// Apply a delivered background event.
    pub fn handle_event(&mut self, event: SessionEvent) -> Vec<TerminalLine> {
        match event {
            SessionEvent::AdvanceDue { generation } => {
                if !self.scheduler.accept(generation) {
                    return Vec::new();
                }
                self.engine.advance().map(challenge_banner).into_iter().collect()
            }
        }
    }

    /// Apply a pending advance right away, cancelling its timer.
    pub fn settle(&mut self) -> Vec<TerminalLine> {
        self.scheduler.cancel();
        self.engine.advance().map(challenge_banner).into_iter().collect()
    }

    /// Handle one line of input.
    ///
    /// `typing` is how long the user took to type it; it only feeds the
    /// speed statistics.
    pub async fn process_line(&mut self, input: &str, typing: Duration) -> Response {
        let mut lines = self.settle();
        let input = input.trim();
        if input.is_empty() {
            return Response::new(lines);
        }

        let prompt = self.prompt();
        self.history.push(input.to_string());
        lines.push(TerminalLine::input(format!("{}{}", prompt, input)));

        if input.starts_with('!')
            && let Some(response) = self.meta_command(input, &mut lines).await
        {
            return response;
        }

        self.run_command(input, typing, lines).await
    }

    /// Returns `None` for unknown meta-commands so they reach the dispatcher.
    async fn meta_command(&mut self, input: &str, lines: &mut Vec<TerminalLine>) -> Option<Response> {
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();
        debug!(command, "meta-command");

        match command {
            "!hint" => lines.push(match self.engine.request_hint() {
                Ok(HintOutcome::Hint { number, total, text }) => {
                    TerminalLine::info(format!("💡 HINT {}/{}: {}", number, total, text))
                }
                Ok(HintOutcome::NoMoreHints(summary)) => TerminalLine::info(format!("💡 {}", summary)),
                Err(e) => TerminalLine::info(e.to_string()),
            }),
            "!skip" => match self.engine.skip() {
                Ok(Some(next)) => {
                    let banner = challenge_banner(next);
                    lines.push(TerminalLine::info("⏭️  Challenge skipped. Moving to next challenge..."));
                    lines.push(banner);
                }
                Ok(None) => lines.push(TerminalLine::success(
                    "🎉 You've reached the end of available challenges!",
                )),
                Err(_) => lines.push(TerminalLine::info("No active challenge to skip.")),
            },
            "!tutorial" => {
                let category = self.options.default_category.clone();
                self.start_category(&category, lines);
            }
            "!man" => {
                let result = self
                    .dispatcher
                    .execute_command(&format!("man {}", arg.unwrap_or_default()), &mut self.ctx)
                    .await;
                lines.push(result_line(&result));
            }
            "!reset" => {
                if let Err(e) = self.reset() {
                    lines.push(TerminalLine::error(e.to_string()));
                    return Some(Response::new(std::mem::take(lines)));
                }
                let mut lines = self.welcome();
                lines.push(TerminalLine::info(
                    "System reset. File system and progress restored to their initial state.",
                ));
                return Some(Response {
                    clear_screen: true,
                    lines,
                });
            }
            "!stats" => lines.push(TerminalLine::info(self.stats_box())),
            "!categories" => lines.push(TerminalLine::info(self.category_list())),
            "!category" => match arg {
                Some(name) => self.start_category(name, lines),
                None => lines.push(TerminalLine::info(format!(
                    "Current category: {}\nUsage: !category <name>",
                    self.engine.category()
                ))),
            },
            _ => return None,
        }
        Some(Response::new(std::mem::take(lines)))
    }

    fn start_category(&mut self, name: &str, lines: &mut Vec<TerminalLine>) {
        match self.engine.switch_category(name) {
            Ok(first) => {
                let banner = challenge_banner(first);
                self.scheduler.cancel();
                info!(category = name, "category started");
                lines.push(banner);
            }
            Err(e) => lines.push(TerminalLine::error(e.to_string())),
        }
    }

    async fn run_command(&mut self, input: &str, typing: Duration, mut lines: Vec<TerminalLine>) -> Response {
        let result = self.dispatcher.execute_command(input, &mut self.ctx).await;
        let mut response = Response::default();

        match result.signal {
            Some(Signal::ClearScreen) => {
                response.clear_screen = true;
                lines.clear();
            }
            Some(Signal::ShowHistory) => lines.push(TerminalLine::output(self.history_text())),
            None => {}
        }
        if !result.output().is_empty() {
            lines.push(result_line(&result));
        }
        if self.options.show_best_practices
            && let Some(tip) = &result.best_practice
        {
            lines.push(TerminalLine::info(format!("💡 {}", tip)));
        }

        let speed = chars_per_minute(input, typing);
        self.typing.record(speed, result.ok());
        let active_id = self.engine.current().map(|c| c.id.clone());
        self.sink.emit(Record::Command(CommandRecord {
            command: input.to_string(),
            success: result.ok(),
            typing_speed: speed,
            accuracy: self.typing.avg_accuracy,
            challenge_id: active_id.clone(),
            executed_at: Local::now(),
        }));

        if result.ok()
            && let Some(id) = active_id
        {
            *self.attempts.entry(id).or_default() += 1;
            if let Some(done) = self.engine.submit(input, true) {
                self.complete(done, speed, &mut lines);
            }
        }

        response.lines = lines;
        response
    }

    fn complete(&mut self, done: Completion, speed: f64, lines: &mut Vec<TerminalLine>) {
        let secs = done.elapsed.as_secs_f64();
        info!(id = %done.challenge.id, xp = done.total_xp, level = done.level, "challenge completed");
        lines.push(TerminalLine::success(format!(
            "✅ CHALLENGE COMPLETED!\n+{} XP | Time: {:.1}s | Speed: {:.0} CPM",
            done.xp_awarded, secs, speed
        )));
        if crate::challenge::level_for(done.total_xp - done.xp_awarded) < done.level {
            lines.push(TerminalLine::success(format!("⬆️  LEVEL UP! You are now level {}", done.level)));
        }

        let now = Local::now();
        self.sink.emit(Record::Progress(ChallengeProgress {
            challenge_id: done.challenge.id.clone(),
            completed: true,
            attempts: self.attempts.get(&done.challenge.id).copied().unwrap_or(1),
            best_time: Some(secs),
            completed_at: Some(now),
        }));
        self.sink.emit(Record::Profile(self.profile()));

        let stats = self.engine.stats(&self.typing);
        for badge in self.badges.evaluate(&stats) {
            lines.push(TerminalLine::success(format!(
                "🏅 BADGE EARNED: {} {} - {}",
                badge.icon, badge.name, badge.description
            )));
            self.sink.emit(Record::Badge(BadgeAward {
                username: self.options.username.clone(),
                badge_id: badge.id,
                earned_at: now,
            }));
        }

        if !done.has_next {
            lines.push(TerminalLine::success(self.mission_complete()));
        } else if self.scheduler.delay().is_zero() {
            lines.extend(self.engine.advance().map(challenge_banner));
        } else {
            self.scheduler.schedule();
        }
    }

    /// Rebuild the filesystem, progression and statistics.
    ///
    /// On error nothing is changed.
    pub fn reset(&mut self) -> Result<(), ChallengeError> {
        let engine = ChallengeEngine::new(self.catalog.clone(), &self.options.default_category)?;
        self.scheduler.cancel();
        self.engine = engine;
        self.ctx = ExecContext::with_schemas(
            VirtualFileSystem::for_user(&self.options.username),
            self.dispatcher.schemas(),
        );
        self.history.clear();
        self.typing = TypingStats::default();
        self.badges = BadgeTracker::default();
        self.attempts.clear();
        info!("session reset");
        Ok(())
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            username: self.options.username.clone(),
            total_commands: self.typing.total_commands,
            avg_accuracy: self.typing.avg_accuracy,
            avg_typing_speed: self.typing.avg_speed,
            level: self.engine.level(),
            total_xp: self.engine.xp(),
        }
    }

    /// History before the current command, numbered from 1.
    fn history_text(&self) -> String {
        let previous = &self.history[..self.history.len().saturating_sub(1)];
        if previous.is_empty() {
            return "No command history yet.".to_string();
        }
        previous
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("  {}  {}", i + 1, cmd))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn stats_box(&self) -> String {
        let stats = self.engine.stats(&self.typing);
        format!(
            "╔══════════════ OPERATIVE STATS ═════════════════╗\n\
             ║ Level: {}\n\
             ║ Total XP: {}\n\
             ║ Challenges Completed: {}/{}\n\
             ║ Commands Executed: {}\n\
             ║ Average Typing Speed: {:.1} CPM\n\
             ║ Average Accuracy: {:.1}%\n\
             ║ Badges Earned: {}\n\
             ╚════════════════════════════════════════════════╝",
            stats.level,
            stats.xp,
            stats.completed,
            stats.total,
            stats.commands,
            stats.avg_speed,
            stats.avg_accuracy,
            self.badges.earned()
        )
    }

    fn category_list(&self) -> String {
        let current = self.engine.category();
        let rows: Vec<String> = self
            .catalog
            .categories()
            .iter()
            .map(|c| {
                let marker = if c.name == current { "*" } else { " " };
                format!("  {} {:<12} {} challenges", marker, c.name, c.len())
            })
            .collect();
        format!(
            "Challenge categories:\n{}\n\nType '!category <name>' to switch.",
            rows.join("\n")
        )
    }

    fn mission_complete(&self) -> String {
        let stats = self.engine.stats(&self.typing);
        format!(
            "╔═══════════════════════════════════════════════════════════╗\n\
             ║                  🏆 MISSION COMPLETE 🏆                   ║\n\
             ║                                                           ║\n\
             ║  You've completed every challenge in '{}'.\n\
             ║                                                           ║\n\
             ║  Final Stats:\n\
             ║  - Level: {}\n\
             ║  - Total XP: {}\n\
             ║  - Challenges: {}/{}\n\
             ╚═══════════════════════════════════════════════════════════╝",
            self.engine.category(),
            stats.level,
            stats.xp,
            stats.completed,
            stats.total
        )
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cwd", &self.ctx.cwd())
            .field("category", &self.engine.category())
            .field("state", &self.engine.state())
            .field("history", &self.history.len())
            .finish()
    }
}

/// `output` on success, `error` otherwise.
fn result_line(result: &ExecResult) -> TerminalLine {
    if result.ok() {
        TerminalLine::output(result.output())
    } else {
        TerminalLine::error(result.output())
    }
}

/// The block that introduces a challenge.
pub fn challenge_banner(challenge: &Challenge) -> TerminalLine {
    TerminalLine::challenge(format!(
        "{RULE}\n🎯 CHALLENGE {}: {}\n{RULE}\nDifficulty: {} | Level: {} | XP: {}\n\n{}\n\nType '!hint' for a hint | Type '!skip' to skip\n{RULE}",
        challenge.order_index,
        challenge.title,
        challenge.difficulty.to_string().to_uppercase(),
        challenge.level,
        challenge.xp_reward,
        challenge.scenario,
    ))
}
