//! ExecResult — the structured result of every command execution.

use serde::{Deserialize, Serialize};

/// Side effect a command asks the session (not the filesystem) to perform.
///
/// Replaces a bare "special" flag: the session decides how to honour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Discard the rendered history (`clear`).
    ClearScreen,
    /// Render the session's command history (`history`).
    ShowHistory,
}

/// The result of executing a command.
///
/// - `code` — exit code (0 = success)
/// - `out` — text shown on success
/// - `err` — shell-style error message on failure
/// - `best_practice` — advisory tip, cosmetic only
/// - `signal` — session-level effect requested by the command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output text.
    pub out: String,
    /// Standard error text.
    pub err: String,
    /// Advisory guidance attached on success.
    pub best_practice: Option<String>,
    /// Session-level effect, if any.
    pub signal: Option<Signal>,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
            best_practice: None,
            signal: None,
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
            best_practice: None,
            signal: None,
        }
    }

    /// Create a successful, empty result carrying a session signal.
    pub fn signal(signal: Signal) -> Self {
        Self {
            signal: Some(signal),
            ..Self::success("")
        }
    }

    /// Attach a best-practice tip.
    pub fn with_best_practice(mut self, tip: impl Into<String>) -> Self {
        self.best_practice = Some(tip.into());
        self
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// The text a renderer should show: stdout on success, stderr otherwise.
    pub fn output(&self) -> &str {
        if self.ok() { &self.out } else { &self.err }
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}
