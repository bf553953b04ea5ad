//! Rendering records handed to the front-end.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// What a rendered line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Output,
    Error,
    Success,
    Info,
    Challenge,
}

/// One record in the append-only transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl TerminalLine {
    /// Create a line stamped with the current time.
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self::new(LineKind::Input, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(LineKind::Info, text)
    }

    pub fn challenge(text: impl Into<String>) -> Self {
        Self::new(LineKind::Challenge, text)
    }
}
