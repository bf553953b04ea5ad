//! Rendering terminal lines for the REPL.
//!
//! The session hands back typed `TerminalLine`s; this module decides how
//! each one looks for the current audience:
//!
//! - **Interactive** → colors by line kind; input lines are skipped since
//!   the line editor already echoed them
//! - **Piped** → plain text, input lines included so the output reads as
//!   a transcript

use std::io::IsTerminal;

use owo_colors::OwoColorize;
use termina_types::{LineKind, TerminalLine};

/// Who is reading stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputContext {
    Interactive,
    Piped,
}

/// Detect the output context based on terminal state.
pub fn detect_context() -> OutputContext {
    if std::io::stdout().is_terminal() {
        OutputContext::Interactive
    } else {
        OutputContext::Piped
    }
}

/// Whether ANSI colors should be emitted for `context`.
///
/// Honors `NO_COLOR` and `TERM=dumb`.
pub fn use_color(context: OutputContext) -> bool {
    if context != OutputContext::Interactive {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !std::env::var("TERM").is_ok_and(|t| t == "dumb")
}

/// Render one line, or `None` if it should not be printed.
pub fn format_line(line: &TerminalLine, context: OutputContext, color: bool) -> Option<String> {
    if line.kind == LineKind::Input && context == OutputContext::Interactive {
        return None;
    }
    Some(paint(line.kind, &line.text, color))
}

/// Render a batch of lines joined by newlines.
pub fn format_lines(lines: &[TerminalLine], context: OutputContext, color: bool) -> String {
    lines
        .iter()
        .filter_map(|line| format_line(line, context, color))
        .collect::<Vec<_>>()
        .join("\n")
}

fn paint(kind: LineKind, text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match kind {
        LineKind::Input | LineKind::Output => text.to_string(),
        LineKind::Error => text.red().to_string(),
        LineKind::Success => text.green().bold().to_string(),
        LineKind::Info => text.cyan().to_string(),
        LineKind::Challenge => text.yellow().bold().to_string(),
    }
}
