//! grep — Case-insensitive substring search in a file.
//!
//! Patterns are plain text. Quote characters are stripped since input is
//! split on whitespace without quote handling.

use async_trait::async_trait;
use termina_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Grep tool.
pub struct Grep;

#[async_trait]
impl Tool for Grep {
    fn name(&self) -> &str {
        "grep"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("grep", "Search for patterns in files")
            .usage("grep [PATTERN] [FILE]")
            .example("grep \"hello\" file.txt")
            .example("grep \"error\" /var/log/app.log")
            .man_page(
                "NAME
    grep - print lines that match patterns

SYNOPSIS
    grep [PATTERN] [FILE]

DESCRIPTION
    Search for PATTERN in FILE and display matching lines.",
            )
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(raw_pattern), Some(path)) = (args.get(0), args.get(1)) else {
            return ExecResult::failure(1, "grep: missing operands\nUsage: grep [PATTERN] [FILE]");
        };

        let pattern = strip_quotes(raw_pattern).to_lowercase();
        let content = match ctx.vfs.read_file(path) {
            Ok(content) => content,
            Err(e) => return ExecResult::failure(1, format!("grep: {}: {}", path, e)),
        };

        let matches: Vec<&str> = content
            .split('\n')
            .filter(|line| line.to_lowercase().contains(&pattern))
            .collect();

        if matches.is_empty() {
            return ExecResult::success("");
        }
        ExecResult::success(matches.join("\n"))
            .with_best_practice("Use grep with regular expressions for powerful pattern matching.")
    }
}

/// Remove every `'` and `"`.
pub(crate) fn strip_quotes(s: &str) -> String {
    s.chars().filter(|c| *c != '\'' && *c != '"').collect()
}
