//! help — List available commands.

use async_trait::async_trait;
use termina_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Meta-commands intercepted by the session before command lookup.
pub const META_COMMANDS: &[(&str, &str)] = &[
    ("!hint", "Get a hint for the current challenge"),
    ("!man [cmd]", "Display manual page for a command"),
    ("!tutorial", "Start the interactive tutorial"),
    ("!skip", "Skip the current challenge"),
    ("!reset", "Reset the file system to initial state"),
    ("!stats", "Show your progress"),
    ("!categories", "List challenge categories"),
    ("!category [name]", "Switch to another challenge category"),
];

/// Help tool: list every registered command plus the meta-commands.
pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Display available commands")
            .usage("help")
            .example("help")
            .man_page(
                "NAME
    help - display available commands

SYNOPSIS
    help

DESCRIPTION
    Display a list of available commands and special commands.",
            )
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let commands: Vec<String> = ctx
            .tool_schemas
            .iter()
            .map(|s| format!("  {:<15} - {}", s.name, s.description))
            .collect();
        let meta: Vec<String> = META_COMMANDS
            .iter()
            .map(|(name, desc)| format!("  {:<15} - {}", name, desc))
            .collect();

        ExecResult::success(format!(
            "Available Commands:\n{}\n\nSpecial Commands:\n{}\n\nType any command followed by --help for usage information.",
            commands.join("\n"),
            meta.join("\n")
        ))
    }
}
