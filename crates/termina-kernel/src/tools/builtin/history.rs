//! history — Ask the session to show command history.
//!
//! History lives in the session, not the filesystem, so the tool only
//! raises a signal.

use async_trait::async_trait;
use termina_types::{ExecResult, Signal, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct History;

#[async_trait]
impl Tool for History {
    fn name(&self) -> &str {
        "history"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("history", "Display command history")
            .usage("history")
            .example("history")
            .man_page(
                "NAME
    history - display command history

SYNOPSIS
    history

DESCRIPTION
    Display the command history for the current session.",
            )
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::signal(Signal::ShowHistory)
    }
}
