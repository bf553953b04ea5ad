//! clear — Ask the session to clear the screen.

use async_trait::async_trait;
use termina_types::{ExecResult, Signal, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Clear;

#[async_trait]
impl Tool for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("clear", "Clear the terminal screen")
            .usage("clear")
            .example("clear")
            .man_page(
                "NAME
    clear - clear the terminal screen

SYNOPSIS
    clear

DESCRIPTION
    Clear the terminal screen.",
            )
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::signal(Signal::ClearScreen)
    }
}
