//! echo — Display a line of text.

use async_trait::async_trait;
use termina_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Echo tool: join arguments with single spaces.
///
/// Quotes are not interpreted; they come through as typed.
pub struct Echo;

#[async_trait]
impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Display a line of text")
            .usage("echo [STRING]...")
            .example("echo \"Hello World\"")
            .example("echo $HOME")
            .man_page(
                "NAME
    echo - display a line of text

SYNOPSIS
    echo [STRING]...

DESCRIPTION
    Echo the STRING(s) to standard output.",
            )
    }

    async fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(args.positional.join(" "))
            .with_best_practice("Use quotes around strings with spaces: echo \"Hello World\"")
    }
}
