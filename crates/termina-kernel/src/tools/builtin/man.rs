//! man — Show a command's manual page.

use async_trait::async_trait;
use termina_types::{CommandError, ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Man tool: print the stored manual page of a registered command.
pub struct Man;

#[async_trait]
impl Tool for Man {
    fn name(&self) -> &str {
        "man"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("man", "Display manual pages")
            .usage("man [COMMAND]")
            .example("man ls")
            .example("man cd")
            .man_page(
                "NAME
    man - display manual pages

SYNOPSIS
    man [COMMAND]

DESCRIPTION
    Display the manual page for COMMAND.",
            )
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(name) = args.get(0) else {
            return ExecResult::failure(1, "What manual page do you want?\nFor example, try: man ls");
        };

        match ctx.schema(name) {
            Some(schema) => ExecResult::success(schema.man_page.clone()),
            None => ExecResult::failure(1, CommandError::NoManualEntry(name.to_string()).to_string()),
        }
    }
}
