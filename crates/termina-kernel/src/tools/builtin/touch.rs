//! touch — Create empty files or refresh timestamps.

use async_trait::async_trait;
use termina_types::{CommandError, ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Touch tool.
pub struct Touch;

#[async_trait]
impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("touch", "Create empty files")
            .usage("touch [FILE]...")
            .example("touch file.txt")
            .example("touch /home/user/newfile.txt")
            .man_page(
                "NAME
    touch - create empty files

SYNOPSIS
    touch [FILE]...

DESCRIPTION
    Create empty FILE(s) if they do not exist.",
            )
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(path) = args.get(0) else {
            return ExecResult::failure(1, CommandError::MissingOperand("touch".into()).to_string());
        };

        match ctx.vfs.touch_file(path) {
            Ok(()) => ExecResult::success("").with_best_practice(
                "Use file extensions to indicate file types (e.g., .txt, .py, .sh).",
            ),
            Err(e) => ExecResult::failure(1, format!("touch: cannot touch '{}': {}", path, e)),
        }
    }
}
