//! mkdir — Create a directory.

use async_trait::async_trait;
use termina_types::{CommandError, ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Mkdir tool: create one directory under an existing parent.
pub struct Mkdir;

#[async_trait]
impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Make directories")
            .usage("mkdir [DIRECTORY]...")
            .example("mkdir mydir")
            .example("mkdir /home/user/projects")
            .man_page(
                "NAME
    mkdir - make directories

SYNOPSIS
    mkdir [DIRECTORY]...

DESCRIPTION
    Create the DIRECTORY(ies), if they do not already exist.",
            )
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(path) = args.get(0) else {
            return ExecResult::failure(1, CommandError::MissingOperand("mkdir".into()).to_string());
        };

        match ctx.vfs.create_directory(path) {
            Ok(()) => ExecResult::success("").with_best_practice(
                "Use meaningful directory names with lowercase and underscores for better readability.",
            ),
            Err(e) => ExecResult::failure(1, format!("mkdir: cannot create directory '{}': {}", path, e)),
        }
    }
}
