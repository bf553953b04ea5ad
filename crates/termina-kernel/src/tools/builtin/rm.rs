//! rm — Remove files or directories.

use async_trait::async_trait;
use termina_types::{CommandError, ExecResult, ToolArgs, ToolSchema};

use crate::vfs::VfsError;
use crate::tools::{ExecContext, Tool};

const MAN_PAGE: &str = "NAME
    rm - remove files or directories

SYNOPSIS
    rm [OPTION]... [FILE]...

DESCRIPTION
    Remove (unlink) the FILE(s).

OPTIONS
    -r, -R, --recursive
        remove directories and their contents recursively
    -f, --force
        ignore nonexistent files, never fail on a missing operand";

/// Rm tool: remove a file, or a directory tree with `-r`.
pub struct Rm;

#[async_trait]
impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Remove files or directories")
            .usage("rm [OPTION]... [FILE]...")
            .example("rm file.txt")
            .example("rm -r directory")
            .man_page(MAN_PAGE)
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let mut recursive = false;
        let mut force = false;
        for arg in &args.positional {
            match arg.as_str() {
                "--recursive" => recursive = true,
                "--force" => force = true,
                flag if flag.starts_with('-') && !flag.starts_with("--") => {
                    for c in flag.chars().skip(1) {
                        match c {
                            'r' | 'R' => recursive = true,
                            'f' => force = true,
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }

        let Some(path) = args.operands().last() else {
            if force {
                return ExecResult::success("");
            }
            return ExecResult::failure(1, CommandError::MissingOperand("rm".into()).to_string());
        };

        let removed = match ctx.vfs.stat(path) {
            Err(e) => Err(e),
            Ok(info) if info.is_dir() => {
                if recursive {
                    ctx.vfs.remove_directory(path, true)
                } else {
                    Err(VfsError::IsADirectory)
                }
            }
            Ok(_) => ctx.vfs.remove_file(path),
        };

        match removed {
            Ok(()) => ExecResult::success("").with_best_practice(
                "CAUTION: rm is permanent. Always double-check before deleting files, especially with -r flag.",
            ),
            Err(VfsError::NotFound) if force => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("rm: cannot remove '{}': {}", path, e)),
        }
    }
}
