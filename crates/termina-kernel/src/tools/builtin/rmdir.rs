//! rmdir — Remove empty directories.

use async_trait::async_trait;
use termina_types::{CommandError, ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Rmdir tool: remove a directory only if it is empty.
pub struct Rmdir;

#[async_trait]
impl Tool for Rmdir {
    fn name(&self) -> &str {
        "rmdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rmdir", "Remove empty directories")
            .usage("rmdir [DIRECTORY]...")
            .example("rmdir olddir")
            .man_page(
                "NAME
    rmdir - remove empty directories

SYNOPSIS
    rmdir [DIRECTORY]...

DESCRIPTION
    Remove the DIRECTORY(ies), if they are empty.",
            )
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(path) = args.get(0) else {
            return ExecResult::failure(1, CommandError::MissingOperand("rmdir".into()).to_string());
        };

        match ctx.vfs.remove_directory(path, false) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("rmdir: failed to remove '{}': {}", path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    #[tokio::test]
    async fn test_rmdir_empty() {
        let mut ctx = ExecContext::new(VirtualFileSystem::new());
        let result = Rmdir.execute(["downloads"].into_iter().collect(), &mut ctx).await;
        assert!(result.ok());
        assert!(!ctx.vfs.exists("downloads"));
    }

    #[tokio::test]
    async fn test_rmdir_not_empty() {
        let mut ctx = ExecContext::new(VirtualFileSystem::new());
        let result = Rmdir.execute(["/home/user"].into_iter().collect(), &mut ctx).await;
        assert_eq!(result.err, "rmdir: failed to remove '/home/user': Directory not empty");
        assert!(ctx.vfs.exists("/home/user/welcome.txt"));
    }

    #[tokio::test]
    async fn test_rmdir_file() {
        let mut ctx = ExecContext::new(VirtualFileSystem::new());
        let result = Rmdir.execute(["welcome.txt"].into_iter().collect(), &mut ctx).await;
        assert_eq!(result.err, "rmdir: failed to remove 'welcome.txt': Not a directory");
    }
}
