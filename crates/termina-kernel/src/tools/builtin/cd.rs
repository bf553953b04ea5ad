//! cd — Change working directory.

use async_trait::async_trait;
use termina_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

const MAN_PAGE: &str = "NAME
    cd - change directory

SYNOPSIS
    cd [DIRECTORY]

DESCRIPTION
    Change the current working directory to DIRECTORY.

EXAMPLES
    cd /home/user
        Change to /home/user directory
    cd ..
        Move up one directory
    cd ~
        Change to home directory";

/// Cd tool: change current working directory.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change the current directory")
            .usage("cd [DIRECTORY]")
            .example("cd /home")
            .example("cd ..")
            .example("cd ~")
            .example("cd /home/user/documents")
            .man_page(MAN_PAGE)
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        // No argument goes home
        let target = match args.get(0) {
            Some(path) => path.to_string(),
            None => ctx.vfs.home(),
        };

        match ctx.vfs.change_directory(&target) {
            Ok(_) => ExecResult::success("").with_best_practice(
                "Use \"pwd\" to verify your current location after changing directories.",
            ),
            Err(e) => ExecResult::failure(1, format!("cd: {}: {}", target, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    fn make_ctx() -> ExecContext {
        ExecContext::new(VirtualFileSystem::new())
    }

    #[tokio::test]
    async fn test_cd_relative() {
        let mut ctx = make_ctx();
        let result = Cd.execute(["documents"].into_iter().collect(), &mut ctx).await;
        assert!(result.ok());
        assert_eq!(ctx.cwd(), "/home/user/documents");
    }

    #[tokio::test]
    async fn test_cd_no_args_goes_home() {
        let mut ctx = make_ctx();
        ctx.vfs.change_directory("/etc").unwrap();
        let result = Cd.execute(ToolArgs::new(), &mut ctx).await;
        assert!(result.ok());
        assert_eq!(ctx.cwd(), "/home/user");
    }

    #[tokio::test]
    async fn test_cd_nonexistent_keeps_cwd() {
        let mut ctx = make_ctx();
        let result = Cd.execute(["ghost"].into_iter().collect(), &mut ctx).await;
        assert!(!result.ok());
        assert_eq!(result.err, "cd: ghost: No such file or directory");
        assert_eq!(ctx.cwd(), "/home/user");
    }

    #[tokio::test]
    async fn test_cd_file_fails() {
        let mut ctx = make_ctx();
        let result = Cd.execute(["welcome.txt"].into_iter().collect(), &mut ctx).await;
        assert_eq!(result.err, "cd: welcome.txt: Not a directory");
    }
}
