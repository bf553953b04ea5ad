//! whoami — Print the session user.

use async_trait::async_trait;
use termina_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Whoami;

#[async_trait]
impl Tool for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("whoami", "Print effective user name")
            .usage("whoami")
            .example("whoami")
            .man_page(
                "NAME
    whoami - print effective user name

SYNOPSIS
    whoami

DESCRIPTION
    Print the user name associated with the current effective user ID.",
            )
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(ctx.user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    #[tokio::test]
    async fn test_whoami() {
        let mut ctx = ExecContext::new(VirtualFileSystem::for_user("ada"));
        let result = Whoami.execute(ToolArgs::new(), &mut ctx).await;
        assert_eq!(result.out, "ada");
    }
}
