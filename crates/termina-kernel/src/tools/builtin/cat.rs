//! cat — Display file contents.

use async_trait::async_trait;
use termina_types::{CommandError, ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Cat tool: print the first named file.
pub struct Cat;

#[async_trait]
impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Concatenate and display file contents")
            .usage("cat [FILE]...")
            .example("cat file.txt")
            .example("cat /etc/hosts")
            .man_page(
                "NAME
    cat - concatenate files and print on the standard output

SYNOPSIS
    cat [FILE]...

DESCRIPTION
    Concatenate FILE(s) to standard output.",
            )
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(path) = args.get(0) else {
            return ExecResult::failure(1, CommandError::MissingOperand("cat".into()).to_string());
        };

        match ctx.vfs.read_file(path) {
            Ok(content) => ExecResult::success(content).with_best_practice(
                "For large files, consider using \"less\" or \"head\" to view content in manageable chunks.",
            ),
            Err(e) => ExecResult::failure(1, format!("cat: {}: {}", path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{VirtualFileSystem, WELCOME_TEXT};

    fn make_ctx() -> ExecContext {
        ExecContext::new(VirtualFileSystem::new())
    }

    #[tokio::test]
    async fn test_cat_file() {
        let mut ctx = make_ctx();
        let result = Cat.execute(["welcome.txt"].into_iter().collect(), &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, WELCOME_TEXT);
    }

    #[tokio::test]
    async fn test_cat_missing_operand() {
        let mut ctx = make_ctx();
        let result = Cat.execute(ToolArgs::new(), &mut ctx).await;
        assert_eq!(result.err, "cat: missing operand");
    }

    #[tokio::test]
    async fn test_cat_directory() {
        let mut ctx = make_ctx();
        let result = Cat.execute(["documents"].into_iter().collect(), &mut ctx).await;
        assert_eq!(result.err, "cat: documents: Is a directory");
    }
}
