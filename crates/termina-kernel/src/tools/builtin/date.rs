//! date — Print the current date and time.

use async_trait::async_trait;
use chrono::Local;
use termina_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Rendering used by `date`, e.g. `Tue Mar 04 2025 14:05:09 GMT+0100`.
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Date tool.
pub struct Date;

#[async_trait]
impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Display or set the system date and time")
            .usage("date")
            .example("date")
            .man_page(
                "NAME
    date - print or set the system date and time

SYNOPSIS
    date

DESCRIPTION
    Display the current date and time.",
            )
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(Local::now().format(DATE_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    #[tokio::test]
    async fn test_date_shape() {
        let mut ctx = ExecContext::new(VirtualFileSystem::new());
        let result = Date.execute(ToolArgs::new(), &mut ctx).await;
        assert!(result.ok());
        assert!(result.out.contains(" GMT"));
        assert_eq!(result.out.split_whitespace().count(), 6);
    }
}
