//! The command trait.

use async_trait::async_trait;
use termina_types::{ExecResult, ToolArgs, ToolSchema};

use super::context::ExecContext;

/// A built-in command.
///
/// Tools never panic on bad input: failures come back as a non-zero
/// `ExecResult` carrying a shell-style message.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}
