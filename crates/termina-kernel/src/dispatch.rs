//! Command dispatch: the single execution path for shell commands.
//!
//! ```text
//! input ──▶ parse_command() ──▶ empty?        ──▶ success("")
//!                               --help?       ──▶ schema.help_summary()
//!                               unknown name? ──▶ Command not found
//!                               otherwise     ──▶ tool.execute(args, ctx)
//! ```

use std::sync::Arc;

use termina_types::{CommandError, ExecResult, ToolArgs, ToolSchema};
use tracing::debug;

use crate::tools::{register_builtins, ExecContext, ToolRegistry};

/// A command line split into name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command name; empty for blank input.
    pub name: String,
    pub args: ToolArgs,
}

/// Split `input` on runs of whitespace. No quoting, globbing or pipes.
pub fn parse_command(input: &str) -> ParsedCommand {
    let mut parts = input.split_whitespace();
    let name = parts.next().unwrap_or_default().to_string();
    ParsedCommand {
        name,
        args: parts.collect(),
    }
}

/// Routes command lines to registered tools.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// A dispatcher over the builtin command table.
    pub fn new() -> Self {
        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);
        Self::with_registry(registry)
    }

    pub fn with_registry(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Schemas in registration order, for seeding an `ExecContext`.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.registry.schemas()
    }

    /// Parse and run one command line. Never panics on unknown input.
    pub async fn execute_command(&self, input: &str, ctx: &mut ExecContext) -> ExecResult {
        let ParsedCommand { name, args } = parse_command(input);
        if name.is_empty() {
            return ExecResult::success("");
        }

        let Some(tool) = self.registry.get(&name) else {
            debug!(command = %name, "command not found");
            return ExecResult::failure(127, CommandError::CommandNotFound(name).to_string());
        };

        if args.has_flag("--help") {
            return ExecResult::success(tool.schema().help_summary());
        }

        debug!(command = %name, args = ?args.positional, "dispatch");
        let result = tool.execute(args, ctx).await;
        debug!(command = %name, code = result.code, "completed");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    fn make_ctx(dispatcher: &Dispatcher) -> ExecContext {
        ExecContext::with_schemas(VirtualFileSystem::new(), dispatcher.schemas())
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let parsed = parse_command("  ls   -la\t/home  ");
        assert_eq!(parsed.name, "ls");
        assert_eq!(parsed.args.positional, vec!["-la", "/home"]);
    }

    #[test]
    fn test_parse_blank() {
        let parsed = parse_command("   ");
        assert_eq!(parsed.name, "");
        assert!(parsed.args.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_is_success() {
        let dispatcher = Dispatcher::new();
        let mut ctx = make_ctx(&dispatcher);
        let result = dispatcher.execute_command("", &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "");
    }

    #[tokio::test]
    async fn test_help_flag_short_circuits() {
        let dispatcher = Dispatcher::new();
        let mut ctx = make_ctx(&dispatcher);
        let result = dispatcher.execute_command("rm --help", &mut ctx).await;
        assert!(result.ok());
        assert_eq!(
            result.out,
            "Usage: rm [OPTION]... [FILE]...\n\nRemove files or directories\n\nExamples:\nrm file.txt\nrm -r directory"
        );
        // The command itself never ran
        assert!(ctx.vfs.exists("welcome.txt"));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let dispatcher = Dispatcher::new();
        let mut ctx = make_ctx(&dispatcher);
        let result = dispatcher.execute_command("frobnicate --help", &mut ctx).await;
        assert!(!result.ok());
        assert_eq!(
            result.err,
            "Command not found: frobnicate\nType 'help' to see available commands."
        );
    }
}
