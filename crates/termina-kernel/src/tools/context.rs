//! Execution context for tools.

use termina_types::ToolSchema;

use crate::vfs::VirtualFileSystem;

/// Execution context passed to tools.
///
/// Owns the filesystem for one session. Tools borrow it mutably for the
/// duration of a single command.
pub struct ExecContext {
    /// The session's filesystem, including the current directory.
    pub vfs: VirtualFileSystem,
    /// Tool schemas for `help` and `man`, in registration order.
    pub tool_schemas: Vec<ToolSchema>,
}

impl ExecContext {
    /// Create a context around `vfs` with no tool schemas.
    pub fn new(vfs: VirtualFileSystem) -> Self {
        Self {
            vfs,
            tool_schemas: Vec::new(),
        }
    }

    /// Create a context that knows about the registered tools.
    pub fn with_schemas(vfs: VirtualFileSystem, tool_schemas: Vec<ToolSchema>) -> Self {
        Self { vfs, tool_schemas }
    }

    /// The session user name.
    pub fn user(&self) -> &str {
        self.vfs.user()
    }

    /// Current working directory as an absolute path.
    pub fn cwd(&self) -> String {
        self.vfs.current_path()
    }

    /// Look up a tool schema by name.
    pub fn schema(&self, name: &str) -> Option<&ToolSchema> {
        self.tool_schemas.iter().find(|s| s.name == name)
    }
}
