//! Tool system for termina.
//!
//! Every shell command is a tool implementing the `Tool` trait. The
//! registry is filled once with the builtins and never changes afterwards.
//!
//! ```text
//! ToolRegistry
//! └── Builtins (ls, cd, cat, grep, find, ...)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::{register_builtins, DATE_FORMAT, META_COMMANDS};
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::Tool;
