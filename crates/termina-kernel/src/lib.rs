//! termina-kernel: the core of termina.
//!
//! This crate provides:
//!
//! - **VFS**: In-memory filesystem tree with a current-directory cursor
//! - **Tools**: Tool trait, registry, and the builtin shell commands
//! - **Dispatch**: Parsing a command line and routing it to a tool
//! - **Challenge**: Catalogs and the XP/level progression state machine
//! - **Scheduler**: The cancellable delayed advance between challenges
//! - **Session**: One user's terminal tying all of the above together

pub mod badges;
pub mod challenge;
pub mod dispatch;
pub mod scheduler;
pub mod session;
pub mod sink;
pub mod stats;
pub mod tools;
pub mod vfs;

pub use challenge::{Catalog, Category, ChallengeEngine, ChallengeError, EngineState};
pub use dispatch::{parse_command, Dispatcher, ParsedCommand};
pub use scheduler::SessionEvent;
pub use session::{Response, Session, SessionOptions, PROMPT_TAIL};
pub use sink::{MemorySink, NullSink, Record, RecordSink, TracingSink};
pub use tools::{ExecContext, Tool, ToolRegistry};
pub use vfs::{VfsError, VfsResult, VirtualFileSystem};
