//! Built-in tools for termina.
//!
//! These tools are always available and provide core functionality.

mod cat;
mod cd;
mod clear;
mod date;
mod echo;
mod find;
mod grep;
mod help;
mod history;
mod ls;
mod man;
mod mkdir;
mod pwd;
mod rm;
mod rmdir;
mod touch;
mod whoami;

pub use date::DATE_FORMAT;
pub use help::META_COMMANDS;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
///
/// Registration order is the order `help` lists them.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(ls::Ls);
    registry.register(cd::Cd);
    registry.register(pwd::Pwd);
    registry.register(cat::Cat);
    registry.register(mkdir::Mkdir);
    registry.register(touch::Touch);
    registry.register(rm::Rm);
    registry.register(rmdir::Rmdir);
    registry.register(echo::Echo);
    registry.register(clear::Clear);
    registry.register(help::Help);
    registry.register(man::Man);
    registry.register(grep::Grep);
    registry.register(find::Find);
    registry.register(whoami::Whoami);
    registry.register(date::Date);
    registry.register(history::History);
}
