//! Virtual Filesystem (VFS) for termina.
//!
//! A single in-memory tree rooted at `/` plus a current-directory cursor:
//!
//! ```text
//! /
//! ├── home/
//! │   └── user/            # initial cwd (`~`)
//! │       ├── welcome.txt
//! │       ├── documents/
//! │       └── downloads/
//! ├── etc/hosts
//! ├── tmp/
//! └── var/log/
//! ```
//!
//! Nodes are a tagged enum (`Node::File` / `Node::Directory`) and every
//! operation matches on it exhaustively. Mutations either succeed or leave
//! the tree untouched.

mod error;
mod memory;
mod node;
mod seed;

pub use error::{VfsError, VfsResult};
pub use memory::VirtualFileSystem;
pub use node::{DirNode, FileNode, Meta, Node};
pub use seed::{seed_tree, WELCOME_TEXT};
