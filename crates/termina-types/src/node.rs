//! Filesystem node snapshots returned by listing and stat operations.

use chrono::{DateTime, Local};

/// Kind of filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// Owned view of a node's metadata, detached from the tree.
///
/// Metadata is descriptive only; nothing in termina enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    /// Name of the entry (not full path). The root is named `/`.
    pub name: String,
    pub kind: NodeKind,
    /// Size in bytes (0 for directories).
    pub size: u64,
    /// Display string such as `-rw-r--r--`.
    pub permissions: String,
    pub owner: String,
    pub modified: DateTime<Local>,
}

impl NodeInfo {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// True for dotfiles, which `ls` hides without `-a`.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
