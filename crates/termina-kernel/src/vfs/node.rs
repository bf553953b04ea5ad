//! Tree nodes.

use chrono::{DateTime, Local};
use termina_types::{NodeInfo, NodeKind};

pub const FILE_PERMISSIONS: &str = "-rw-r--r--";
pub const DIR_PERMISSIONS: &str = "drwxr-xr-x";

/// Descriptive metadata carried by every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub permissions: String,
    pub owner: String,
    pub modified: DateTime<Local>,
}

impl Meta {
    pub fn file(owner: &str) -> Self {
        Self::with_permissions(FILE_PERMISSIONS, owner)
    }

    pub fn dir(owner: &str) -> Self {
        Self::with_permissions(DIR_PERMISSIONS, owner)
    }

    pub fn with_permissions(permissions: &str, owner: &str) -> Self {
        Self {
            permissions: permissions.to_string(),
            owner: owner.to_string(),
            modified: Local::now(),
        }
    }

    pub fn touch(&mut self) {
        self.modified = Local::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub content: String,
    pub meta: Meta,
}

impl FileNode {
    pub fn new(name: impl Into<String>, content: impl Into<String>, owner: &str) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            meta: Meta::file(owner),
        }
    }

    /// Size in bytes of the content.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// A directory. Children keep insertion order and have unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    pub name: String,
    children: Vec<Node>,
    pub meta: Meta,
}

impl DirNode {
    pub fn new(name: impl Into<String>, owner: &str) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            meta: Meta::dir(owner),
        }
    }

    pub fn with_meta(name: impl Into<String>, meta: Meta) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            meta,
        }
    }

    /// Builder-style child insertion, used when seeding trees.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.insert(child.into());
        self
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name() == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.name() == name)
    }

    /// Insert a child. A sibling with the same name is replaced in place.
    pub fn insert(&mut self, node: Node) {
        match self.children.iter_mut().find(|c| c.name() == node.name()) {
            Some(slot) => *slot = node,
            None => self.children.push(node),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let idx = self.children.iter().position(|c| c.name() == name)?;
        Some(self.children.remove(idx))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileNode),
    Directory(DirNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Directory(d) => &d.name,
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Node::File(f) => &f.meta,
            Node::Directory(d) => &d.meta,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_dir(&self) -> Option<&DirNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }

    pub fn as_dir_mut(&mut self) -> Option<&mut DirNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }

    /// Snapshot of this node's metadata.
    pub fn info(&self) -> NodeInfo {
        let meta = self.meta();
        let (kind, size) = match self {
            Node::File(f) => (NodeKind::File, f.size()),
            Node::Directory(_) => (NodeKind::Directory, 0),
        };
        NodeInfo {
            name: self.name().to_string(),
            kind,
            size,
            permissions: meta.permissions.clone(),
            owner: meta.owner.clone(),
            modified: meta.modified,
        }
    }
}

impl From<FileNode> for Node {
    fn from(f: FileNode) -> Self {
        Node::File(f)
    }
}

impl From<DirNode> for Node {
    fn from(d: DirNode) -> Self {
        Node::Directory(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut dir = DirNode::new("d", "user")
            .with_child(FileNode::new("b", "", "user"))
            .with_child(FileNode::new("a", "", "user"));
        dir.insert(FileNode::new("b", "new", "user").into());

        let names: Vec<_> = dir.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["b", "a"]);
        match dir.child("b") {
            Some(Node::File(f)) => assert_eq!(f.content, "new"),
            other => panic!("expected file, got {:?}", other),
        }
    }

    #[test]
    fn remove_returns_node() {
        let mut dir = DirNode::new("d", "user").with_child(DirNode::new("sub", "user"));
        assert!(dir.remove("sub").is_some());
        assert!(dir.remove("sub").is_none());
        assert!(dir.is_empty());
    }

    #[test]
    fn info_reports_size_and_kind() {
        let file: Node = FileNode::new("f.txt", "hello", "user").into();
        let info = file.info();
        assert_eq!(info.size, 5);
        assert_eq!(info.kind, NodeKind::File);
        assert_eq!(info.permissions, FILE_PERMISSIONS);

        let dir: Node = DirNode::new("d", "root").into();
        let info = dir.info();
        assert_eq!(info.size, 0);
        assert!(info.is_dir());
        assert_eq!(info.owner, "root");
    }
}
