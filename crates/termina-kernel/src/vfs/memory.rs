//! The in-memory virtual filesystem.
//!
//! Paths are resolved to segment lists and walked from the root. The current
//! directory is stored the same way and always names an existing directory.

use termina_types::NodeInfo;

use super::error::{VfsError, VfsResult};
use super::node::{DirNode, FileNode, Node};
use super::seed::seed_tree;

/// In-memory filesystem with a current-directory cursor.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    root: Node,
    current: Vec<String>,
    user: String,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem {
    /// Seeded filesystem for the default user, positioned at `/home/user`.
    pub fn new() -> Self {
        Self::for_user("user")
    }

    /// Seeded filesystem for `user`, positioned at their home directory.
    pub fn for_user(user: &str) -> Self {
        let mut vfs = Self {
            root: seed_tree(user).into(),
            current: Vec::new(),
            user: user.to_string(),
        };
        vfs.current = vfs.home_segments();
        vfs
    }

    /// A filesystem holding only an empty root, positioned at `/`.
    pub fn empty(user: &str) -> Self {
        Self {
            root: DirNode::new("/", "root").into(),
            current: Vec::new(),
            user: user.to_string(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn current_path(&self) -> String {
        format_path(&self.current)
    }

    pub fn home(&self) -> String {
        format_path(&self.home_segments())
    }

    fn home_segments(&self) -> Vec<String> {
        vec!["home".to_string(), self.user.clone()]
    }

    /// Resolve `path` to absolute, normalized segments.
    ///
    /// A leading `/` starts at the root, a leading `~` at the home directory,
    /// anything else at the current directory. `.` is dropped and `..` pops
    /// one segment (a no-op at the root). Existence is not checked.
    pub fn resolve_path(&self, path: &str) -> Vec<String> {
        let (mut segments, rest) = if let Some(rest) = path.strip_prefix('/') {
            (Vec::new(), rest)
        } else if path == "~" || path.starts_with("~/") {
            (self.home_segments(), &path[1..])
        } else {
            (self.current.clone(), path)
        };

        for part in rest.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }
        segments
    }

    fn lookup(&self, segments: &[String]) -> Option<&Node> {
        let mut node = &self.root;
        for seg in segments {
            node = node.as_dir()?.child(seg)?;
        }
        Some(node)
    }

    fn lookup_mut(&mut self, segments: &[String]) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for seg in segments {
            node = node.as_dir_mut()?.child_mut(seg)?;
        }
        Some(node)
    }

    /// The directory that would hold the last segment, plus that segment.
    fn parent_mut<'a>(&mut self, segments: &'a [String]) -> VfsResult<(&mut DirNode, &'a str)> {
        let (name, parents) = segments.split_last().ok_or(VfsError::Busy)?;
        let parent = self
            .lookup_mut(parents)
            .and_then(Node::as_dir_mut)
            .ok_or(VfsError::NotFound)?;
        Ok((parent, name.as_str()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lookup(&self.resolve_path(path)).is_some()
    }

    pub fn stat(&self, path: &str) -> VfsResult<NodeInfo> {
        self.lookup(&self.resolve_path(path))
            .map(Node::info)
            .ok_or(VfsError::NotFound)
    }

    /// Move the cursor. Returns the new current path.
    pub fn change_directory(&mut self, path: &str) -> VfsResult<String> {
        let segments = self.resolve_path(path);
        match self.lookup(&segments) {
            None => Err(VfsError::NotFound),
            Some(Node::File(_)) => Err(VfsError::NotADirectory),
            Some(Node::Directory(_)) => {
                self.current = segments;
                Ok(self.current_path())
            }
        }
    }

    /// List a directory's children in insertion order. A file lists as itself.
    pub fn list_directory(&self, path: Option<&str>) -> VfsResult<Vec<NodeInfo>> {
        let segments = match path {
            Some(p) => self.resolve_path(p),
            None => self.current.clone(),
        };
        match self.lookup(&segments) {
            None => Err(VfsError::NotFound),
            Some(file @ Node::File(_)) => Ok(vec![file.info()]),
            Some(Node::Directory(dir)) => Ok(dir.children().iter().map(Node::info).collect()),
        }
    }

    pub fn read_file(&self, path: &str) -> VfsResult<&str> {
        match self.lookup(&self.resolve_path(path)) {
            None => Err(VfsError::NotFound),
            Some(Node::Directory(_)) => Err(VfsError::IsADirectory),
            Some(Node::File(f)) => Ok(&f.content),
        }
    }

    pub fn create_directory(&mut self, path: &str) -> VfsResult<()> {
        let segments = self.resolve_path(path);
        if segments.is_empty() {
            return Err(VfsError::AlreadyExists);
        }
        let user = self.user.clone();
        let (parent, name) = self.parent_mut(&segments)?;
        if parent.child(name).is_some() {
            return Err(VfsError::AlreadyExists);
        }
        parent.insert(DirNode::new(name, &user).into());
        parent.meta.touch();
        Ok(())
    }

    /// Create or overwrite a file. A directory at the target fails `IsADirectory`.
    pub fn create_file(&mut self, path: &str, content: &str) -> VfsResult<()> {
        let segments = self.resolve_path(path);
        if segments.is_empty() {
            return Err(VfsError::IsADirectory);
        }
        let user = self.user.clone();
        let (parent, name) = self.parent_mut(&segments)?;
        match parent.child_mut(name) {
            Some(Node::Directory(_)) => Err(VfsError::IsADirectory),
            Some(Node::File(f)) => {
                f.content = content.to_string();
                f.meta.touch();
                Ok(())
            }
            None => {
                parent.insert(FileNode::new(name, content, &user).into());
                parent.meta.touch();
                Ok(())
            }
        }
    }

    /// Refresh the modified time of an existing node, or create an empty file.
    pub fn touch_file(&mut self, path: &str) -> VfsResult<()> {
        let segments = self.resolve_path(path);
        match self.lookup_mut(&segments) {
            Some(Node::File(f)) => {
                f.meta.touch();
                Ok(())
            }
            Some(Node::Directory(d)) => {
                d.meta.touch();
                Ok(())
            }
            None => self.create_file(path, ""),
        }
    }

    pub fn remove_file(&mut self, path: &str) -> VfsResult<()> {
        let segments = self.resolve_path(path);
        match self.lookup(&segments) {
            None => return Err(VfsError::NotFound),
            Some(Node::Directory(_)) => return Err(VfsError::IsADirectory),
            Some(Node::File(_)) => {}
        }
        let (parent, name) = self.parent_mut(&segments)?;
        parent.remove(name);
        parent.meta.touch();
        Ok(())
    }

    /// Remove a directory, and with `recursive` everything below it.
    ///
    /// If the cursor was inside the removed subtree it moves to the removed
    /// directory's parent.
    pub fn remove_directory(&mut self, path: &str, recursive: bool) -> VfsResult<()> {
        let segments = self.resolve_path(path);
        match self.lookup(&segments) {
            None => return Err(VfsError::NotFound),
            Some(Node::File(_)) => return Err(VfsError::NotADirectory),
            Some(Node::Directory(dir)) => {
                if segments.is_empty() {
                    return Err(VfsError::Busy);
                }
                if !recursive && !dir.is_empty() {
                    return Err(VfsError::NotEmpty);
                }
            }
        }
        let (parent, name) = self.parent_mut(&segments)?;
        parent.remove(name);
        parent.meta.touch();

        if self.current.starts_with(&segments) {
            self.current = segments[..segments.len() - 1].to_vec();
        }
        Ok(())
    }
}

/// Render segments as an absolute path; the empty list is `/`.
pub fn format_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &str) -> Vec<String> {
        path.split('/').filter(|s| !s.is_empty()).map(String::from).collect()
    }

    #[test]
    fn test_seeded_cursor_is_home() {
        let vfs = VirtualFileSystem::new();
        assert_eq!(vfs.current_path(), "/home/user");
        assert_eq!(vfs.home(), "/home/user");
    }

    #[test]
    fn test_resolve_relative_and_parent() {
        let vfs = VirtualFileSystem::new();
        assert_eq!(vfs.resolve_path("documents"), segs("/home/user/documents"));
        assert_eq!(vfs.resolve_path(".."), segs("/home"));
        assert_eq!(vfs.resolve_path("../../.."), Vec::<String>::new());
        assert_eq!(vfs.resolve_path("./a/./b/../c"), segs("/home/user/a/c"));
    }

    #[test]
    fn test_resolve_absolute_is_normalized() {
        let vfs = VirtualFileSystem::new();
        assert_eq!(vfs.resolve_path("/etc/../tmp//x/."), segs("/tmp/x"));
        assert_eq!(vfs.resolve_path("/.."), Vec::<String>::new());
    }

    #[test]
    fn test_resolve_tilde() {
        let mut vfs = VirtualFileSystem::new();
        vfs.change_directory("/etc").unwrap();
        assert_eq!(vfs.resolve_path("~"), segs("/home/user"));
        assert_eq!(vfs.resolve_path("~/documents"), segs("/home/user/documents"));
        // Only a leading tilde expands
        assert_eq!(vfs.resolve_path("~x"), segs("/etc/~x"));
    }

    #[test]
    fn test_cd_file_is_not_a_directory() {
        let mut vfs = VirtualFileSystem::new();
        assert_eq!(vfs.change_directory("welcome.txt"), Err(VfsError::NotADirectory));
        assert_eq!(vfs.change_directory("nope"), Err(VfsError::NotFound));
        assert_eq!(vfs.current_path(), "/home/user");
    }

    #[test]
    fn test_list_file_returns_itself() {
        let vfs = VirtualFileSystem::new();
        let entries = vfs.list_directory(Some("welcome.txt")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "welcome.txt");
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let vfs = VirtualFileSystem::new();
        let names: Vec<_> = vfs
            .list_directory(None)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["welcome.txt", "documents", "downloads"]);
    }

    #[test]
    fn test_read_directory_fails() {
        let vfs = VirtualFileSystem::new();
        assert_eq!(vfs.read_file("documents"), Err(VfsError::IsADirectory));
        assert_eq!(vfs.read_file("missing"), Err(VfsError::NotFound));
        assert_eq!(vfs.read_file("/etc/hosts").unwrap(), "127.0.0.1 localhost\n::1 localhost\n");
    }

    #[test]
    fn test_create_file_over_directory_fails() {
        let mut vfs = VirtualFileSystem::new();
        assert_eq!(vfs.create_file("documents", "x"), Err(VfsError::IsADirectory));
        assert!(vfs.stat("documents").unwrap().is_dir());
    }

    #[test]
    fn test_create_file_overwrites() {
        let mut vfs = VirtualFileSystem::new();
        vfs.create_file("notes.txt", "one").unwrap();
        vfs.create_file("notes.txt", "two").unwrap();
        assert_eq!(vfs.read_file("notes.txt").unwrap(), "two");
        assert_eq!(vfs.stat("notes.txt").unwrap().size, 3);
    }

    #[test]
    fn test_create_under_missing_parent() {
        let mut vfs = VirtualFileSystem::new();
        assert_eq!(vfs.create_directory("a/b"), Err(VfsError::NotFound));
        assert_eq!(vfs.create_file("a/b.txt", ""), Err(VfsError::NotFound));
        // A file in the parent chain does not resolve to a directory
        assert_eq!(vfs.create_directory("welcome.txt/sub"), Err(VfsError::NotFound));
    }

    #[test]
    fn test_touch_keeps_content() {
        let mut vfs = VirtualFileSystem::new();
        let before = vfs.stat("welcome.txt").unwrap().modified;
        vfs.touch_file("welcome.txt").unwrap();
        let after = vfs.stat("welcome.txt").unwrap();
        assert!(after.modified >= before);
        assert_eq!(vfs.read_file("welcome.txt").unwrap(), crate::vfs::WELCOME_TEXT);

        vfs.touch_file("new.txt").unwrap();
        assert_eq!(vfs.read_file("new.txt").unwrap(), "");
    }

    #[test]
    fn test_remove_root_is_busy() {
        let mut vfs = VirtualFileSystem::new();
        assert_eq!(vfs.remove_directory("/", true), Err(VfsError::Busy));
        assert!(vfs.exists("/home"));
    }

    #[test]
    fn test_remove_cwd_moves_cursor_to_parent() {
        let mut vfs = VirtualFileSystem::new();
        vfs.create_directory("documents/deep").unwrap();
        vfs.change_directory("documents/deep").unwrap();
        vfs.remove_directory("/home/user/documents", true).unwrap();
        assert_eq!(vfs.current_path(), "/home/user");
        assert!(!vfs.exists("/home/user/documents"));
    }

    #[test]
    fn test_remove_file_and_directory_kinds() {
        let mut vfs = VirtualFileSystem::new();
        assert_eq!(vfs.remove_file("documents"), Err(VfsError::IsADirectory));
        assert_eq!(vfs.remove_directory("welcome.txt", false), Err(VfsError::NotADirectory));
        vfs.remove_file("welcome.txt").unwrap();
        assert!(!vfs.exists("welcome.txt"));
    }

    #[test]
    fn test_empty_vfs_root_only() {
        let vfs = VirtualFileSystem::empty("user");
        assert_eq!(vfs.current_path(), "/");
        assert!(vfs.list_directory(None).unwrap().is_empty());
    }
}
