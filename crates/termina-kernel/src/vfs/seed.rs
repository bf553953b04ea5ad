//! The tree every session starts from.

use super::node::{DirNode, FileNode, Meta};

pub const WELCOME_TEXT: &str = "Welcome to the Linux Terminal Learning Platform!\n\n\
Type \"help\" to see available commands.\n\
Type \"!tutorial\" to start the interactive tutorial.\n\
Type \"!hint\" for help on the current challenge.\n";

const HOSTS_TEXT: &str = "127.0.0.1 localhost\n::1 localhost\n";

/// Build the seed tree for `user`, whose home is `/home/<user>`.
pub fn seed_tree(user: &str) -> DirNode {
    let home = DirNode::new(user, user)
        .with_child(FileNode::new("welcome.txt", WELCOME_TEXT, user))
        .with_child(DirNode::new("documents", user))
        .with_child(DirNode::new("downloads", user));

    DirNode::new("/", "root")
        .with_child(DirNode::new("home", "root").with_child(home))
        .with_child(DirNode::new("etc", "root").with_child(FileNode::new("hosts", HOSTS_TEXT, "root")))
        .with_child(DirNode::with_meta("tmp", Meta::with_permissions("drwxrwxrwt", "root")))
        .with_child(DirNode::new("var", "root").with_child(DirNode::new("log", "root")))
}
