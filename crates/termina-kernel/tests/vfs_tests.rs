//! Integration tests for the virtual filesystem.

use rstest::rstest;
use termina_kernel::vfs::{VfsError, VirtualFileSystem};

fn render(vfs: &VirtualFileSystem, path: &str) -> String {
    format!("/{}", vfs.resolve_path(path).join("/"))
}

// ============================================================================
// Path Resolution
// ============================================================================

#[rstest]
#[case::relative("documents", "/home/user/documents")]
#[case::dot(".", "/home/user")]
#[case::parent("..", "/home")]
#[case::parent_past_root("../../../..", "/")]
#[case::absolute("/etc/hosts", "/etc/hosts")]
#[case::absolute_dotdot("/var/log/../../tmp", "/tmp")]
#[case::double_slash("/etc//hosts", "/etc/hosts")]
#[case::trailing_slash("documents/", "/home/user/documents")]
#[case::tilde("~", "/home/user")]
#[case::tilde_child("~/downloads", "/home/user/downloads")]
fn resolve_path_cases(#[case] input: &str, #[case] expected: &str) {
    let vfs = VirtualFileSystem::new();
    assert_eq!(render(&vfs, input), expected);
}

#[rstest]
#[case("/")]
#[case("/home/user")]
#[case("/var/log")]
#[case("/a/b/c")]
fn resolve_is_idempotent_for_normalized_paths(#[case] path: &str) {
    let mut vfs = VirtualFileSystem::new();
    vfs.change_directory("/etc").unwrap();
    let once = render(&vfs, path);
    let twice = render(&vfs, &once);
    assert_eq!(once, path);
    assert_eq!(twice, once);
}

// ============================================================================
// Cursor Invariant
// ============================================================================

#[test]
fn cd_failure_leaves_cursor() {
    let mut vfs = VirtualFileSystem::new();
    assert_eq!(vfs.change_directory("/nope"), Err(VfsError::NotFound));
    assert_eq!(vfs.change_directory("/etc/hosts"), Err(VfsError::NotADirectory));
    assert_eq!(vfs.current_path(), "/home/user");
}

#[test]
fn removing_ancestor_of_cwd_keeps_cursor_valid() {
    let mut vfs = VirtualFileSystem::new();
    vfs.change_directory("/var/log").unwrap();
    vfs.remove_directory("/var", true).unwrap();
    assert_eq!(vfs.current_path(), "/");
    assert!(vfs.list_directory(None).is_ok());
}

#[test]
fn removing_sibling_does_not_move_cursor() {
    let mut vfs = VirtualFileSystem::new();
    vfs.change_directory("documents").unwrap();
    vfs.remove_directory("../downloads", false).unwrap();
    assert_eq!(vfs.current_path(), "/home/user/documents");
}

// ============================================================================
// Mutations Leave The Tree Unchanged On Failure
// ============================================================================

#[test]
fn mkdir_twice_fails_without_side_effects() {
    let mut vfs = VirtualFileSystem::new();
    vfs.create_directory("projects").unwrap();
    let before = vfs.list_directory(None).unwrap();
    assert_eq!(vfs.create_directory("projects"), Err(VfsError::AlreadyExists));
    assert_eq!(vfs.list_directory(None).unwrap(), before);
}

#[test]
fn rmdir_non_empty_fails() {
    let mut vfs = VirtualFileSystem::new();
    assert_eq!(vfs.remove_directory("/etc", false), Err(VfsError::NotEmpty));
    assert!(vfs.exists("/etc/hosts"));
}

#[test]
fn seeded_metadata() {
    let vfs = VirtualFileSystem::new();
    let tmp = vfs.stat("/tmp").unwrap();
    assert_eq!(tmp.permissions, "drwxrwxrwt");
    assert_eq!(tmp.owner, "root");

    let welcome = vfs.stat("~/welcome.txt").unwrap();
    assert_eq!(welcome.permissions, "-rw-r--r--");
    assert_eq!(welcome.owner, "user");

    let home = vfs.stat("/home/user").unwrap();
    assert_eq!(home.permissions, "drwxr-xr-x");
}

#[test]
fn custom_user_home() {
    let vfs = VirtualFileSystem::for_user("ada");
    assert_eq!(vfs.current_path(), "/home/ada");
    assert_eq!(vfs.stat("welcome.txt").unwrap().owner, "ada");
}
