//! find — Filter the entries of one directory by name and type.
//!
//! Only the immediate listing of the search path is examined.

use async_trait::async_trait;
use termina_types::{ExecResult, NodeKind, ToolArgs, ToolSchema};

use super::grep::strip_quotes;
use crate::tools::{ExecContext, Tool};

const MAN_PAGE: &str = "NAME
    find - search for files in a directory hierarchy

SYNOPSIS
    find [PATH] [OPTIONS]

DESCRIPTION
    Search for files in PATH that match specified criteria.

OPTIONS
    -name PATTERN
        Base of file name matches PATTERN
    -type TYPE
        File is of type TYPE (f=file, d=directory)";

/// Find tool.
pub struct Find;

#[async_trait]
impl Tool for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("find", "Search for files in a directory hierarchy")
            .usage("find [PATH] [OPTIONS]")
            .example("find . -name \"*.txt\"")
            .example("find /home -type f")
            .man_page(MAN_PAGE)
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let search_path = args.get(0).unwrap_or(".");
        let mut name_pattern = String::new();
        let mut type_filter: Option<NodeKind> = None;

        let mut rest = args.positional.iter().skip(1);
        while let Some(arg) = rest.next() {
            match arg.as_str() {
                "-name" => {
                    if let Some(p) = rest.next() {
                        name_pattern = strip_quotes(p).replace('*', "");
                    }
                }
                "-type" => match rest.next().map(String::as_str) {
                    Some("f") => type_filter = Some(NodeKind::File),
                    Some("d") => type_filter = Some(NodeKind::Directory),
                    _ => {}
                },
                _ => {}
            }
        }

        let entries = match ctx.vfs.list_directory(Some(search_path)) {
            Ok(entries) => entries,
            Err(e) => return ExecResult::failure(1, format!("find: '{}': {}", search_path, e)),
        };

        let base = search_path.trim_end_matches('/');
        let lines: Vec<String> = entries
            .iter()
            .filter(|e| e.name.contains(&name_pattern))
            .filter(|e| type_filter.is_none_or(|kind| e.kind == kind))
            .map(|e| format!("{}/{}", base, e.name))
            .collect();

        ExecResult::success(lines.join("\n")).with_best_practice(
            "Combine find with other commands using pipes for powerful file operations.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    fn make_ctx() -> ExecContext {
        let mut vfs = VirtualFileSystem::new();
        vfs.create_file("notes.txt", "").unwrap();
        vfs.create_file("script.sh", "").unwrap();
        ExecContext::new(vfs)
    }

    fn args(list: &[&str]) -> ToolArgs {
        list.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_find_name_strips_wildcards() {
        let mut ctx = make_ctx();
        let result = Find.execute(args(&[".", "-name", "\"*.txt\""]), &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "./welcome.txt\n./notes.txt");
    }

    #[tokio::test]
    async fn test_find_type_dir() {
        let mut ctx = make_ctx();
        let result = Find.execute(args(&["/home/user", "-type", "d"]), &mut ctx).await;
        assert_eq!(result.out, "/home/user/documents\n/home/user/downloads");
    }

    #[tokio::test]
    async fn test_find_defaults_to_cwd() {
        let mut ctx = make_ctx();
        let result = Find.execute(ToolArgs::new(), &mut ctx).await;
        assert_eq!(result.out.lines().count(), 5);
        assert!(result.out.lines().all(|l| l.starts_with("./")));
    }

    #[tokio::test]
    async fn test_find_root_path() {
        let mut ctx = make_ctx();
        let result = Find.execute(args(&["/", "-name", "etc"]), &mut ctx).await;
        assert_eq!(result.out, "/etc");
    }

    #[tokio::test]
    async fn test_find_missing_path() {
        let mut ctx = make_ctx();
        let result = Find.execute(args(&["ghost"]), &mut ctx).await;
        assert_eq!(result.err, "find: 'ghost': No such file or directory");
    }
}
