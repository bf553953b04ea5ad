//! ls — List directory contents.

use async_trait::async_trait;
use termina_types::{ExecResult, NodeInfo, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

const MAN_PAGE: &str = "NAME
    ls - list directory contents

SYNOPSIS
    ls [OPTION]... [FILE]...

DESCRIPTION
    List information about the FILEs (the current directory by default).

OPTIONS
    -a, --all
        do not ignore entries starting with .
    -l
        use a long listing format
    -h, --help
        display this help and exit";

/// Ls tool: list directory contents.
pub struct Ls;

/// Options parsed from the argument list.
#[derive(Debug, Default)]
struct LsOptions<'a> {
    all: bool,
    long: bool,
    path: Option<&'a str>,
}

impl<'a> LsOptions<'a> {
    /// Short flags may be clustered (`-la`, `-al`). The last operand wins.
    fn parse(args: &'a ToolArgs) -> Self {
        let mut opts = Self::default();
        for arg in &args.positional {
            if arg == "--all" {
                opts.all = true;
            } else if let Some(cluster) = arg.strip_prefix('-') {
                if cluster.starts_with('-') {
                    continue;
                }
                for c in cluster.chars() {
                    match c {
                        'a' => opts.all = true,
                        'l' => opts.long = true,
                        _ => {}
                    }
                }
            } else {
                opts.path = Some(arg.as_str());
            }
        }
        opts
    }
}

#[async_trait]
impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents")
            .usage("ls [OPTION]... [FILE]...")
            .example("ls")
            .example("ls -l")
            .example("ls -a")
            .example("ls -la /home")
            .man_page(MAN_PAGE)
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let opts = LsOptions::parse(&args);

        let entries = match ctx.vfs.list_directory(opts.path) {
            Ok(entries) => entries,
            Err(e) => {
                return ExecResult::failure(
                    1,
                    format!("ls: cannot access '{}': {}", opts.path.unwrap_or("."), e),
                );
            }
        };

        let visible = entries.iter().filter(|e| opts.all || !e.is_hidden());
        if opts.long {
            let lines: Vec<String> = visible.map(format_long).collect();
            ExecResult::success(lines.join("\n"))
        } else {
            let names: Vec<&str> = visible.map(|e| e.name.as_str()).collect();
            ExecResult::success(names.join("  ")).with_best_practice(
                "Tip: Use \"ls -l\" for detailed file information including permissions and sizes.",
            )
        }
    }
}

/// `<perm> <owner> <size right-aligned to 8> <date> <name>`
fn format_long(entry: &NodeInfo) -> String {
    format!(
        "{} {} {:>8} {} {}",
        entry.permissions,
        entry.owner,
        entry.size,
        entry.modified.format("%-m/%-d/%Y"),
        entry.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    fn make_ctx() -> ExecContext {
        let mut vfs = VirtualFileSystem::new();
        vfs.create_file(".profile", "export X=1").unwrap();
        ExecContext::new(vfs)
    }

    fn args(list: &[&str]) -> ToolArgs {
        list.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_ls_cwd() {
        let mut ctx = make_ctx();
        let result = Ls.execute(ToolArgs::new(), &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "welcome.txt  documents  downloads");
        assert!(result.best_practice.is_some());
    }

    #[tokio::test]
    async fn test_ls_hides_dotfiles_by_default() {
        let mut ctx = make_ctx();
        let result = Ls.execute(ToolArgs::new(), &mut ctx).await;
        assert!(!result.out.contains(".profile"));

        let result = Ls.execute(args(&["-a"]), &mut ctx).await;
        assert!(result.out.contains(".profile"));

        let result = Ls.execute(args(&["--all"]), &mut ctx).await;
        assert!(result.out.contains(".profile"));
    }

    #[tokio::test]
    async fn test_ls_long_format() {
        let mut ctx = make_ctx();
        let result = Ls.execute(args(&["-l", "/etc"]), &mut ctx).await;
        assert!(result.ok());
        assert!(result.best_practice.is_none());
        let line = result.out.lines().next().unwrap();
        assert!(line.starts_with("-rw-r--r-- root       34 "), "got {line:?}");
        assert!(line.ends_with(" hosts"));
    }

    #[tokio::test]
    async fn test_ls_clustered_flags() {
        let mut ctx = make_ctx();
        for flags in ["-la", "-al"] {
            let result = Ls.execute(args(&[flags]), &mut ctx).await;
            assert_eq!(result.out.lines().count(), 4, "{flags}");
        }
    }

    #[tokio::test]
    async fn test_ls_file_lists_itself() {
        let mut ctx = make_ctx();
        let result = Ls.execute(args(&["welcome.txt"]), &mut ctx).await;
        assert_eq!(result.out, "welcome.txt");
    }

    #[tokio::test]
    async fn test_ls_missing() {
        let mut ctx = make_ctx();
        let result = Ls.execute(args(&["nope"]), &mut ctx).await;
        assert!(!result.ok());
        assert_eq!(result.err, "ls: cannot access 'nope': No such file or directory");
    }
}
