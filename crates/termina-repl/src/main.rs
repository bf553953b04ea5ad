//! termina CLI entry point.
//!
//! Usage:
//!   termina                      # Interactive terminal
//!   termina -c <command>         # Run one line and exit
//!   termina script.txt           # Run a file, one line per command
//!   termina --config <path> ...  # Use a specific config.toml

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use termina_repl::{run_lines, OutputContext, Repl, TerminaConfig};

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the transcript
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = match take_config_flag(&mut args)? {
        Some(path) => TerminaConfig::load_from(&path)?,
        None => TerminaConfig::load()?,
    };

    match args.first().map(|s| s.as_str()) {
        None => {
            termina_repl::run(config)?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!(
                "termina {} ({} {})",
                env!("CARGO_PKG_VERSION"),
                env!("TERMINA_GIT_HASH"),
                env!("TERMINA_BUILD_DATE")
            );
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let line = args.get(1).context("-c requires a command argument")?;
            run_script_source(&config, line)
        }

        Some(path) if !path.starts_with('-') => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script: {path}"))?;
            run_script_source(&config, &source)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'termina --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Remove `--config <path>` or `--config=<path>` from `args`.
fn take_config_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(pos) = args
        .iter()
        .position(|a| a == "--config" || a.starts_with("--config="))
    else {
        return Ok(None);
    };

    let flag = args.remove(pos);
    if let Some(path) = flag.strip_prefix("--config=") {
        return Ok(Some(PathBuf::from(path)));
    }
    if pos >= args.len() {
        anyhow::bail!("--config requires a path argument");
    }
    Ok(Some(PathBuf::from(args.remove(pos))))
}

fn run_script_source(config: &TerminaConfig, source: &str) -> Result<ExitCode> {
    let context = termina_repl::format::detect_context();
    let color = termina_repl::format::use_color(context);
    let mut repl = Repl::with_output(config, OutputContext::Piped, color)?;

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let ok = rt.block_on(run_lines(&mut repl, source.lines()));

    if ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_help() {
    println!(
        r#"termina v{}: learn the Linux command line

Usage:
  termina                      Interactive terminal
  termina -c <command>         Run one line and exit
  termina <file>               Run a file, one command per line

Options:
  -c <command>                 Run a command line and exit
  --config <path>              Read settings from <path>
  -h, --help                   Show this help
  -V, --version                Show version

Inside the terminal:
  help                         List shell commands
  !tutorial                    Start the tutorial
  !hint, !skip, !stats         Challenge helpers
  exit                         Leave

Logging:
  RUST_LOG=termina_kernel=debug termina
"#,
        env!("CARGO_PKG_VERSION")
    );
}
