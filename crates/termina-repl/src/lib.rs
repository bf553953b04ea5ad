//! termina REPL: the terminal front-end for a termina session.
//!
//! This crate owns everything the kernel deliberately leaves out:
//! - Reading lines with rustyline (in-memory history only)
//! - Rendering `TerminalLine`s with colors
//! - Delivering the deferred challenge advance while the user is typing
//! - Loading `config.toml`
//!
//! ```text
//! reader thread ──(Input)──▶ ┌──────────────┐ ◀──(SessionEvent)── advance timer
//!   rustyline                │  async loop  │
//!   ◀──(prompt)───────────── │  select!     │ ──▶ Session::process_line
//!                            └──────────────┘
//! ```

pub mod config;
pub mod format;

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Editor, ExternalPrinter};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use termina_kernel::{Session, SessionEvent, TracingSink, PROMPT_TAIL};
use termina_types::{LineKind, TerminalLine};

pub use config::TerminaConfig;
pub use format::OutputContext;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Words that leave the REPL instead of reaching the session.
const EXIT_WORDS: &[&str] = &["exit", "quit", "logout"];

/// What the caller should do after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print `text` (possibly empty), clearing the screen first if asked.
    /// `failed` is set when any rendered line was an error.
    Output {
        clear_screen: bool,
        failed: bool,
        text: String,
    },
    Exit,
}

/// A session plus the knowledge of how to show it.
pub struct Repl {
    session: Session,
    context: OutputContext,
    color: bool,
}

impl Repl {
    /// A REPL writing to the real stdout, colors detected from the terminal.
    pub fn new(config: &TerminaConfig) -> Result<Self> {
        let context = format::detect_context();
        Self::with_output(config, context, format::use_color(context))
    }

    /// A REPL with an explicit rendering mode.
    ///
    /// Records go to the `termina::records` tracing target at debug level.
    pub fn with_output(config: &TerminaConfig, context: OutputContext, color: bool) -> Result<Self> {
        let session = Session::new(config.to_session_options())
            .context("Failed to load challenge catalog")?
            .with_sink(Arc::new(TracingSink));
        Ok(Self {
            session,
            context,
            color,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The `┌─[user@host]─[cwd]` line printed above the editor prompt.
    /// The line editor only ever sees `PROMPT_TAIL`, which has no newline.
    pub fn prompt_header(&self) -> String {
        self.session.prompt_header()
    }

    /// The banner for a fresh terminal.
    pub fn welcome(&self) -> String {
        self.render(&self.session.welcome())
    }

    /// Process a single line of input.
    ///
    /// `typing` is how long the user spent on the line; pass `Duration::ZERO`
    /// when it is unknown.
    pub async fn process_line(&mut self, line: &str, typing: Duration) -> Step {
        if EXIT_WORDS.contains(&line.trim()) {
            return Step::Exit;
        }

        let response = self.session.process_line(line, typing).await;
        Step::Output {
            clear_screen: response.clear_screen,
            failed: response.lines.iter().any(|l| l.kind == LineKind::Error),
            text: self.render(&response.lines),
        }
    }

    /// Apply a pending advance now. Used when input ends.
    pub fn flush(&mut self) -> String {
        let lines = self.session.settle();
        self.render(&lines)
    }

    fn handle_event(&mut self, event: SessionEvent) -> String {
        let lines = self.session.handle_event(event);
        self.render(&lines)
    }

    fn render(&self, lines: &[TerminalLine]) -> String {
        format::format_lines(lines, self.context, self.color)
    }
}

impl std::fmt::Debug for Repl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repl")
            .field("context", &self.context)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// Print a `Step::Output` to stdout.
pub fn print_step(step: &Step, interactive: bool) {
    if let Step::Output {
        clear_screen, text, ..
    } = step
    {
        if *clear_screen && interactive {
            print!("{CLEAR_SCREEN}");
        }
        if !text.is_empty() {
            println!("{text}");
        }
    }
}

/// Run lines non-interactively, one command per line.
///
/// Blank lines and `#` comments are skipped. The deferred advance is
/// applied before each line, so the transcript matches what a user typing
/// slowly would see. Returns whether the last command succeeded.
pub async fn run_lines<'a>(repl: &mut Repl, lines: impl IntoIterator<Item = &'a str>) -> bool {
    let mut last_ok = true;
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let step = repl.process_line(trimmed, Duration::ZERO).await;
        if step == Step::Exit {
            break;
        }
        print_step(&step, false);
        last_ok = matches!(step, Step::Output { failed: false, .. });
    }

    let tail = repl.flush();
    if !tail.is_empty() {
        println!("{tail}");
    }
    last_ok
}

/// What the reader thread hands back.
#[derive(Debug)]
enum Input {
    Line { text: String, typing: Duration },
    Interrupted,
    Eof,
}

type Printer = Box<dyn ExternalPrinter + Send>;

/// Owns the line editor. Reads one line per prompt it receives.
fn read_lines(
    prompts: std_mpsc::Receiver<String>,
    inputs: mpsc::UnboundedSender<Input>,
    printer_tx: std_mpsc::Sender<Option<Printer>>,
) {
    let mut rl: Editor<(), DefaultHistory> = match Editor::new() {
        Ok(rl) => rl,
        Err(e) => {
            warn!("Failed to create editor: {}", e);
            let _ = printer_tx.send(None);
            let _ = inputs.send(Input::Eof);
            return;
        }
    };

    let printer = match rl.create_external_printer() {
        Ok(p) => Some(Box::new(p) as Printer),
        Err(e) => {
            debug!("No external printer, events print directly: {}", e);
            None
        }
    };
    let _ = printer_tx.send(printer);

    while let Ok(prompt) = prompts.recv() {
        let started = Instant::now();
        let input = match rl.readline(&prompt) {
            Ok(text) => {
                if !text.trim().is_empty()
                    && let Err(e) = rl.add_history_entry(text.as_str())
                {
                    warn!("Failed to add history entry: {}", e);
                }
                Input::Line {
                    text,
                    typing: started.elapsed(),
                }
            }
            Err(ReadlineError::Interrupted) => Input::Interrupted,
            Err(ReadlineError::Eof) => Input::Eof,
            Err(e) => {
                warn!("Read error: {}", e);
                Input::Eof
            }
        };

        let done = matches!(input, Input::Eof);
        if inputs.send(input).is_err() || done {
            break;
        }
    }
}

/// Run the interactive REPL until EOF or `exit`.
pub fn run(config: TerminaConfig) -> Result<()> {
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    runtime.block_on(run_interactive(config))
}

async fn run_interactive(config: TerminaConfig) -> Result<()> {
    let mut repl = Repl::new(&config)?;
    let mut events = repl
        .session
        .take_events()
        .context("Session events already taken")?;

    let (prompt_tx, prompt_rx) = std_mpsc::channel::<String>();
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<Input>();
    let (printer_tx, printer_rx) = std_mpsc::channel::<Option<Printer>>();

    let reader = thread::Builder::new()
        .name("termina-readline".to_string())
        .spawn(move || read_lines(prompt_rx, input_tx, printer_tx))
        .context("Failed to spawn reader thread")?;

    let mut printer = printer_rx.recv().ok().flatten();

    println!("{}", repl.welcome());
    println!();

    loop {
        println!("{}", repl.prompt_header());
        if prompt_tx.send(PROMPT_TAIL.to_string()).is_err() {
            break;
        }

        let input = loop {
            tokio::select! {
                Some(event) = events.recv() => {
                    let text = repl.handle_event(event);
                    if text.is_empty() {
                        continue;
                    }
                    match printer.as_mut() {
                        Some(p) => {
                            if let Err(e) = p.print(format!("{text}\n")) {
                                warn!("Failed to print event: {}", e);
                            }
                        }
                        None => println!("{text}"),
                    }
                }
                input = input_rx.recv() => break input,
            }
        };

        match input {
            Some(Input::Line { text, typing }) => {
                let step = repl.process_line(&text, typing).await;
                if step == Step::Exit {
                    break;
                }
                print_step(&step, true);
            }
            Some(Input::Interrupted) => println!("^C"),
            Some(Input::Eof) | None => {
                println!("^D");
                break;
            }
        }
    }

    drop(prompt_tx);
    if reader.join().is_err() {
        warn!("Reader thread panicked");
    }
    Ok(())
}
