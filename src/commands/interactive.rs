//! `cinematch interactive` command - prompt loop
//!
//! Reads one query per line until "exit", end of input or Ctrl-C. Stdin is
//! read on its own thread so an interrupt is noticed while waiting for input.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cli::TuningArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format;
use cinematch_core::error::Result;
use cinematch_core::format::OutputFormat;
use cinematch_core::log_resource_metrics;
use cinematch_core::recommend::Recommender;

pub const PROMPT: &str = "Type in the name of the movie or related term (or 'exit' to close): ";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Whether the loop keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Execute the interactive command
pub fn execute(ctx: &CommandContext, tuning: &TuningArgs) -> Result<()> {
    let config = ctx.config(Some(tuning))?;
    let catalog = ctx.catalog(&config)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let stdout = io::stdout();
    let mut session = Session {
        recommender: Recommender::new(&catalog, &config),
        format: ctx.cli.format,
        limit: config.display.limit,
        quiet: ctx.cli.quiet,
        out: stdout.lock(),
        queries: 0,
    };

    let lines = spawn_line_reader();
    session.run(&lines, &interrupted)?;

    log_resource_metrics!(session.recommender.metrics(), "interactive");
    Ok(())
}

fn spawn_line_reader() -> Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// One prompt session over a fixed catalog
pub struct Session<'a, W: Write> {
    pub recommender: Recommender<'a>,
    pub format: OutputFormat,
    pub limit: usize,
    pub quiet: bool,
    pub out: W,
    pub queries: usize,
}

impl<W: Write> Session<'_, W> {
    /// Handle one input line
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") {
            return Ok(Flow::Exit);
        }
        if query.is_empty() {
            return Ok(Flow::Continue);
        }

        self.queries += 1;
        let outcome = self.recommender.recommend(query);
        let text = format::render(self.format, query, &outcome, self.limit)?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    /// Prompt, read and answer until exit, end of input or interrupt
    pub fn run(&mut self, lines: &Receiver<io::Result<String>>, interrupted: &AtomicBool) -> Result<()> {
        let reason = loop {
            self.prompt()?;

            let line = loop {
                if interrupted.load(Ordering::SeqCst) {
                    break None;
                }
                match lines.recv_timeout(POLL_INTERVAL) {
                    Ok(line) => break Some(line),
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break None,
                }
            };

            let line = match line {
                Some(Ok(line)) => Some(line),
                Some(Err(e)) => {
                    warn!(error = %e, "skipping unreadable input line");
                    continue;
                }
                None => None,
            };

            let Some(line) = line else {
                break if interrupted.load(Ordering::SeqCst) {
                    "interrupted"
                } else {
                    "end_of_input"
                };
            };

            if self.handle_line(&line)? == Flow::Exit {
                break "exit";
            }
        };

        if self.show_prompt() {
            writeln!(self.out)?;
        }
        debug!(reason, queries = self.queries, "interactive_done");
        Ok(())
    }

    fn show_prompt(&self) -> bool {
        self.format == OutputFormat::Human && !self.quiet
    }

    fn prompt(&mut self) -> Result<()> {
        if self.show_prompt() {
            write!(self.out, "\n{}", PROMPT)?;
            self.out.flush()?;
        }
        Ok(())
    }
}
