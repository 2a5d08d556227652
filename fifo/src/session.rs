//! Interactive read-dispatch-print loop for `fifo run`.
//!
//! A session owns one queue for its whole lifetime. It reads one line per
//! cycle, runs it through the parser and dispatcher, and writes the reply.
//! The session ends on `exit` or when the input stream is exhausted.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::command::parse_command;
use crate::core::dispatch::{COMMAND_LIST, Control, dispatch};
use crate::core::queue::Queue;
use crate::io::config::ReplConfig;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// How a session reached `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    ExitCommand,
    EndOfInput,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub lines_read: u64,
    pub final_size: usize,
    pub end: SessionEnd,
}

/// Queue REPL bound to an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
    queue: Queue<String>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Self {
            input,
            output,
            config,
            queue: Queue::new(),
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn queue(&self) -> &Queue<String> {
        &self.queue
    }

    /// Drive the loop until `exit` or end of input.
    ///
    /// Only stream failures are errors; every command produces output.
    pub fn run(&mut self) -> Result<SessionSummary> {
        if self.config.banner {
            writeln!(
                self.output,
                "Queue Program Started. Commands: {COMMAND_LIST}"
            )
            .context("write banner")?;
        }

        let mut lines_read = 0u64;
        let mut buf = Vec::new();
        let end = loop {
            self.write_prompt()?;

            buf.clear();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .context("read command")?;
            if read == 0 {
                debug!("end of input");
                break SessionEnd::EndOfInput;
            }
            lines_read += 1;

            // Undecodable bytes become U+FFFD so the line still gets a reply.
            let line = String::from_utf8_lossy(&buf);
            let command = parse_command(&line);
            debug!(?command, "parsed command");
            let reply = dispatch(command, &mut self.queue, &self.config.empty_indicator);

            let show_warnings = self.config.show_warnings;
            if let Some(diagnostic) = reply.diagnostic.as_deref().filter(|_| show_warnings) {
                writeln!(self.output, "{diagnostic}").context("write diagnostic")?;
            }
            writeln!(self.output, "{}", reply.message).context("write reply")?;

            if reply.control == Control::Exit {
                break SessionEnd::ExitCommand;
            }
        };

        self.state = SessionState::Terminated;
        self.output.flush().context("flush output")?;

        let summary = SessionSummary {
            lines_read,
            final_size: self.queue.size(),
            end,
        };
        info!(
            lines_read = summary.lines_read,
            final_size = summary.final_size,
            end = ?summary.end,
            "session terminated"
        );
        Ok(summary)
    }

    fn write_prompt(&mut self) -> Result<()> {
        if self.config.prompt.is_empty() {
            return Ok(());
        }
        write!(self.output, "{}", self.config.prompt).context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        Ok(())
    }
}
