//! Console output for case logs and summaries.
//!
//! Everything a test case shows is appended to its in-memory log and also handed
//! to a [`Console`]. The console is fire and forget: it receives finished lines
//! and has no way to report back.

use std::io;

/// A strategy for printing finished lines of text.
pub trait Console {
    fn print_line(&mut self, line: &str);
}

/// Prints lines to stdout through `println!`, so the output is captured by the
/// built in test harness.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoConsole;

impl Console for NoConsole {
    fn print_line(&mut self, _: &str) {}
}

/// Writes lines to any [`io::Write`] target.
#[derive(Debug, Default)]
pub struct WriteConsole<W: io::Write> {
    pub target: W,
}

impl<W: io::Write> WriteConsole<W> {
    pub fn new(target: W) -> Self {
        Self { target }
    }

    pub fn into_inner(self) -> W {
        self.target
    }
}

impl<W: io::Write> Console for WriteConsole<W> {
    fn print_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.target, "{line}") {
            tracing::warn!(%err, "failed to write console line");
        }
    }
}

impl<F> Console for F
where
    F: FnMut(&str),
{
    fn print_line(&mut self, line: &str) {
        self(line)
    }
}
