use colored::Colorize;
use std::sync::{Arc, Mutex};

/// Display sink for everything the operator sees: reply lines, listings,
/// command echoes and error reports.
pub trait Console: Send {
    fn print(&mut self, line: &str);

    fn print_error(&mut self, line: &str) {
        self.print(line);
    }
}

/// Writes to the process stdout.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&mut self, line: &str) {
        println!("{}", line);
    }

    fn print_error(&mut self, line: &str) {
        println!("{}", line.red());
    }
}

/// Swallows output. Used for exchanges whose replies are summarised instead
/// of echoed (SYST during login).
#[derive(Debug, Default)]
pub struct QuietConsole;

impl Console for QuietConsole {
    fn print(&mut self, _line: &str) {}
}

/// Keeps every printed line; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl Console for RecordingConsole {
    fn print(&mut self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
