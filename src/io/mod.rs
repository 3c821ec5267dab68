//! Input/output abstractions
//!
//! Provides traits for reading player input and writing console output,
//! so the session loop can be driven headless in tests.

pub mod signal;

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::warn;

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt.
    /// A closed input stream is reported as `ErrorKind::UnexpectedEof`,
    /// a Ctrl-C as `ErrorKind::Interrupted`.
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// What the terminal produced while the session waited for a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Closed,
    Interrupt,
}

/// Terminal input. Stdin is read on its own thread so a Ctrl-C can end
/// the wait for a line.
pub struct TerminalIO {
    events: Receiver<InputEvent>,
}

impl TerminalIO {
    /// Start the stdin reader and the Ctrl-C watcher.
    pub fn new() -> Self {
        let (sender, events) = mpsc::channel();
        spawn_stdin_reader(sender.clone());
        signal::watch_ctrl_c(sender);
        TerminalIO { events }
    }

    /// Read from an existing event channel instead of the real terminal.
    pub fn from_events(events: Receiver<InputEvent>) -> Self {
        TerminalIO { events }
    }

    fn next_line(&self) -> Result<String, io::Error> {
        match self.events.recv() {
            Ok(InputEvent::Line(line)) => Ok(line),
            Ok(InputEvent::Interrupt) => Err(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c")),
            Ok(InputEvent::Closed) | Err(_) => {
                Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
            }
        }
    }
}

impl Default for TerminalIO {
    fn default() -> Self {
        Self::new()
    }
}

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.next_line()
    }
}

fn spawn_stdin_reader(events: Sender<InputEvent>) {
    let spawned = thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            loop {
                let mut line = String::new();
                let event = match stdin.lock().read_line(&mut line) {
                    Ok(0) => InputEvent::Closed,
                    Ok(_) => InputEvent::Line(line),
                    Err(err) => {
                        warn!(%err, "stdin read failed");
                        InputEvent::Closed
                    }
                };
                let done = event == InputEvent::Closed;
                if events.send(event).is_err() || done {
                    break;
                }
            }
        });

    if let Err(err) = spawned {
        warn!(%err, "could not spawn stdin reader");
    }
}

/// Console output on stdout
pub struct ConsoleOutput;

impl OutputWriter for ConsoleOutput {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_events_map_to_lines_and_errors() {
        let (sender, events) = mpsc::channel();
        let mut input = TerminalIO::from_events(events);
        sender.send(InputEvent::Line("5\n".to_string())).unwrap();
        sender.send(InputEvent::Interrupt).unwrap();
        sender.send(InputEvent::Closed).unwrap();

        assert_eq!(input.read_line("X to play:").unwrap(), "5\n");
        assert_eq!(input.read_line("O to play:").unwrap_err().kind(), io::ErrorKind::Interrupted);
        assert_eq!(input.read_line("O to play:").unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn dropped_channel_reads_as_closed() {
        let (sender, events) = mpsc::channel::<InputEvent>();
        drop(sender);
        let mut input = TerminalIO::from_events(events);
        assert_eq!(input.read_line("?").unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
