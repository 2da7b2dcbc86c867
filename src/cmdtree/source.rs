//! Input sources the console pulls command lines from.
//!
//! A [`CommandSource`] is a blocking pull of one line at a time; returning
//! `None` signals end-of-stream and ends the console loop. Blocking semantics
//! are entirely the source's concern.
//!
//! Two implementations ship with the crate: [`StdinSource`] for interactive
//! use and [`QueueSource`], an in-memory source for tests and scripted runs.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Blocking line supplier for the console loop.
pub trait CommandSource: Send {
    /// Pull the next command line, or `None` at end-of-stream.
    fn next_line(&mut self) -> Option<String>;
}

/// Reads lines from standard input, optionally printing a prompt before each
/// read.
pub struct StdinSource {
    prompt: Option<String>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self { prompt: None }
    }

    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSource for StdinSource {
    fn next_line(&mut self) -> Option<String> {
        if let Some(prompt) = &self.prompt {
            print!("{prompt}");
            let _ = std::io::stdout().flush();
        }

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }
}

/// In-memory source that replays a fixed sequence of lines, then signals
/// end-of-stream.
pub struct QueueSource {
    lines: VecDeque<String>,
}

impl QueueSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl CommandSource for QueueSource {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_source_replays_then_ends() {
        let mut source = QueueSource::new(["one", "two"]);
        assert_eq!(source.next_line().as_deref(), Some("one"));
        assert_eq!(source.next_line().as_deref(), Some("two"));
        assert_eq!(source.next_line(), None);
        assert_eq!(source.next_line(), None);
    }
}
