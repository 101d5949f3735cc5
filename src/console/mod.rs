// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Console input and output collaborators.
//!
//! The player never talks to the terminal directly. Result lines go through
//! an [`OutputSink`] and the single follow-up read after a search comes from
//! an [`InputSource`], so the same engine can be wired to stdin/stdout in
//! the binary and to scripted fixtures in tests.

use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};

/// Receives rendered result lines, one call per line.
pub trait OutputSink {
    fn line(&mut self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines in memory and hands out a shared handle for inspection.
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn lines(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lines)
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for MemorySink {
    fn line(&mut self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Yields one line of input per call, `None` when the source is exhausted.
pub trait InputSource {
    fn read_line(&mut self) -> Option<String>;
}

/// Reads a single line from standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self) -> Option<String> {
        let mut buffer = String::new();
        match io::stdin().read_line(&mut buffer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buffer.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Replays a fixed sequence of lines.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
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

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_shares_captured_lines() {
        let mut sink = MemorySink::new();
        let lines = sink.lines();
        sink.line("one");
        sink.line("two");
        assert_eq!(*lines.lock().unwrap(), ["one", "two"]);
    }

    #[test]
    fn scripted_input_drains_in_order_then_ends() {
        let mut input = ScriptedInput::new(["1", "2"]);
        assert_eq!(input.read_line().as_deref(), Some("1"));
        assert_eq!(input.read_line().as_deref(), Some("2"));
        assert_eq!(input.read_line(), None);
    }
}
