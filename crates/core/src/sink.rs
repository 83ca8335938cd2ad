// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output sinks for the event log
//!
//! Every line goes out with a single write and is flushed immediately, so a
//! log cut short by a crash still ends on a complete event.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Destination of the event log
#[derive(Debug)]
pub enum LogSink {
    /// Unbuffered file, truncated when opened
    File(File),
    /// Process standard output
    Stdout(io::Stdout),
    /// Shared in-memory buffer
    Memory(MemoryLog),
}

impl LogSink {
    /// Create (or truncate) the log file at `path`
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(LogSink::File(file))
    }

    pub fn stdout() -> Self {
        LogSink::Stdout(io::stdout())
    }

    /// In-memory sink plus a handle for reading back what was written
    pub fn memory() -> (Self, MemoryLog) {
        let log = MemoryLog::default();
        (LogSink::Memory(log.clone()), log)
    }

    /// Append one line; the newline is added here
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            LogSink::File(file) => {
                let mut buf = String::with_capacity(line.len() + 1);
                buf.push_str(line);
                buf.push('\n');
                file.write_all(buf.as_bytes())
            }
            LogSink::Stdout(stdout) => {
                let mut out = stdout.lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            LogSink::Memory(log) => {
                log.push(line);
                Ok(())
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(file) => file.sync_data(),
            LogSink::Stdout(stdout) => stdout.flush(),
            LogSink::Memory(_) => Ok(()),
        }
    }
}

/// Lines captured by a memory sink
#[derive(Clone, Debug, Default)]
pub struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    fn push(&self, line: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push(line.to_string());
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The log as newline-terminated text
    pub fn text(&self) -> String {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.iter().map(|line| format!("{line}\n")).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_lines_in_order() {
        let (mut sink, log) = LogSink::memory();
        sink.write_line("1: HACK 1: starts").unwrap();
        sink.write_line("2: SERF 1: starts").unwrap();

        assert_eq!(log.lines(), vec!["1: HACK 1: starts", "2: SERF 1: starts"]);
        assert_eq!(log.text(), "1: HACK 1: starts\n2: SERF 1: starts\n");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn file_sink_truncates_and_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harbor.out");
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut sink = LogSink::create(&path).unwrap();
        sink.write_line("1: HACK 1: starts").unwrap();
        sink.write_line("2: HACK 1: waits: 1: 0").unwrap();
        sink.flush().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "1: HACK 1: starts\n2: HACK 1: waits: 1: 0\n");
    }

    #[test]
    fn file_sink_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("harbor.out");
        assert!(LogSink::create(&path).is_err());
    }
}
