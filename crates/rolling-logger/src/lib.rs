//! Rolling Logger
//!
//! `tracing` subscriber for browser applications. Each formatted event is kept
//! in a bounded circular buffer and, optionally, echoed to the platform sink:
//! the browser console on wasm32, stderr elsewhere.
//!
//! `init` hands back the `LogBuffer` so the embedding app can read recent lines
//! (a diagnostics panel, a bug report). Apps that only want the console sink may
//! drop it; the subscriber keeps its own handle and goes on recording.

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid log level `{0}`")]
    InvalidLevel(String),
    #[error("a global logger is already installed: {0}")]
    AlreadyInitialized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Maximum level recorded: "trace", "debug", "info", "warn", "error" or "off"
    pub level: String,
    /// Number of lines kept in the buffer
    pub capacity: usize,
    /// Echo lines to the console
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: 500,
            console: true,
        }
    }
}

/// Circular buffer of the most recent log lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Wall-clock timestamps via chrono (std's SystemTime is unavailable on wasm32)
struct ChronoTimer;

impl FormatTime for ChronoTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Utc::now().format("%H:%M:%S%.3f"))
    }
}

/// `MakeWriter` feeding the buffer and the console
#[derive(Clone)]
pub struct RollingWriter {
    buffer: LogBuffer,
    console: bool,
}

impl RollingWriter {
    pub fn new(buffer: LogBuffer, console: bool) -> Self {
        Self { buffer, console }
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            bytes: Vec::new(),
            buffer: self.buffer.clone(),
            console: self.console,
        }
    }
}

/// Collects one formatted event and hands it on when dropped
pub struct LineWriter {
    bytes: Vec<u8>,
    buffer: LogBuffer,
    console: bool,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.bytes).trim_end().to_string();
        if line.is_empty() {
            return;
        }
        if self.console {
            emit(&line);
        }
        self.buffer.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber. Returns the buffer it writes into.
pub fn init(config: &LoggerConfig) -> Result<LogBuffer, LoggerError> {
    let level = LevelFilter::from_str(&config.level)
        .map_err(|_| LoggerError::InvalidLevel(config.level.clone()))?;
    let buffer = LogBuffer::new(config.capacity);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_timer(ChronoTimer)
        .with_writer(RollingWriter::new(buffer.clone(), config.console))
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.lines(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let buffer = LogBuffer::new(0);
        buffer.push("a".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_line_writer_pushes_on_drop() {
        let buffer = LogBuffer::new(4);
        let writer = RollingWriter::new(buffer.clone(), false);
        {
            let mut line = writer.make_writer();
            writeln!(line, "INFO todo: added").unwrap();
        }
        {
            let _empty = writer.make_writer();
        }
        assert_eq!(buffer.lines(), vec!["INFO todo: added"]);
    }

    #[test]
    fn test_subscriber_records_events() {
        let buffer = LogBuffer::new(8);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::INFO)
            .with_ansi(false)
            .with_timer(ChronoTimer)
            .with_writer(RollingWriter::new(buffer.clone(), false))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 2, "loaded todos");
            tracing::debug!("filtered out");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("loaded todos"));
        assert!(lines[0].contains("count=2"));
    }

    #[test]
    fn test_invalid_level() {
        let config = LoggerConfig {
            level: "loud".to_string(),
            ..LoggerConfig::default()
        };
        assert_eq!(init(&config).unwrap_err(), LoggerError::InvalidLevel("loud".to_string()));
    }

    #[test]
    fn test_config_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{"level":"debug"}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.capacity, 500);
        assert!(config.console);
    }
}
