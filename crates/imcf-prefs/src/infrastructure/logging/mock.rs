//! Recording logger for unit testing.
//!
//! Every message is pushed into a `Mutex<Vec<...>>` together with its level,
//! so tests can assert on exactly what was logged and in what order.

use std::sync::Mutex;

use crate::application::ports::Logger;

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

/// A logger that records messages instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    /// Every `(level, message)` pair, in call order.
    pub entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages logged at debug level.
    pub fn debug_messages(&self) -> Vec<String> {
        self.messages_at(LogLevel::Debug)
    }

    /// Messages logged at info level.
    pub fn info_messages(&self) -> Vec<String> {
        self.messages_at(LogLevel::Info)
    }

    /// `true` if any message at any level contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|(_, msg)| msg.contains(needle))
    }

    fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    fn record(&self, level: LogLevel, msg: &str) {
        self.entries
            .lock()
            .expect("lock poisoned")
            .push((level, msg.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, msg: &str) {
        self.record(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.record(LogLevel::Info, msg);
    }
}
