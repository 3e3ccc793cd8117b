//! Traits the application layer depends on.
//!
//! Production implementations live in `crate::infrastructure`; each one has a
//! recording counterpart in a `mock` sub-module for tests.

use std::fmt;
use std::path::{Path, PathBuf};

use imcf_core::PrefValue;
use thiserror::Error;

/// Saving the preference store failed.
#[derive(Debug, Error)]
#[error("failed to persist preferences: {0}")]
pub struct PersistError(pub String);

impl PersistError {
    pub fn new(reason: impl fmt::Display) -> Self {
        Self(reason.to_string())
    }
}

/// The host application's persistent key-value preference store.
pub trait PreferenceSink {
    /// Returns the value stored under `key`, or `default` if there is none.
    fn get(&self, key: &str, default: PrefValue) -> PrefValue;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Changes are held in memory until [`persist`](Self::persist) is called.
    fn set(&mut self, key: &str, value: PrefValue);

    /// Writes all pending changes to durable storage.
    fn persist(&mut self) -> Result<(), PersistError>;
}

/// Plain-text diagnostic output.
pub trait Logger {
    /// Diagnostic message, only shown when debugging is enabled.
    fn debug(&self, msg: &str);
    /// Informational message, always shown.
    fn info(&self, msg: &str);
}

/// What was found when looking for the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsFile {
    /// The host did not supply a base directory.
    NoBaseDir,
    /// There is no settings file at this path.
    Missing(PathBuf),
    /// The file exists but reading it failed.
    Unreadable { path: PathBuf, message: String },
    /// The complete file text, lines joined with `\n`.
    Contents { path: PathBuf, text: String },
}

/// Locates and reads `imcf-settings.json` inside a base directory.
pub trait SettingsSource {
    /// Never returns [`SettingsFile::NoBaseDir`]; that case is decided by
    /// the caller before a directory is available.
    fn fetch(&self, base_dir: &Path) -> SettingsFile;
}
