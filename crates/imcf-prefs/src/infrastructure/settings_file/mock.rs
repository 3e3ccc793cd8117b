//! Mock settings source for unit testing.
//!
//! Returns a fixed [`SettingsFile`] for every fetch and records the base
//! directories it was asked about.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::ports::{SettingsFile, SettingsSource};

/// A [`SettingsSource`] that always answers with the same file state.
pub struct StaticSettingsSource {
    file: SettingsFile,
    requested: Mutex<Vec<PathBuf>>,
}

impl StaticSettingsSource {
    /// Answers every fetch with `file`.
    pub fn new(file: SettingsFile) -> Self {
        Self {
            file,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// A readable settings file containing `text`.
    pub fn contents(text: &str) -> Self {
        Self::new(SettingsFile::Contents {
            path: PathBuf::from("imcf-settings.json"),
            text: text.to_string(),
        })
    }

    /// No settings file at `path`.
    pub fn missing(path: PathBuf) -> Self {
        Self::new(SettingsFile::Missing(path))
    }

    /// A settings file that fails to read with `message`.
    pub fn unreadable(message: &str) -> Self {
        Self::new(SettingsFile::Unreadable {
            path: PathBuf::from("imcf-settings.json"),
            message: message.to_string(),
        })
    }

    /// Base directories passed to `fetch`, in call order.
    pub fn requested_dirs(&self) -> Vec<PathBuf> {
        self.requested.lock().expect("lock poisoned").clone()
    }
}

impl SettingsSource for StaticSettingsSource {
    fn fetch(&self, base_dir: &Path) -> SettingsFile {
        self.requested
            .lock()
            .expect("lock poisoned")
            .push(base_dir.to_path_buf());
        self.file.clone()
    }
}
