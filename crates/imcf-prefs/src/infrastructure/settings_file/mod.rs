//! File-system settings source.
//!
//! Looks for `imcf-settings.json` directly inside the host base directory.
//! A missing file is the normal case and is reported as
//! [`SettingsFile::Missing`], not as an error.
//!
//! The file is read line by line and the lines are joined with `\n`.  A
//! leading UTF-8 byte order mark, as written by some Windows editors, is
//! dropped.  The reader is dropped, and the handle closed, on every return
//! path.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use imcf_core::SETTINGS_FILE_NAME;

use crate::application::ports::{SettingsFile, SettingsSource};

pub mod mock;

const UTF8_BOM: char = '\u{feff}';

/// Reads the settings file from the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSettingsSource;

impl FsSettingsSource {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsSource for FsSettingsSource {
    fn fetch(&self, base_dir: &Path) -> SettingsFile {
        let path = settings_path(base_dir);
        if !path.exists() {
            return SettingsFile::Missing(path);
        }

        match read_joined_lines(&path) {
            Ok(text) => SettingsFile::Contents { path, text },
            Err(e) => SettingsFile::Unreadable {
                path,
                message: e.to_string(),
            },
        }
    }
}

/// Full path of the settings file inside `base_dir`.
pub fn settings_path(base_dir: &Path) -> PathBuf {
    base_dir.join(SETTINGS_FILE_NAME)
}

/// Reads `path` as UTF-8 lines and joins them with `\n`, without a leading
/// byte order mark.
///
/// # Errors
///
/// Returns any I/O error from opening or reading, including
/// [`io::ErrorKind::InvalidData`] for non-UTF-8 content.
pub fn read_joined_lines(path: &Path) -> io::Result<String> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    let text = lines.join("\n");
    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(text),
    }
}
