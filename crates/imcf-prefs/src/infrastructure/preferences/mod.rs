//! TOML-backed preference store.
//!
//! Persists the host preference map to a flat TOML table in the
//! platform-appropriate config directory:
//! - Windows:  `%APPDATA%\IMCF\prefs.toml`
//! - Linux:    `~/.config/imcf/prefs.toml`
//! - macOS:    `~/Library/Application Support/IMCF/prefs.toml`
//!
//! Keys contain dots, so TOML writes them quoted:
//!
//! ```toml
//! "imcf.debugging" = true
//! "imcf.sender_email" = "noreply@example.org"
//! "imcf.smtpserver" = "smtp.example.org"
//! ```
//!
//! Hand-edited files may leave the dots unquoted, which TOML reads as nested
//! tables (`imcf.debugging = true` or an `[imcf]` section).  Nested tables are
//! flattened to dotted keys on load, so both spellings reach the same entry;
//! the next save writes the quoted form.
//!
//! The store is shared with the host, so entries this project does not know
//! about (including non-string values) are kept as they are and written back
//! unchanged on [`persist`](PreferenceSink::persist).

use std::path::{Path, PathBuf};

use imcf_core::PrefValue;
use thiserror::Error;

use crate::application::ports::{PersistError, PreferenceSink};

pub mod mock;

/// Error type for preference file operations.
#[derive(Debug, Error)]
pub enum PrefsStoreError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse preferences TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The preferences could not be serialized to TOML.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Preference store loaded from, and saved to, a single TOML file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: toml::Table,
}

impl FilePreferenceStore {
    /// Loads the store from `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsStoreError::Io`] for file-system errors other than
    /// "not found", and [`PrefsStoreError::Parse`] if the TOML is malformed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PrefsStoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => flatten(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
            Err(e) => return Err(PrefsStoreError::Io { path, source: e }),
        };
        Ok(Self { path, values })
    }

    /// Path the store is saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Writes the store to disk, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsStoreError::Io`] for file-system failures or
    /// [`PrefsStoreError::Serialize`] if serialization fails.
    pub fn save(&self) -> Result<(), PrefsStoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| PrefsStoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content).map_err(|source| PrefsStoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceSink for FilePreferenceStore {
    fn get(&self, key: &str, default: PrefValue) -> PrefValue {
        self.values.get(key).map(from_toml).unwrap_or(default)
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), to_toml(value));
    }

    fn persist(&mut self) -> Result<(), PersistError> {
        self.save().map_err(PersistError::new)
    }
}

/// Resolves the default preference file path.
///
/// # Errors
///
/// Returns [`PrefsStoreError::NoPlatformConfigDir`] if the base directory
/// cannot be determined.
pub fn default_prefs_path() -> Result<PathBuf, PrefsStoreError> {
    platform_config_dir()
        .map(|dir| dir.join("prefs.toml"))
        .ok_or(PrefsStoreError::NoPlatformConfigDir)
}

/// Collapses nested tables into dotted keys.  A dotted key already present at
/// the top level wins over the same key reached through a table.
fn flatten(table: toml::Table) -> toml::Table {
    let mut flat = toml::Table::new();
    let mut nested = Vec::new();
    for (key, value) in table {
        match value {
            toml::Value::Table(inner) => nested.push((key, inner)),
            other => {
                flat.insert(key, other);
            }
        }
    }
    for (prefix, inner) in nested {
        for (key, value) in flatten(inner) {
            flat.entry(format!("{prefix}.{key}")).or_insert(value);
        }
    }
    flat
}

/// Values that are neither bool nor string read back as their TOML text.
fn from_toml(value: &toml::Value) -> PrefValue {
    value
        .clone()
        .try_into::<PrefValue>()
        .unwrap_or_else(|_| PrefValue::Str(value.to_string()))
}

fn to_toml(value: PrefValue) -> toml::Value {
    toml::Value::try_from(&value).unwrap_or_else(|_| toml::Value::String(value.to_string()))
}

/// Resolves the per-user config directory, including the `IMCF` subdirectory.
///
/// Host preferences belong to the user, not to the host installation, so the
/// store lives under the user's config root and never next to
/// `imcf-settings.json` in the host base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("IMCF"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("imcf"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("IMCF")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
