//! In-memory preference store for unit testing.
//!
//! Records every `set` call in order and counts `persist` calls, so tests
//! can assert on exactly what a use case wrote without touching the disk.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make `persist` return a [`PersistError`].
//! The attempt is still counted, but `persisted` keeps its previous snapshot.

use std::collections::BTreeMap;

use imcf_core::PrefValue;

use crate::application::ports::{PersistError, PreferenceSink};

/// A preference sink that keeps everything in memory.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    /// Current values, including unsaved changes.
    pub values: BTreeMap<String, PrefValue>,
    /// Each `(key, value)` passed to `set`, in call order.
    pub writes: Vec<(String, PrefValue)>,
    /// Number of `persist` calls, successful or not.
    pub persist_count: u32,
    /// Snapshot of `values` taken at the last successful `persist`.
    pub persisted: BTreeMap<String, PrefValue>,
    /// When `true`, `persist` fails.
    pub should_fail: bool,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates `key` without recording it as a write.
    pub fn with_value(mut self, key: &str, value: impl Into<PrefValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

impl PreferenceSink for InMemoryPreferenceStore {
    fn get(&self, key: &str, default: PrefValue) -> PrefValue {
        self.values.get(key).cloned().unwrap_or(default)
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.writes.push((key.to_string(), value.clone()));
        self.values.insert(key.to_string(), value);
    }

    fn persist(&mut self) -> Result<(), PersistError> {
        self.persist_count += 1;
        if self.should_fail {
            return Err(PersistError::new("mock store configured to fail"));
        }
        self.persisted = self.values.clone();
        Ok(())
    }
}
