//! ApplySettingsUseCase: copies the mail settings from `imcf-settings.json`
//! into the preference store.
//!
//! The flow is a straight line with one exit at every step:
//!
//! ```text
//! base dir? ──no──> SkippedNoDir
//!    │
//! file exists? ──no──> SkippedNoFile
//!    │
//! readable? ──no──> ReadError
//!    │
//! valid JSON? ──no──> ParseError
//!    │
//! imcf + both fields? ──no──> SchemaError
//!    │
//! set 2 keys, persist ──> Applied (or PersistFailed)
//! ```
//!
//! [`decide`] covers everything up to the schema check and is a pure
//! function.  [`ApplySettingsUseCase::apply`] wraps it with the effects:
//! fetching the file, writing the sink, and logging.
//!
//! Settings files are optional and best-effort, so nothing here returns an
//! error.  The [`ApplyOutcome`] is handed back for callers that care.

use std::path::Path;
use std::sync::Arc;

use imcf_core::{
    ApplyOutcome, DecodeError, PrefValue, Settings, SENDER_EMAIL_KEY, SMTP_SERVER_KEY,
};

use super::ports::{Logger, PreferenceSink, SettingsFile, SettingsSource};

/// Turns a fetched settings file into validated [`Settings`], or the outcome
/// explaining why nothing will be applied.
pub fn decide(file: SettingsFile) -> Result<Settings, ApplyOutcome> {
    match file {
        SettingsFile::NoBaseDir => Err(ApplyOutcome::SkippedNoDir),
        SettingsFile::Missing(path) => Err(ApplyOutcome::SkippedNoFile(path)),
        SettingsFile::Unreadable { path, message } => Err(ApplyOutcome::ReadError(format!(
            "{}: {message}",
            path.display()
        ))),
        SettingsFile::Contents { text, .. } => Settings::parse(&text).map_err(|e| match e {
            DecodeError::Parse(err) => ApplyOutcome::ParseError(err.to_string()),
            DecodeError::Schema(err) => ApplyOutcome::SchemaError(err),
        }),
    }
}

/// The Apply Settings use case.
pub struct ApplySettingsUseCase {
    source: Arc<dyn SettingsSource>,
    logger: Arc<dyn Logger>,
}

impl ApplySettingsUseCase {
    /// Creates a new use case reading from `source` and reporting to `logger`.
    pub fn new(source: Arc<dyn SettingsSource>, logger: Arc<dyn Logger>) -> Self {
        Self { source, logger }
    }

    /// Applies the settings file found in `base_dir` to `sink`.
    ///
    /// Writes happen only when both fields validate, followed by exactly one
    /// `persist()`.  Every other path leaves `sink` untouched.
    pub fn apply(&self, base_dir: Option<&Path>, sink: &mut dyn PreferenceSink) -> ApplyOutcome {
        let file = match base_dir {
            Some(dir) => self.source.fetch(dir),
            None => SettingsFile::NoBaseDir,
        };

        let settings = match decide(file) {
            Ok(settings) => settings,
            Err(outcome) => {
                self.logger.debug(&outcome.to_string());
                return outcome;
            }
        };

        self.logger
            .debug("Setting preferences based on imcf-settings.json...");
        sink.set(SMTP_SERVER_KEY, PrefValue::from(settings.smtpserver.as_str()));
        sink.set(
            SENDER_EMAIL_KEY,
            PrefValue::from(settings.sender_address.as_str()),
        );

        let outcome = match sink.persist() {
            Ok(()) => ApplyOutcome::Applied(settings),
            Err(e) => ApplyOutcome::PersistFailed(e.to_string()),
        };
        self.logger.debug(&outcome.to_string());
        outcome
    }
}
