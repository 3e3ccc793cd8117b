//! Result of one attempt to apply `imcf-settings.json`.
//!
//! Applying settings never fails from the caller's point of view: every
//! problem ends in a logged no-op.  [`ApplyOutcome`] records which path was
//! taken so that callers and tests can tell the cases apart without parsing
//! log output.  Its `Display` impl is the diagnostic message that gets logged.

use std::fmt;
use std::path::PathBuf;

use super::settings::{SchemaError, Settings};

/// What happened when settings were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Both preferences were written and the store was persisted.
    Applied(Settings),
    /// The host could not supply a base directory.
    SkippedNoDir,
    /// No settings file exists at the given path.  This is the common case.
    SkippedNoFile(PathBuf),
    /// The file exists but could not be read.
    ReadError(String),
    /// The file content is not valid JSON.
    ParseError(String),
    /// The JSON does not contain the required fields.
    SchemaError(SchemaError),
    /// The preferences were written but saving the store failed.
    PersistFailed(String),
}

impl ApplyOutcome {
    /// `true` only for [`ApplyOutcome::Applied`].
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied(_) => write!(f, "Preferences successfully set."),
            Self::SkippedNoDir => {
                write!(f, "Cannot determine the host base directory. Exiting...")
            }
            Self::SkippedNoFile(path) => {
                write!(f, "imcf-settings.json not found at {}.", path.display())
            }
            Self::ReadError(msg) => write!(f, "Error reading settings file: {msg}"),
            Self::ParseError(msg) => write!(f, "Error parsing json file: {msg}"),
            Self::SchemaError(err) => write!(f, "{err}."),
            Self::PersistFailed(msg) => write!(f, "Failed to save preferences: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_applied_is_applied() {
        let applied = ApplyOutcome::Applied(Settings {
            smtpserver: "s".to_string(),
            sender_address: "a".to_string(),
        });
        assert!(applied.is_applied());
        assert!(!ApplyOutcome::SkippedNoDir.is_applied());
        assert!(!ApplyOutcome::ParseError("x".to_string()).is_applied());
    }

    #[test]
    fn test_display_messages_are_distinct_per_failure() {
        // Arrange
        let outcomes = vec![
            ApplyOutcome::SkippedNoDir,
            ApplyOutcome::SkippedNoFile(PathBuf::from("/opt/host/imcf-settings.json")),
            ApplyOutcome::ReadError("permission denied".to_string()),
            ApplyOutcome::ParseError("EOF while parsing".to_string()),
            ApplyOutcome::SchemaError(SchemaError::MissingImcf),
            ApplyOutcome::SchemaError(SchemaError::MissingFields {
                missing: vec!["smtpserver"],
            }),
            ApplyOutcome::PersistFailed("disk full".to_string()),
        ];

        // Act
        let mut messages: Vec<String> = outcomes.iter().map(ToString::to_string).collect();
        let total = messages.len();
        messages.sort();
        messages.dedup();

        // Assert
        assert_eq!(messages.len(), total, "every outcome needs its own message");
    }

    #[test]
    fn test_display_includes_underlying_message() {
        let msg = ApplyOutcome::ParseError("expected value at line 1 column 1".to_string());
        assert_eq!(
            msg.to_string(),
            "Error parsing json file: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_display_no_file_mentions_path() {
        let outcome = ApplyOutcome::SkippedNoFile(PathBuf::from("/opt/host/imcf-settings.json"));
        assert!(outcome.to_string().contains("/opt/host/imcf-settings.json"));
        assert!(outcome.to_string().contains("not found"));
    }
}
