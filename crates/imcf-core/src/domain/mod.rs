//! Domain entities for IMCF preference handling.
//!
//! Pure logic only: no file access, no host API calls, no logging backend.
//! Code in the application and infrastructure layers depends on these types,
//! never the other way round.

/// Outcome of one settings-application attempt.
pub mod outcome;
/// Preference keys and values.
pub mod prefs;
/// Validated decoding of the `imcf-settings.json` document.
pub mod settings;
