//! # imcf-core
//!
//! Shared domain types for applying IMCF settings to the host application's
//! preference store.
//!
//! This crate has zero dependencies on the file system, the logging backend,
//! or the host's preference API.  Everything here can be unit-tested with
//! plain strings and JSON values.
//!
//! # Overview (for beginners)
//!
//! The host application keeps a persistent key-value store of preferences.
//! Sites can drop an optional `imcf-settings.json` next to the host
//! installation to pre-configure two of those preferences (the SMTP server
//! and the sender address used for notification mails).
//!
//! - **`domain::settings`** – Turns the untyped JSON document into a validated
//!   [`Settings`] value, or explains exactly what is missing via
//!   [`SchemaError`].
//!
//! - **`domain::prefs`** – The fixed preference keys this project writes and
//!   the [`PrefValue`] type stored under them.
//!
//! - **`domain::outcome`** – [`ApplyOutcome`], the result of one attempt to
//!   apply a settings file.  Every variant carries the message that gets
//!   logged for it.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `imcf_core::Settings` instead of `imcf_core::domain::settings::Settings`.
pub use domain::outcome::ApplyOutcome;
pub use domain::prefs::{
    debug_flag_from, PrefValue, DEBUGGING_KEY, SENDER_EMAIL_KEY, SMTP_SERVER_KEY,
};
pub use domain::settings::{DecodeError, SchemaError, Settings, SETTINGS_FILE_NAME};
