//! Application layer use cases.
//!
//! Use cases here orchestrate the domain types from `imcf_core` and talk to
//! the outside world only through the traits in [`ports`].  They contain no
//! file access and no logging-backend calls of their own, so every branch
//! can be tested with in-memory fakes.
//!
//! # Sub-modules
//!
//! - **`ports`** – The [`ports::PreferenceSink`], [`ports::Logger`] and
//!   [`ports::SettingsSource`] traits the infrastructure layer implements.
//!
//! - **`apply_settings`** – Reads `imcf-settings.json` (via a
//!   `SettingsSource`), validates it, and writes the two mail preferences.
//!   Never fails: every problem becomes a logged no-op.
//!
//! - **`debug_flag`** – Reads the `imcf.debugging` preference at start-up
//!   and turns it on for the `enable-debug` command.

pub mod apply_settings;
pub mod debug_flag;
pub mod ports;
