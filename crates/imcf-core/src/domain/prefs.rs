//! Preference keys and values written to the host preference store.
//!
//! The store is a flat map from string keys to [`PrefValue`]s.  This project
//! only ever touches the three keys defined here.
//!
//! Note the rename: the document field `imcf.sender_address` is stored under
//! [`SENDER_EMAIL_KEY`] (`imcf.sender_email`).  Other consumers of the store
//! read that key, so it must stay as it is.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Preference key for the SMTP server host name.
pub const SMTP_SERVER_KEY: &str = "imcf.smtpserver";
/// Preference key for the sender address (source field: `sender_address`).
pub const SENDER_EMAIL_KEY: &str = "imcf.sender_email";
/// Preference key for the debug flag gating diagnostic output.
pub const DEBUGGING_KEY: &str = "imcf.debugging";

/// A single value in the preference store.
///
/// Serialised untagged, so a TOML/JSON `true` becomes [`PrefValue::Bool`] and
/// any string becomes [`PrefValue::Str`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Str(String),
}

impl PrefValue {
    /// The empty string, used as the "unset" default for string lookups.
    pub fn empty() -> Self {
        Self::Str(String::new())
    }

    /// Returns the string payload, or `None` for boolean values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Interprets a stored `imcf.debugging` value.
///
/// Booleans are taken as-is.  Strings enable debugging when non-empty,
/// except for `"false"` in any letter case.
pub fn debug_flag_from(value: &PrefValue) -> bool {
    match value {
        PrefValue::Bool(b) => *b,
        PrefValue::Str(s) => !s.is_empty() && !s.eq_ignore_ascii_case("false"),
    }
}
