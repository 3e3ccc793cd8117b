//! Validated decoding of the `imcf-settings.json` document.
//!
//! The file is optional and written by hand, so its shape is never trusted.
//! Decoding happens in two steps:
//!
//! 1. [`Settings::parse`] turns text into a [`serde_json::Value`].  Syntax
//!    errors surface as [`DecodeError::Parse`].
//! 2. [`Settings::from_value`] checks the shape and produces either a typed
//!    [`Settings`] or a [`SchemaError`] naming what is missing.
//!
//! Expected document:
//!
//! ```json
//! {
//!   "imcf": {
//!     "smtpserver": "smtp.example.org",
//!     "sender_address": "noreply@example.org"
//!   }
//! }
//! ```
//!
//! Any other keys, at the top level or inside `imcf`, are ignored.

use serde_json::{Map, Value};
use thiserror::Error;

/// File name looked up inside the host base directory.
pub const SETTINGS_FILE_NAME: &str = "imcf-settings.json";

/// Top-level key holding the IMCF section.
pub const IMCF_SECTION: &str = "imcf";
/// Field inside the `imcf` section carrying the SMTP host name.
pub const SMTP_SERVER_FIELD: &str = "smtpserver";
/// Field inside the `imcf` section carrying the sender mail address.
pub const SENDER_ADDRESS_FIELD: &str = "sender_address";

/// The two values a settings document may supply, both guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// SMTP server host name, e.g. `"smtp.example.org"`.
    pub smtpserver: String,
    /// Sender mail address, e.g. `"noreply@example.org"`.
    pub sender_address: String,
}

/// The document parsed as JSON but does not have the required shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The document is not an object, or `imcf` is absent or not an object.
    #[error("'imcf' key not found in imcf-settings.json")]
    MissingImcf,

    /// `imcf` exists but at least one required field is absent, empty, or
    /// not a string.  `missing` lists the offending field names in document
    /// order (`smtpserver` before `sender_address`).
    #[error(
        "missing 'smtpserver' or 'sender_address' in imcf-settings.json (absent or empty: {})",
        .missing.join(", ")
    )]
    MissingFields { missing: Vec<&'static str> },
}

/// Any reason a settings text could not be turned into [`Settings`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not valid JSON.
    #[error("error parsing json: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON is valid but has the wrong shape.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl Settings {
    /// Parses `text` as JSON and validates its shape.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Parse`] for malformed JSON and
    /// [`DecodeError::Schema`] when the required fields are missing.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value)?)
    }

    /// Validates an already-parsed JSON document.
    ///
    /// Validation is conjunctive: both fields must be non-empty strings or
    /// nothing is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingImcf`] if there is no `imcf` object and
    /// [`SchemaError::MissingFields`] if either field is unusable.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let section = value
            .get(IMCF_SECTION)
            .and_then(Value::as_object)
            .ok_or(SchemaError::MissingImcf)?;

        match (
            non_empty_str(section, SMTP_SERVER_FIELD),
            non_empty_str(section, SENDER_ADDRESS_FIELD),
        ) {
            (Some(smtpserver), Some(sender_address)) => Ok(Self {
                smtpserver: smtpserver.to_string(),
                sender_address: sender_address.to_string(),
            }),
            (smtpserver, sender_address) => {
                let mut missing = Vec::with_capacity(2);
                if smtpserver.is_none() {
                    missing.push(SMTP_SERVER_FIELD);
                }
                if sender_address.is_none() {
                    missing.push(SENDER_ADDRESS_FIELD);
                }
                Err(SchemaError::MissingFields { missing })
            }
        }
    }
}

fn non_empty_str<'a>(section: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    section
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Valid documents ───────────────────────────────────────────────────────

    #[test]
    fn test_parse_valid_document_returns_both_fields() {
        // Arrange
        let text = r#"{"imcf":{"smtpserver":"smtp.example.org","sender_address":"noreply@example.org"}}"#;

        // Act
        let settings = Settings::parse(text).expect("valid document");

        // Assert
        assert_eq!(settings.smtpserver, "smtp.example.org");
        assert_eq!(settings.sender_address, "noreply@example.org");
    }

    #[test]
    fn test_from_value_ignores_unknown_keys() {
        let value = json!({
            "other": 42,
            "imcf": {
                "smtpserver": "mail.local",
                "sender_address": "a@b.c",
                "sender_email": "ignored@b.c"
            }
        });

        let settings = Settings::from_value(&value).expect("extra keys are fine");

        assert_eq!(
            settings,
            Settings {
                smtpserver: "mail.local".to_string(),
                sender_address: "a@b.c".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_accepts_multiline_text() {
        let text = "{\n  \"imcf\": {\n    \"smtpserver\": \"s\",\n    \"sender_address\": \"a\"\n  }\n}";
        assert!(Settings::parse(text).is_ok());
    }

    // ── Missing `imcf` section ────────────────────────────────────────────────

    #[test]
    fn test_from_value_without_imcf_key_is_missing_imcf() {
        let value = json!({ "smtpserver": "s", "sender_address": "a" });
        assert_eq!(Settings::from_value(&value), Err(SchemaError::MissingImcf));
    }

    #[test]
    fn test_from_value_with_null_imcf_is_missing_imcf() {
        let value = json!({ "imcf": null });
        assert_eq!(Settings::from_value(&value), Err(SchemaError::MissingImcf));
    }

    #[test]
    fn test_from_value_with_non_object_imcf_is_missing_imcf() {
        let value = json!({ "imcf": "smtp.example.org" });
        assert_eq!(Settings::from_value(&value), Err(SchemaError::MissingImcf));
    }

    #[test]
    fn test_from_value_with_non_object_document_is_missing_imcf() {
        for value in [json!([1, 2, 3]), json!("imcf"), json!(null), json!(7)] {
            assert_eq!(
                Settings::from_value(&value),
                Err(SchemaError::MissingImcf),
                "document {value} must not validate"
            );
        }
    }

    // ── Missing or empty fields ───────────────────────────────────────────────

    #[test]
    fn test_from_value_missing_sender_lists_sender_only() {
        let value = json!({ "imcf": { "smtpserver": "smtp.example.org" } });

        let err = Settings::from_value(&value).unwrap_err();

        assert_eq!(
            err,
            SchemaError::MissingFields {
                missing: vec![SENDER_ADDRESS_FIELD]
            }
        );
    }

    #[test]
    fn test_from_value_empty_section_lists_both_fields() {
        let value = json!({ "imcf": {} });

        let err = Settings::from_value(&value).unwrap_err();

        assert_eq!(
            err,
            SchemaError::MissingFields {
                missing: vec![SMTP_SERVER_FIELD, SENDER_ADDRESS_FIELD]
            }
        );
    }

    #[test]
    fn test_from_value_empty_string_counts_as_missing() {
        let value = json!({ "imcf": { "smtpserver": "", "sender_address": "a@b.c" } });

        let err = Settings::from_value(&value).unwrap_err();

        assert_eq!(
            err,
            SchemaError::MissingFields {
                missing: vec![SMTP_SERVER_FIELD]
            }
        );
    }

    #[test]
    fn test_from_value_non_string_field_counts_as_missing() {
        let value = json!({ "imcf": { "smtpserver": 25, "sender_address": true } });

        let err = Settings::from_value(&value).unwrap_err();

        assert!(matches!(err, SchemaError::MissingFields { ref missing } if missing.len() == 2));
    }

    // ── Malformed JSON ────────────────────────────────────────────────────────

    #[test]
    fn test_parse_malformed_json_is_parse_error() {
        let result = Settings::parse(r#"{"imcf": {"smtpserver": "s","#);
        assert!(matches!(result, Err(DecodeError::Parse(_))));
    }

    #[test]
    fn test_parse_empty_text_is_parse_error() {
        assert!(matches!(Settings::parse(""), Err(DecodeError::Parse(_))));
    }

    #[test]
    fn test_parse_schema_failure_is_schema_error() {
        let result = Settings::parse(r#"{"imcf": {}}"#);
        assert!(matches!(
            result,
            Err(DecodeError::Schema(SchemaError::MissingFields { .. }))
        ));
    }

    // ── Messages ──────────────────────────────────────────────────────────────

    #[test]
    fn test_schema_error_messages_are_distinct() {
        let missing_imcf = SchemaError::MissingImcf.to_string();
        let missing_fields = SchemaError::MissingFields {
            missing: vec![SENDER_ADDRESS_FIELD],
        }
        .to_string();

        assert!(missing_imcf.contains("'imcf' key not found"));
        assert!(missing_fields.contains("missing 'smtpserver' or 'sender_address'"));
        assert!(missing_fields.ends_with("(absent or empty: sender_address)"));
        assert_ne!(missing_imcf, missing_fields);
    }
}
