//! Infrastructure layer.
//!
//! Contains the adapters behind the application ports: the TOML-backed
//! preference store, the file-system settings source, and the `tracing`
//! logger.  Each adapter module also carries a `mock` sub-module with a
//! recording implementation for tests.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `imcf_core`, but MUST NOT be imported by the `application` layer outside
//! of tests.

pub mod logging;
pub mod preferences;
pub mod settings_file;
