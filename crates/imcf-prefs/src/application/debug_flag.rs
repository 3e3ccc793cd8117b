//! The `imcf.debugging` preference.
//!
//! The flag is read once at start-up to decide whether diagnostic messages
//! are shown.  [`enable_debug`] is the only code path that changes it; the
//! settings use case never does.

use imcf_core::{debug_flag_from, PrefValue, DEBUGGING_KEY};

use super::ports::{Logger, PersistError, PreferenceSink};

/// Returns `true` if diagnostic logging is switched on in `sink`.
///
/// A missing key reads as the empty string, i.e. disabled.
pub fn read_debug_flag(sink: &dyn PreferenceSink) -> bool {
    debug_flag_from(&sink.get(DEBUGGING_KEY, PrefValue::empty()))
}

/// Switches diagnostic logging on and saves the store.
///
/// # Errors
///
/// Returns [`PersistError`] if the store cannot be saved.  Nothing is logged
/// in that case.
pub fn enable_debug(sink: &mut dyn PreferenceSink, logger: &dyn Logger) -> Result<(), PersistError> {
    sink.set(DEBUGGING_KEY, PrefValue::Bool(true));
    sink.persist()?;
    logger.info("Enabled IMCF debug logging.");
    Ok(())
}
