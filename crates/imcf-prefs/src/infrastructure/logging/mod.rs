//! `tracing`-backed [`Logger`] and subscriber set-up.
//!
//! Diagnostic output is gated twice: [`TracingLogger`] drops debug messages
//! unless the `imcf.debugging` preference is on, and [`init_tracing`] picks a
//! `debug` default filter in that case so the messages actually reach the
//! terminal.  `RUST_LOG` overrides the default filter either way.

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::application::ports::Logger;

pub mod mock;

/// Forwards [`Logger`] calls to `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    debug_enabled: bool,
}

impl TracingLogger {
    /// Creates a logger; debug messages are emitted only if `debug_enabled`.
    pub fn new(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }
}

impl Logger for TracingLogger {
    fn debug(&self, msg: &str) {
        if self.debug_enabled {
            debug!("{msg}");
        }
    }

    fn info(&self, msg: &str) {
        info!("{msg}");
    }
}

/// Default `EnvFilter` directive when `RUST_LOG` is not set.
pub fn default_filter(debug_enabled: bool) -> &'static str {
    if debug_enabled {
        "debug"
    } else {
        "info"
    }
}

/// Initialises structured logging.  Level is overridden by `RUST_LOG`.
///
/// The first subscriber installed in a process wins; later calls are no-ops.
pub fn init_tracing(debug_enabled: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(debug_enabled))),
        )
        .try_init();
}
