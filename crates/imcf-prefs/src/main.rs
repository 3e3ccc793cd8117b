//! IMCF preference tool entry point.
//!
//! Runs as a start-up hook of the host application (`apply`) or on demand
//! (`enable-debug`).
//!
//! # Usage
//!
//! ```text
//! imcf-prefs [--prefs-file <PATH>] <COMMAND>
//!
//! Commands:
//!   apply         Apply imcf-settings.json from the host directory
//!   enable-debug  Turn on IMCF debug logging
//! ```
//!
//! | Variable          | Description                                   |
//! |-------------------|-----------------------------------------------|
//! | `IMCF_PREFS_FILE` | Preference store path (default: config dir)   |
//! | `IMCF_HOST_DIR`   | Host base directory searched by `apply`       |
//! | `RUST_LOG`        | Log filter, overrides the debug-flag default  |
//!
//! `apply` always exits successfully: a settings file is optional and must
//! never block host start-up.  `enable-debug` reports failures through its
//! exit code.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use imcf_core::ApplyOutcome;
use tracing::warn;

use imcf_prefs::application::apply_settings::ApplySettingsUseCase;
use imcf_prefs::application::debug_flag::{enable_debug, read_debug_flag};
use imcf_prefs::infrastructure::logging::{init_tracing, TracingLogger};
use imcf_prefs::infrastructure::preferences::{
    default_prefs_path, FilePreferenceStore, PrefsStoreError,
};
use imcf_prefs::infrastructure::settings_file::FsSettingsSource;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Applies IMCF site settings and debug flags to the host preference store.
#[derive(Debug, Parser)]
#[command(name = "imcf-prefs", version)]
struct Cli {
    /// Preference store file.  Defaults to `prefs.toml` in the platform
    /// config directory.
    #[arg(long, global = true, env = "IMCF_PREFS_FILE")]
    prefs_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply `imcf-settings.json` from the host base directory.
    Apply {
        /// Host base directory containing `imcf-settings.json`.
        #[arg(long, env = "IMCF_HOST_DIR")]
        host_dir: Option<PathBuf>,
    },
    /// Turn on IMCF debug logging.
    EnableDebug,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Apply { host_dir } => {
            run_apply(cli.prefs_file, host_dir);
            Ok(())
        }
        Command::EnableDebug => run_enable_debug(cli.prefs_file),
    }
}

fn resolve_prefs_path(explicit: Option<PathBuf>) -> Result<PathBuf, PrefsStoreError> {
    match explicit {
        Some(path) => Ok(path),
        None => default_prefs_path(),
    }
}

/// Runs `apply` end to end.
///
/// Returns `None` when the preference store itself cannot be opened; that is
/// logged as a warning and never turned into an error.
fn run_apply(prefs_file: Option<PathBuf>, host_dir: Option<PathBuf>) -> Option<ApplyOutcome> {
    let mut store = match resolve_prefs_path(prefs_file).and_then(FilePreferenceStore::load) {
        Ok(store) => store,
        Err(e) => {
            init_tracing(false);
            warn!("preference store unavailable, settings not applied: {e}");
            return None;
        }
    };

    // The debug flag is read once, before any diagnostic output.
    let debug_enabled = read_debug_flag(&store);
    init_tracing(debug_enabled);

    let use_case = ApplySettingsUseCase::new(
        Arc::new(FsSettingsSource::new()),
        Arc::new(TracingLogger::new(debug_enabled)),
    );
    let outcome = use_case.apply(host_dir.as_deref(), &mut store);
    tracing::trace!(?outcome, "apply finished");
    Some(outcome)
}

fn run_enable_debug(prefs_file: Option<PathBuf>) -> anyhow::Result<()> {
    init_tracing(false);

    let path = resolve_prefs_path(prefs_file).context("cannot locate the preference store")?;
    let mut store = FilePreferenceStore::load(&path)
        .with_context(|| format!("failed to load preferences from {}", path.display()))?;

    enable_debug(&mut store, &TracingLogger::new(false))
        .with_context(|| format!("failed to save preferences to {}", path.display()))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
