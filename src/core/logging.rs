//! Optional file logging for the terminal front end.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Path of the log file. Logging stays off when unset.
pub const LOG_ENV_VAR: &str = "SHADOW_LEGENDS_LOG";

/// Installs a file-backed subscriber when [`LOG_ENV_VAR`] is set.
///
/// The terminal belongs to the UI, so nothing is ever written to stderr.
/// Returns whether a subscriber was installed.
pub fn init_from_env() -> io::Result<bool> {
    let Some(path) = std::env::var_os(LOG_ENV_VAR) else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(log_file = %path.to_string_lossy(), "logging initialized");
    Ok(true)
}
