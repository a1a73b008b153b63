//! Logging setup
//!
//! Logs go to `logs/fintrack.log` only; writing to the terminal would
//! corrupt the TUI. The level comes from `FINTRACK_LOG` (EnvFilter syntax,
//! e.g. `debug` or `fintrack::store=trace`) and defaults to `info`.

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths::TrackerPaths;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FINTRACK_LOG";

/// Log file name inside the log directory
pub const LOG_FILE: &str = "fintrack.log";

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install the file logger
///
/// Returns the guard that flushes the background writer; keep it alive for
/// the duration of the program. Returns `None` when the log directory
/// cannot be created or a subscriber is already installed, in which case
/// the program runs without logging.
pub fn init(paths: &TrackerPaths) -> Option<WorkerGuard> {
    let log_dir = paths.log_dir();
    if std::fs::create_dir_all(&log_dir).is_err() {
        return None;
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_ansi(false)
        .with_writer(file_writer)
        .try_init()
        .ok()?;

    Some(guard)
}
