use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides the log directory.
pub const LOG_DIR_ENV: &str = "LANDROUTE_LOG_DIR";

/// Directory holding the rolling log files: `$LANDROUTE_LOG_DIR`, else
/// `~/.landroute/logs`.
pub fn log_dir() -> PathBuf {
    resolve_log_dir(std::env::var_os(LOG_DIR_ENV).map(PathBuf::from), dirs::home_dir())
}

fn resolve_log_dir(explicit: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    match explicit.filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => dir,
        None => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".landroute")
            .join("logs"),
    }
}

/// `RUST_LOG` if set and valid, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    init_logging_in(&log_dir(), component, to_stderr)
}

/// Install the global subscriber writing `{component}.{date}.log` files under
/// `dir`, mirrored to stderr when `to_stderr` is set.
///
/// A second call keeps the first subscriber; the returned guard must outlive
/// every log line that should reach the file.
pub fn init_logging_in(dir: &Path, component: &str, to_stderr: bool) -> WorkerGuard {
    let appender = std::fs::create_dir_all(dir)
        .map_err(|e| e.to_string())
        .and_then(|()| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(component)
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| e.to_string())
        });
    let (file_writer, unavailable): (Box<dyn Write + Send>, _) = match appender {
        Ok(appender) => (Box::new(appender), None),
        Err(e) => (Box::new(std::io::sink()), Some(e)),
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_writer);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    let installed = tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_ok();

    if let Some(error) = unavailable {
        tracing::warn!(dir = %dir.display(), %error, "log directory unavailable, file logging disabled");
    } else if installed {
        tracing::debug!(dir = %dir.display(), component, "logging initialized");
    }

    guard
}
