//! Tracing setup for the binary: human-readable stderr plus a daily JSON log file.

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub const DEFAULT_LOG_FILE: &str = "logs/wienmobil_history.log";

/// Splits a log file path into the rolling appender's directory and file prefix.
///
/// A bare file name lands in `logs/`.
pub fn log_location(log_file_path: &str) -> (PathBuf, OsString) {
    let path = Path::new(log_file_path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("logs"), Path::to_path_buf);
    let file = path
        .file_name()
        .map_or_else(|| OsString::from("wienmobil_history.log"), ToOwned::to_owned);
    (dir, file)
}

fn filter(var: &str, default_level: &str) -> Result<EnvFilter> {
    Ok(EnvFilter::from_env(var).add_directive(default_level.parse()?))
}

/// Installs the global subscriber. `RUST_LOG` filters stderr (default `info`),
/// `RUST_LOG_JSON` filters the file (default `debug`).
///
/// Keep the returned guard alive for the whole run, or buffered file output is lost.
pub fn init(log_file_path: &str) -> Result<WorkerGuard> {
    let (dir, file) = log_location(log_file_path);
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_filter(filter("RUST_LOG", "info")?);

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(file_writer)
        .with_filter(filter("RUST_LOG_JSON", "debug")?);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location() {
        let (dir, file) = log_location(DEFAULT_LOG_FILE);
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(file, OsString::from("wienmobil_history.log"));
    }

    #[test]
    fn test_bare_file_name_goes_to_logs_dir() {
        let (dir, file) = log_location("fetch.log");
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(file, OsString::from("fetch.log"));
    }

    #[test]
    fn test_nested_location() {
        let (dir, file) = log_location("/var/log/bikes/history.log");
        assert_eq!(dir, PathBuf::from("/var/log/bikes"));
        assert_eq!(file, OsString::from("history.log"));
    }
}
