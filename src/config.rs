//! Runtime settings, read from the environment (a `.env` file is loaded by the binary).

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STATUS_URL: &str =
    "https://api.wstw.at/gateway/WL_WIENMOBIL_API/1/station_status.json";
pub const DEFAULT_INFO_URL: &str =
    "https://api.wstw.at/gateway/WL_WIENMOBIL_API/1/station_information.json";
pub const DEFAULT_HISTORY_PATH: &str = "data/history.jsonl";
pub const DEFAULT_CHART_PATH: &str = "site/chart.png";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoints, file locations and the HTTP timeout used by both pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub status_url: String,
    pub info_url: String,
    pub history_path: PathBuf,
    pub chart_path: PathBuf,
    pub http_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            status_url: DEFAULT_STATUS_URL.to_string(),
            info_url: DEFAULT_INFO_URL.to_string(),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl Settings {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, falling back to defaults
    /// for every key that is absent or blank.
    ///
    /// Recognised keys: `WIENMOBIL_STATUS_URL`, `WIENMOBIL_INFO_URL`,
    /// `HISTORY_PATH`, `CHART_PATH`, `HTTP_TIMEOUT_SECS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(url) = get("WIENMOBIL_STATUS_URL") {
            settings.status_url = url;
        }
        if let Some(url) = get("WIENMOBIL_INFO_URL") {
            settings.info_url = url;
        }
        if let Some(path) = get("HISTORY_PATH") {
            settings.history_path = PathBuf::from(path);
        }
        if let Some(path) = get("CHART_PATH") {
            settings.chart_path = PathBuf::from(path);
        }
        if let Some(raw) = get("HTTP_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("HTTP_TIMEOUT_SECS must be an integer, got '{raw}'"))?;
            if secs == 0 {
                bail!("HTTP_TIMEOUT_SECS must be greater than zero");
            }
            settings.http_timeout = Duration::from_secs(secs);
        }

        Ok(settings)
    }
}
