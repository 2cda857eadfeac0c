//! Data types used by the visualization pipeline.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

/// The three history columns read back from a log line, before timestamp parsing.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRow {
    pub(crate) timestamp: String,
    pub(crate) station_id: String,
    pub(crate) num_bikes_available: Option<i64>,
}

/// A projected history row with its timestamp parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub timestamp: DateTime<Utc>,
    pub station_id: String,
    pub num_bikes_available: Option<i64>,
}

/// Total bikes available across every station reporting at `timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatedPoint {
    pub timestamp: DateTime<Utc>,
    pub total_bikes_available: i64,
}

/// What a visualization run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    Rendered { path: PathBuf, points: usize },
    /// The history log does not exist yet.
    NoData,
    /// The log exists but produced no points.
    NothingToVisualize,
}
