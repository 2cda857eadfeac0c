use std::path::Path;
use tracing::info;

use crate::analyzers::aggregate::total_bikes_by_timestamp;
use crate::analyzers::chart::render_chart;
use crate::analyzers::history::load_history;
use crate::analyzers::types::ChartOutcome;
use crate::error::{Error, Result};

/// Loads the full history, aggregates it and renders the chart.
///
/// A missing log is reported as [`ChartOutcome::NoData`], not as an error.
#[tracing::instrument(skip_all, fields(history = %history_path.display(), chart = %chart_path.display()))]
pub fn visualize(history_path: &Path, chart_path: &Path) -> Result<ChartOutcome> {
    let rows = match load_history(history_path) {
        Ok(rows) => rows,
        Err(Error::MissingFile(_)) => {
            info!("History log not found");
            return Ok(ChartOutcome::NoData);
        }
        Err(e) => return Err(e),
    };

    let points = total_bikes_by_timestamp(&rows);
    info!(rows = rows.len(), points = points.len(), "History aggregated");

    render_chart(&points, chart_path)
}
