use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::analyzers::types::{AggregatedPoint, ChartOutcome};
use crate::error::{Error, Result};

const CHART_SIZE: (u32, u32) = (1600, 800);
const TITLE: &str = "Total Available Bikes in Vienna Over Time";

/// Draws `points` as a line with circle markers to a PNG at `path`,
/// replacing any existing image.
///
/// Returns [`ChartOutcome::NothingToVisualize`] without touching the
/// filesystem when `points` is empty.
pub fn render_chart(points: &[AggregatedPoint], path: &Path) -> Result<ChartOutcome> {
    let timestamps = points.iter().map(|p| p.timestamp);
    let (Some(first), Some(last)) = (timestamps.clone().min(), timestamps.max()) else {
        return Ok(ChartOutcome::NothingToVisualize);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let (start, end) = time_range(first, last);
    let (y_min, y_max) = value_range(points);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 32).into_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(start..end, y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Timestamp (UTC)")
        .y_desc("Number of Bikes Available")
        .x_label_formatter(&|x| x.format("%m-%d %H:%M").to_string())
        .light_line_style(BLACK.mix(0.1))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.timestamp, p.total_bikes_available)),
            BLUE.stroke_width(2),
        ))
        .map_err(chart_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.timestamp, p.total_bikes_available), 4, BLUE.filled())),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;

    info!(path = %path.display(), points = points.len(), "Chart rendered");
    Ok(ChartOutcome::Rendered {
        path: path.to_path_buf(),
        points: points.len(),
    })
}

fn chart_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// A single instant is widened so the x axis has a non-zero span.
fn time_range(first: DateTime<Utc>, last: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    if first == last {
        (first - Duration::minutes(30), last + Duration::minutes(30))
    } else {
        (first, last)
    }
}

fn value_range(points: &[AggregatedPoint]) -> (i64, i64) {
    let min = points.iter().map(|p| p.total_bikes_available).min().unwrap_or(0);
    let max = points.iter().map(|p| p.total_bikes_available).max().unwrap_or(0);
    let padding = ((max - min) / 10).max(1);
    (min.min(0), max + padding)
}
