use crate::analyzers::types::{AggregatedPoint, HistoryRow};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Sums bikes available per exact timestamp, treating `null` as zero.
///
/// Output is ordered by timestamp ascending whatever the input order.
pub fn total_bikes_by_timestamp(rows: &[HistoryRow]) -> Vec<AggregatedPoint> {
    let mut totals: BTreeMap<DateTime<Utc>, i64> = BTreeMap::new();

    for row in rows {
        *totals.entry(row.timestamp).or_insert(0) += row.num_bikes_available.unwrap_or(0);
    }

    totals
        .into_iter()
        .map(|(timestamp, total_bikes_available)| AggregatedPoint {
            timestamp,
            total_bikes_available,
        })
        .collect()
}
