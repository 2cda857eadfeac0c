//! Station payloads and the status-anchored join that flattens them into
//! [`HistoryRecord`]s.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;
use crate::parser::parse_stations;
use crate::record::HistoryRecord;

/// Live availability for one station, from `station_status.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationStatus {
    pub station_id: String,
    pub num_bikes_available: Option<i64>,
    pub num_docks_available: Option<i64>,
}

/// Static metadata for one station, from `station_information.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationInfo {
    pub station_id: String,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Parses both payloads and joins them, stamping every record with `timestamp`.
pub fn join_feeds(
    status_json: Value,
    info_json: Value,
    timestamp: DateTime<Utc>,
) -> Result<Vec<HistoryRecord>> {
    let status: Vec<StationStatus> = parse_stations("station status", status_json)?;
    let info: Vec<StationInfo> = parse_stations("station information", info_json)?;
    Ok(join_stations(status, info, timestamp))
}

/// Emits one record per distinct status station id.
///
/// Repeated ids are last-write-wins on both sides; output keeps the position
/// where a status id first appeared. Info entries with no matching status are
/// dropped, status entries with no info get `null` name and coordinates.
pub fn join_stations(
    status: Vec<StationStatus>,
    info: Vec<StationInfo>,
    timestamp: DateTime<Utc>,
) -> Vec<HistoryRecord> {
    let info_by_id: HashMap<String, StationInfo> = info
        .into_iter()
        .map(|s| (s.station_id.clone(), s))
        .collect();

    dedup_last_wins(status)
        .into_iter()
        .map(|status| {
            let info = info_by_id.get(&status.station_id);
            HistoryRecord {
                timestamp,
                name: info.and_then(|i| i.name.clone()),
                lat: info.and_then(|i| i.lat),
                lon: info.and_then(|i| i.lon),
                num_bikes_available: status.num_bikes_available,
                num_docks_available: status.num_docks_available,
                station_id: status.station_id,
            }
        })
        .collect()
}

fn dedup_last_wins(stations: Vec<StationStatus>) -> Vec<StationStatus> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(stations.len());
    let mut ordered: Vec<StationStatus> = Vec::with_capacity(stations.len());

    for station in stations {
        match slots.get(&station.station_id) {
            Some(&slot) => ordered[slot] = station,
            None => {
                slots.insert(station.station_id.clone(), ordered.len());
                ordered.push(station);
            }
        }
    }

    ordered
}
