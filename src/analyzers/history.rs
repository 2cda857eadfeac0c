use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::analyzers::types::{HistoryRow, RawRow};
use crate::error::{Error, Result};
use crate::record::timestamp;

/// Reads the whole history log, projecting each line to timestamp, station id
/// and bikes available. Blank lines are skipped.
///
/// # Errors
///
/// [`Error::MissingFile`] if the log does not exist, [`Error::Parse`] with the
/// 1-based line number for a malformed line or timestamp.
pub fn load_history(path: &Path) -> Result<Vec<HistoryRow>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut rows = Vec::new();
    // Split on raw bytes so a non-UTF-8 line surfaces as a Parse error with its number.
    for (idx, line) in BufReader::new(file).split(b'\n').enumerate() {
        let line = line?;
        if line.trim_ascii().is_empty() {
            continue;
        }

        let parse_error = |reason: String| Error::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            reason,
        };

        let raw: RawRow = serde_json::from_slice(&line).map_err(|e| parse_error(e.to_string()))?;
        let ts = timestamp::parse(&raw.timestamp)
            .map_err(|e| parse_error(format!("invalid timestamp '{}': {e}", raw.timestamp)))?;

        rows.push(HistoryRow {
            timestamp: ts,
            station_id: raw.station_id,
            num_bikes_available: raw.num_bikes_available,
        });
    }

    debug!(path = %path.display(), rows = rows.len(), "History loaded");
    Ok(rows)
}
