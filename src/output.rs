//! Append-only newline-delimited JSON history log.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::record::HistoryRecord;

/// Appends `records` to the log at `path`, one compact JSON object per line.
///
/// Parent directories and the file are created on demand. An empty batch
/// performs no I/O and returns `Ok(0)`.
pub fn append_records(path: &Path, records: &[HistoryRecord]) -> Result<usize> {
    if records.is_empty() {
        debug!(path = %path.display(), "Empty batch, log untouched");
        return Ok(0);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), count = records.len(), "Appended records");
    Ok(records.len())
}
