//! File-based sample sources.
//!
//! Sample files are plain CSV with a `date,rate` header:
//!
//! ```text
//! date,rate
//! 2002-01-01,26.5850
//! 2002-02-01,26.2703
//! ```
//!
//! Records are returned as text; date and rate validation happens when they
//! are added to an [`InterpolationEngine`](crate::InterpolationEngine).

use std::io::Read;
use std::path::Path;

use fxinterp_core::{FxError, FxResult};

use crate::sample::SampleRecord;

/// Reads `date,rate` records from any reader.
///
/// # Errors
///
/// Returns `FxError::Parse` for malformed CSV (missing columns, bad header)
/// and `FxError::Io` if the reader fails.
pub fn read_csv<R: Read>(reader: R) -> FxResult<Vec<SampleRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let record: SampleRecord = result.map_err(|e| map_csv_error(&e, row + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Reads `date,rate` records from a file.
pub fn load_csv(path: impl AsRef<Path>) -> FxResult<Vec<SampleRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| FxError::Io {
        reason: format!("{}: {}", path.display(), e),
    })?;
    let records = read_csv(file)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded sample file");
    Ok(records)
}

fn map_csv_error(err: &csv::Error, row: usize) -> FxError {
    match err.kind() {
        csv::ErrorKind::Io(io) => FxError::Io {
            reason: io.to_string(),
        },
        _ => FxError::parse(format!("record {row}: {err}")),
    }
}
