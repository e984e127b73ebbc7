//! CSV report output.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::models::PaperRecord;

/// Write `records` as CSV to `path`.
///
/// The header row comes from the record field names, so an empty report is an
/// error. The file is not created in that case.
pub fn write_csv(path: &Path, records: &[PaperRecord]) -> ReportResult<()> {
    if records.is_empty() {
        return Err(ReportError::EmptyReport);
    }

    let file = File::create(path)?;
    write_csv_to(file, records)?;

    tracing::info!(path = %path.display(), records = records.len(), "Wrote CSV report");
    Ok(())
}

/// Write `records` as CSV to any writer.
pub fn write_csv_to<W: Write>(writer: W, records: &[PaperRecord]) -> ReportResult<()> {
    if records.is_empty() {
        return Err(ReportError::EmptyReport);
    }

    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Render `records` as a CSV string.
pub fn to_csv_string(records: &[PaperRecord]) -> ReportResult<String> {
    let mut buf = Vec::new();
    write_csv_to(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| ReportError::Io(std::io::Error::other(e)))
}

/// Read a CSV report written by [`write_csv`].
pub fn read_csv(path: &Path) -> ReportResult<Vec<PaperRecord>> {
    read_csv_from(File::open(path)?)
}

/// Read a CSV report from any reader.
pub fn read_csv_from<R: Read>(reader: R) -> ReportResult<Vec<PaperRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
