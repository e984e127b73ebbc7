//! Console report output.

use std::io::Write;

use crate::error::ReportResult;
use crate::models::PaperRecord;

/// Console rendering style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `Column: value` block per record
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Format a single record as a `Column: value` block.
#[must_use]
pub fn format_record_text(record: &PaperRecord) -> String {
    let mut output = String::new();
    for (column, value) in PaperRecord::COLUMNS.iter().zip(record.values()) {
        output.push_str(&format!("{column}: {value}\n"));
    }
    output
}

/// Write each record individually to `out`. An empty report writes nothing.
pub fn print_records<W: Write>(
    out: &mut W,
    records: &[PaperRecord],
    format: OutputFormat,
) -> ReportResult<()> {
    for record in records {
        match format {
            OutputFormat::Text => writeln!(out, "{}", format_record_text(record))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_block() {
        let record = PaperRecord::new("99", &["Jane Doe".to_string()]).unwrap();
        let text = format_record_text(&record);

        assert!(text.starts_with("PubmedID: 99\n"));
        assert!(text.contains("Non-academic Author(s): Jane Doe\n"));
        assert!(text.contains("Title: Unknown\n"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_json_lines() {
        let records = vec![
            PaperRecord::new("1", &["A".to_string()]).unwrap(),
            PaperRecord::new("2", &["B".to_string()]).unwrap(),
        ];
        let mut out = Vec::new();
        print_records(&mut out, &records, OutputFormat::Json).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["PubmedID"], "1");
        assert_eq!(first["Corresponding Author Email"], "Unknown");
    }

    #[test]
    fn test_empty_prints_nothing() {
        let mut out = Vec::new();
        print_records(&mut out, &[], OutputFormat::Text).unwrap();
        assert!(out.is_empty());
    }
}
