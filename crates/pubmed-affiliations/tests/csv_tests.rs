//! CSV report file tests.

use pubmed_affiliations::error::ReportError;
use pubmed_affiliations::formatters::{read_csv, write_csv};
use pubmed_affiliations::models::{FieldValue, PaperRecord};

fn make_record(id: &str, authors: &[&str]) -> PaperRecord {
    let authors: Vec<String> = authors.iter().map(|s| (*s).to_string()).collect();
    PaperRecord::new(id, &authors).unwrap()
}

#[test]
fn test_file_roundtrip_preserves_fields_and_order() {
    let mut filled = make_record("38000003", &["Ann Lee"]);
    filled.title = FieldValue::value("Phase II trial, revisited");
    filled.publication_date = FieldValue::value("2024-03-01");
    filled.company_affiliations = FieldValue::value("Helix Biotech GmbH");
    filled.corresponding_author_email = FieldValue::value("ann@helix.example");

    let records = vec![
        make_record("38000001", &["Jane Doe", "John Roe"]),
        make_record("38000002", &["O'Brien, \"Pat\""]),
        filled,
    ];

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");
    write_csv(&out, &records).unwrap();

    let back = read_csv(&out).unwrap();
    assert_eq!(back, records);

    for (original, reread) in records.iter().zip(&back) {
        assert_eq!(original.values(), reread.values());
    }
}

#[test]
fn test_empty_value_survives_roundtrip() {
    let mut record = make_record("1", &["A"]);
    record.corresponding_author_email = FieldValue::value("");

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");
    write_csv(&out, std::slice::from_ref(&record)).unwrap();

    let back = read_csv(&out).unwrap();
    assert_eq!(back[0].corresponding_author_email, FieldValue::value(""));
    assert!(back[0].title.is_not_computed());
}

#[test]
fn test_empty_report_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");

    let err = write_csv(&out, &[]).unwrap_err();
    assert!(matches!(err, ReportError::EmptyReport));
}

#[test]
fn test_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing-dir").join("report.csv");

    let err = write_csv(&out, &[make_record("1", &["A"])]).unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_csv(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
}
