//! Integration tests for writing the report to disk.

use infinitus_report::{
    build_report, detect_format_from_path, inspect_file, inspect_properties, write_report_to,
    Error, OUTPUT_FILENAME,
};
use tempfile::tempdir;

#[test]
fn test_writes_file_at_expected_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILENAME);

    let report = write_report_to(&path).unwrap();

    assert!(path.is_file());
    assert_eq!(report.path, path);
    assert_eq!(report.file_name(), OUTPUT_FILENAME);
    assert_eq!(
        report.size as u64,
        std::fs::metadata(&path).unwrap().len()
    );
    assert!(report.absolute_path().unwrap().is_absolute());
}

#[test]
fn test_output_is_well_formed_docx() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILENAME);
    let report = write_report_to(&path).unwrap();

    assert!(detect_format_from_path(&path).is_ok());

    let outline = inspect_file(&path).unwrap();
    assert!(outline.matches(&report.stats));
    assert_eq!(outline.headings, 29);
    assert_eq!(outline.tables, 3);
}

#[test]
fn test_written_file_keeps_document_properties() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILENAME);
    write_report_to(&path).unwrap();

    let props = inspect_properties(&std::fs::read(&path).unwrap()).unwrap();
    let metadata = build_report().metadata;

    for (name, value) in metadata.properties() {
        assert_eq!(props.get(name).map(String::as_str), Some(value), "{name}");
    }
    assert_eq!(
        props.get("company").map(String::as_str),
        Some("INFINITUS Sistemas Inteligentes LTDA")
    );
}

#[test]
fn test_rerun_is_structurally_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILENAME);

    write_report_to(&path).unwrap();
    let first = inspect_file(&path).unwrap();

    // Second run overwrites the same file
    write_report_to(&path).unwrap();
    let second = inspect_file(&path).unwrap();

    assert_eq!(first, second);
    assert!(second.matches(&build_report().stats()));
}

#[test]
fn test_unwritable_destination_fails_with_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join(OUTPUT_FILENAME);

    let result = write_report_to(&path);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_inspect_missing_file() {
    let dir = tempdir().unwrap();
    let result = inspect_file(dir.path().join("nope.docx"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_inspect_rejects_foreign_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.docx");
    std::fs::write(&path, "plain text, not a package").unwrap();

    assert!(matches!(inspect_file(&path), Err(Error::UnknownFormat)));
}
