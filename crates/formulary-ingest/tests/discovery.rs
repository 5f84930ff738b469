//! Tests for source document discovery and reader selection.

use std::fs;

use formulary_ingest::{
    DocumentReader, FORMULARY_FILENAME, IngestError, PlainTextReader, find_source_document,
    reader_for,
};

#[test]
fn exact_filename_is_preferred() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("another-formulary.pdf"), b"%PDF-1.4").expect("write");
    fs::write(dir.path().join(FORMULARY_FILENAME), b"%PDF-1.4").expect("write");

    let found = find_source_document(dir.path()).expect("find document");
    assert_eq!(found.file_name().unwrap(), FORMULARY_FILENAME);
}

#[test]
fn falls_back_to_hinted_pdf_names() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("notes.pdf"), b"%PDF-1.4").expect("write");
    fs::write(dir.path().join("essential-medicines-list.pdf"), b"%PDF-1.4").expect("write");

    let found = find_source_document(dir.path()).expect("find document");
    assert_eq!(
        found.file_name().unwrap(),
        "essential-medicines-list.pdf"
    );
}

#[test]
fn missing_document_is_input_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = find_source_document(dir.path()).expect_err("no document");
    assert!(matches!(error, IngestError::InputNotFound { .. }));
}

#[test]
fn reader_selection_by_extension() {
    let dir = tempfile::tempdir().expect("temp dir");
    let txt = dir.path().join("sample.txt");
    fs::write(&txt, "Paracetamol 500mg tablet\n").expect("write");
    let reader = reader_for(&txt).expect("text reader");
    assert_eq!(reader.name(), "plain-text");

    let unknown = dir.path().join("sample.docx");
    fs::write(&unknown, b"stub").expect("write");
    let error = reader_for(&unknown).expect_err("no backend");
    assert!(matches!(error, IngestError::MissingBackend { .. }));

    let absent = dir.path().join("absent.pdf");
    let error = reader_for(&absent).expect_err("missing file");
    assert!(matches!(error, IngestError::InputNotFound { .. }));
}

#[test]
fn plain_text_reader_splits_pages() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pages.txt");
    fs::write(&path, "Amoxicillin 500mg capsule\n\u{c}Paracetamol 500mg tablet\n").expect("write");

    let pages = PlainTextReader.read_pages(&path).expect("read pages");
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("Amoxicillin"));
    assert!(pages[1].contains("Paracetamol"));
}
