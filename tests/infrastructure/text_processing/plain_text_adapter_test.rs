use docsight::application::ports::{FileLoader, FileLoaderError};
use docsight::domain::UploadedDocument;
use docsight::infrastructure::text_processing::PlainTextAdapter;

fn document(filename: &str, data: &[u8]) -> UploadedDocument {
    UploadedDocument::new(filename.to_string(), data.len() as u64)
}

#[tokio::test]
async fn given_utf8_text_when_extracting_then_returns_it_unchanged() {
    let data = "hello\n  world ✓".as_bytes();

    let text = PlainTextAdapter
        .extract_text(data, &document("notes.txt", data))
        .await
        .unwrap();

    assert_eq!(text, "hello\n  world ✓");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_returns_extraction_failed() {
    let data = [0xff, 0xfe, 0xfd];

    let result = PlainTextAdapter
        .extract_text(&data, &document("notes.txt", &data))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_text_document_when_extracting_then_returns_unsupported_format() {
    let result = PlainTextAdapter
        .extract_text(b"hello", &document("notes.pdf", b"hello"))
        .await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn given_byte_order_mark_when_extracting_then_it_is_dropped() {
    let data = b"\xEF\xBB\xBFQuarterly notes";

    let text = PlainTextAdapter
        .extract_text(data, &document("notes.txt", data))
        .await
        .unwrap();

    assert_eq!(text, "Quarterly notes");
}
