use std::sync::Arc;

use async_trait::async_trait;
use docsight::application::ports::{FileLoader, FileLoaderError};
use docsight::domain::{DocumentFormat, UploadedDocument};
use docsight::infrastructure::text_processing::{CompositeFileLoader, PdfAdapter};

struct StaticLoader(&'static str);

#[async_trait]
impl FileLoader for StaticLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        _document: &UploadedDocument,
    ) -> Result<String, FileLoaderError> {
        Ok(self.0.to_string())
    }
}

fn document(filename: &str) -> UploadedDocument {
    UploadedDocument::new(filename.to_string(), 0)
}

#[tokio::test]
async fn given_default_adapters_when_loading_text_file_then_routes_to_plain_text() {
    let loader = CompositeFileLoader::with_default_adapters(PdfAdapter::new());

    let text = loader
        .extract_text(b"plain words", &document("a.txt"))
        .await
        .unwrap();

    assert_eq!(text, "plain words");
}

#[tokio::test]
async fn given_registered_adapters_when_loading_then_dispatches_on_format() {
    let pdf: Arc<dyn FileLoader> = Arc::new(StaticLoader("from pdf"));
    let docx: Arc<dyn FileLoader> = Arc::new(StaticLoader("from docx"));
    let loader = CompositeFileLoader::new(vec![
        (DocumentFormat::Pdf, pdf),
        (DocumentFormat::Docx, docx),
    ]);

    assert_eq!(
        loader.extract_text(b"", &document("x.pdf")).await.unwrap(),
        "from pdf"
    );
    assert_eq!(
        loader.extract_text(b"", &document("x.docx")).await.unwrap(),
        "from docx"
    );
}

#[tokio::test]
async fn given_unregistered_format_when_loading_then_returns_unsupported_format() {
    let loader = CompositeFileLoader::new(Vec::new());

    let result = loader.extract_text(b"", &document("x.txt")).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(f)) if f == "txt"));
}
