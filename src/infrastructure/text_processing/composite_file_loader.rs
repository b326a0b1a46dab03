use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedDocument};

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF, DOCX and plain-text adapters.
    pub fn with_default_adapters(pdf_adapter: PdfAdapter) -> Self {
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(pdf_adapter);
        let docx_adapter: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());
        let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);

        Self::new(vec![
            (DocumentFormat::Pdf, pdf_adapter),
            (DocumentFormat::Docx, docx_adapter),
            (DocumentFormat::Text, text_adapter),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, FileLoaderError> {
        let Some(adapter) = self.adapters.get(&document.format) else {
            tracing::warn!(
                format = document.format.as_str(),
                registered = self.adapters.len(),
                "No adapter registered for format"
            );
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        };

        adapter.extract_text(data, document).await
    }
}
