use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedDocument};

use super::text_sanitizer::sanitize_extracted_text;

/// Reads the paragraph text of an Office Open XML document, one paragraph per line.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let data_owned = data.to_vec();

        let raw = tokio::task::spawn_blocking(move || {
            docx_lite::extract_text_from_bytes(&data_owned)
                .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))
        })
        .await
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = sanitize_extracted_text(&raw);
        tracing::info!(lines = text.lines().count(), "DOCX text extraction complete");

        Ok(text)
    }
}
