use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UNSUPPORTED_FORMAT_TEXT, UploadedDocument};

/// Turns an upload into plain text by dispatching on its filename suffix.
pub struct TextExtractor<F: ?Sized>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
}

impl<F: ?Sized> TextExtractor<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>) -> Self {
        Self { file_loader }
    }

    /// Unknown suffixes are not an error: the placeholder text is returned and
    /// analyzed like any other document. Parse failures of known formats are.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn extract_text(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<String, FileLoaderError> {
        let document = UploadedDocument::new(filename.to_string(), data.len() as u64);

        if document.format == DocumentFormat::Unsupported {
            tracing::warn!(filename, "Unsupported file format, using placeholder text");
            return Ok(UNSUPPORTED_FORMAT_TEXT.to_string());
        }

        let text = self.file_loader.extract_text(data, &document).await?;

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            format = document.format.as_str(),
            chars = text.len(),
            "Text extracted"
        );

        Ok(text)
    }
}
