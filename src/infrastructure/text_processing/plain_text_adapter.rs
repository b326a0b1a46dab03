use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedDocument};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Strict UTF-8 decoding. A leading byte order mark is dropped.
#[derive(Default)]
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Text {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);

        std::str::from_utf8(body)
            .map(str::to_owned)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "{} is not valid UTF-8: {e}",
                    document.filename
                ))
            })
    }
}
