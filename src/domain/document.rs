use super::document_id::DocumentId;

/// The literal text handed to the analyzer when the upload has no known extension.
pub const UNSUPPORTED_FORMAT_TEXT: &str = "Unsupported file format";

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub id: DocumentId,
    pub filename: String,
    pub format: DocumentFormat,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
    Unsupported,
}

impl DocumentFormat {
    /// Case-sensitive suffix match, so `REPORT.PDF` is unsupported.
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".pdf") {
            Self::Pdf
        } else if filename.ends_with(".docx") {
            Self::Docx
        } else if filename.ends_with(".txt") {
            Self::Text
        } else {
            Self::Unsupported
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "txt",
            Self::Unsupported => "unsupported",
        }
    }
}

impl UploadedDocument {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        let format = DocumentFormat::from_filename(&filename);
        Self {
            id: DocumentId::new(),
            filename,
            format,
            size_bytes,
        }
    }
}
