mod analysis_profile;
mod analysis_result;
mod contact_info;
mod document;
mod document_id;
mod entity;
mod financial_status;
mod sentiment_score;

pub use analysis_profile::AnalysisProfile;
pub use analysis_result::AnalysisResult;
pub use contact_info::ContactInfo;
pub use document::{DocumentFormat, UNSUPPORTED_FORMAT_TEXT, UploadedDocument};
pub use document_id::DocumentId;
pub use entity::{Entity, EntityLabel};
pub use financial_status::FinancialStatus;
pub use sentiment_score::SentimentScore;
