mod contact_extractor;
mod document_analyzer;
mod financial_classifier;
mod text_extractor;
mod trend_extractor;

pub use contact_extractor::{
    ContactPatterns, DEFAULT_EMAIL_PATTERN, DEFAULT_PHONE_PATTERN, extract_contact_info,
};
pub use document_analyzer::{
    AnalysisContext, AnalysisError, DEFAULT_SUMMARY_INPUT_CHARS, DEFAULT_VERBATIM_SUMMARY_CHARS,
    DocumentAnalyzer, SummaryLimits,
};
pub use financial_classifier::{
    DEFAULT_LOSS_KEYWORDS, DEFAULT_PROFIT_KEYWORDS, FinancialKeywords, classify_financial_status,
};
pub use text_extractor::TextExtractor;
pub use trend_extractor::extract_statistical_insights;
