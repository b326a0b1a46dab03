use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::FileLoader;
use crate::application::services::{
    AnalysisContext, ContactPatterns, DocumentAnalyzer, FinancialKeywords, SummaryLimits,
    TextExtractor,
};
use crate::infrastructure::nlp::{
    HeuristicEntityTagger, LexiconSentimentScorer, SummarizerFactory, SummarizerFactoryError,
};
use crate::infrastructure::text_processing::{CompositeFileLoader, PdfAdapter};
use crate::presentation::config::{AnalysisSettings, Settings};

pub struct AppState<F: ?Sized>
where
    F: FileLoader,
{
    pub text_extractor: Arc<TextExtractor<F>>,
    pub analyzer: Arc<DocumentAnalyzer>,
    pub settings: Settings,
}

impl<F: ?Sized> Clone for AppState<F>
where
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            text_extractor: Arc::clone(&self.text_extractor),
            analyzer: Arc::clone(&self.analyzer),
            settings: self.settings.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid contact pattern: {0}")]
    InvalidContactPattern(#[from] regex::Error),
    #[error("summarizer: {0}")]
    Summarizer(#[from] SummarizerFactoryError),
}

impl AppState<CompositeFileLoader> {
    /// Builds the loaders and the shared analysis context once, for the whole process.
    pub fn from_settings(settings: Settings) -> Result<Self, StartupError> {
        let pdf_adapter =
            PdfAdapter::with_timeout(Duration::from_secs(settings.extraction.pdf_timeout_secs));
        let file_loader = Arc::new(CompositeFileLoader::with_default_adapters(pdf_adapter));

        let context = build_analysis_context(&settings)?;
        let analyzer = DocumentAnalyzer::new(Arc::new(context), settings.analysis.profile);

        tracing::info!(profile = %settings.analysis.profile, "Analysis context ready");

        Ok(Self {
            text_extractor: Arc::new(TextExtractor::new(file_loader)),
            analyzer: Arc::new(analyzer),
            settings,
        })
    }
}

pub fn build_analysis_context(settings: &Settings) -> Result<AnalysisContext, StartupError> {
    let analysis: &AnalysisSettings = &settings.analysis;

    let summarizer = SummarizerFactory::create(&settings.summarizer, analysis.summary_sentences)?;
    let contact_patterns = ContactPatterns::new(&analysis.email_pattern, &analysis.phone_pattern)?;
    let financial_keywords =
        FinancialKeywords::new(&analysis.profit_keywords, &analysis.loss_keywords);

    Ok(AnalysisContext::new(
        summarizer,
        Arc::new(HeuristicEntityTagger::new()),
        Arc::new(LexiconSentimentScorer::new()),
    )
    .with_contact_patterns(contact_patterns)
    .with_financial_keywords(financial_keywords)
    .with_summary_limits(SummaryLimits {
        input_chars: analysis.summary_input_chars,
        verbatim_chars: analysis.verbatim_summary_chars,
    }))
}
