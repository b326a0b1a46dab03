use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::ports::{
    EntityTagger, EntityTaggerError, SentimentError, SentimentScorer, Summarizer,
    SummarizerError,
};
use crate::domain::{AnalysisProfile, AnalysisResult, Entity, EntityLabel, SentimentScore};

use super::contact_extractor::{ContactPatterns, extract_contact_info};
use super::financial_classifier::{FinancialKeywords, classify_financial_status};
use super::trend_extractor::extract_statistical_insights;

pub const DEFAULT_SUMMARY_INPUT_CHARS: usize = 1000;
pub const DEFAULT_VERBATIM_SUMMARY_CHARS: usize = 100;

/// How much text the summarizer sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimits {
    /// Input is cut to this many characters before summarizing; no chunking.
    pub input_chars: usize,
    /// Texts no longer than this are their own summary.
    pub verbatim_chars: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            input_chars: DEFAULT_SUMMARY_INPUT_CHARS,
            verbatim_chars: DEFAULT_VERBATIM_SUMMARY_CHARS,
        }
    }
}

/// Read-only models and rule sets, built once at start-up and shared by all requests.
pub struct AnalysisContext {
    pub summarizer: Arc<dyn Summarizer>,
    pub entity_tagger: Arc<dyn EntityTagger>,
    pub sentiment_scorer: Arc<dyn SentimentScorer>,
    pub financial_keywords: FinancialKeywords,
    pub contact_patterns: ContactPatterns,
    pub summary_limits: SummaryLimits,
}

impl AnalysisContext {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        entity_tagger: Arc<dyn EntityTagger>,
        sentiment_scorer: Arc<dyn SentimentScorer>,
    ) -> Self {
        Self {
            summarizer,
            entity_tagger,
            sentiment_scorer,
            financial_keywords: FinancialKeywords::default(),
            contact_patterns: ContactPatterns::default(),
            summary_limits: SummaryLimits::default(),
        }
    }

    pub fn with_financial_keywords(mut self, keywords: FinancialKeywords) -> Self {
        self.financial_keywords = keywords;
        self
    }

    pub fn with_contact_patterns(mut self, patterns: ContactPatterns) -> Self {
        self.contact_patterns = patterns;
        self
    }

    pub fn with_summary_limits(mut self, limits: SummaryLimits) -> Self {
        self.summary_limits = limits;
        self
    }
}

pub struct DocumentAnalyzer {
    context: Arc<AnalysisContext>,
    profile: AnalysisProfile,
}

impl DocumentAnalyzer {
    pub fn new(context: Arc<AnalysisContext>, profile: AnalysisProfile) -> Self {
        Self { context, profile }
    }

    pub fn profile(&self) -> AnalysisProfile {
        self.profile
    }

    #[tracing::instrument(skip(self, text), fields(profile = %self.profile, chars = text.len()))]
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            tracing::debug!("Blank document, returning empty analysis");
            return Ok(AnalysisResult::empty(self.profile));
        }

        let (summary, entities, sentiment) = tokio::try_join!(
            self.summarize(text),
            self.tag_entities(text),
            self.score_sentiment(text),
        )?;

        let persons = collect_labelled(&entities, EntityLabel::Person);
        let organizations = self
            .profile
            .includes_organizations()
            .then(|| collect_labelled(&entities, EntityLabel::Organization));

        let contact_info = self
            .profile
            .includes_contact_info()
            .then(|| extract_contact_info(text, &self.context.contact_patterns));

        let financial_status = self
            .profile
            .includes_financial_status()
            .then(|| classify_financial_status(text, &self.context.financial_keywords));

        let statistical_insights = self
            .profile
            .includes_statistical_insights()
            .then(|| extract_statistical_insights(text));

        tracing::info!(
            persons = persons.len(),
            organizations = organizations.as_ref().map_or(0, BTreeSet::len),
            has_contacts = contact_info.as_ref().is_some_and(|c| !c.is_empty()),
            financial_status = ?financial_status,
            insights = statistical_insights.as_ref().map_or(0, Vec::len),
            "Document analyzed"
        );

        Ok(AnalysisResult {
            summary: Some(summary),
            persons: Some(persons),
            organizations,
            contact_info,
            sentiment: Some(sentiment),
            financial_status,
            statistical_insights,
        })
    }

    async fn summarize(&self, text: &str) -> Result<String, AnalysisError> {
        let limits = self.context.summary_limits;

        if text.chars().count() <= limits.verbatim_chars {
            return Ok(text.to_string());
        }

        let input = truncate_chars(text, limits.input_chars);
        let summary = self.context.summarizer.summarize(input).await?;
        Ok(summary)
    }

    async fn tag_entities(&self, text: &str) -> Result<Vec<Entity>, AnalysisError> {
        Ok(self.context.entity_tagger.tag(text).await?)
    }

    async fn score_sentiment(&self, text: &str) -> Result<SentimentScore, AnalysisError> {
        Ok(self.context.sentiment_scorer.score(text).await?)
    }
}

fn collect_labelled(entities: &[Entity], label: EntityLabel) -> BTreeSet<String> {
    entities
        .iter()
        .filter(|e| e.label == label)
        .map(|e| e.text.clone())
        .collect()
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("summarization: {0}")]
    Summarization(#[from] SummarizerError),
    #[error("entity tagging: {0}")]
    EntityTagging(#[from] EntityTaggerError),
    #[error("sentiment: {0}")]
    Sentiment(#[from] SentimentError),
}
