use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use docsight::application::ports::{
    EntityTagger, EntityTaggerError, SentimentError, SentimentScorer, Summarizer, SummarizerError,
};
use docsight::application::services::{
    AnalysisContext, AnalysisError, DocumentAnalyzer, FinancialKeywords, SummaryLimits,
};
use docsight::domain::{
    AnalysisProfile, Entity, EntityLabel, FinancialStatus, SentimentScore,
};

#[derive(Default)]
struct RecordingSummarizer {
    calls: AtomicUsize,
    last_input_chars: AtomicUsize,
}

#[async_trait]
impl Summarizer for RecordingSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_input_chars
            .store(text.chars().count(), Ordering::SeqCst);
        Ok("model summary".to_string())
    }
}

struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String, SummarizerError> {
        Err(SummarizerError::Failed("model unavailable".to_string()))
    }
}

#[derive(Default)]
struct FixedTagger {
    calls: AtomicUsize,
}

#[async_trait]
impl EntityTagger for FixedTagger {
    async fn tag(&self, _text: &str) -> Result<Vec<Entity>, EntityTaggerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            Entity::new("Jane Smith", EntityLabel::Person),
            Entity::new("Acme Corp", EntityLabel::Organization),
            Entity::new("Jane Smith", EntityLabel::Person),
            Entity::new("Paris", EntityLabel::Location),
        ])
    }
}

#[derive(Default)]
struct FixedScorer {
    calls: AtomicUsize,
}

#[async_trait]
impl SentimentScorer for FixedScorer {
    async fn score(&self, _text: &str) -> Result<SentimentScore, SentimentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SentimentScore::new(0.5, 0.25))
    }
}

struct Fixture {
    summarizer: Arc<RecordingSummarizer>,
    tagger: Arc<FixedTagger>,
    scorer: Arc<FixedScorer>,
    context: Arc<AnalysisContext>,
}

fn fixture() -> Fixture {
    let summarizer = Arc::new(RecordingSummarizer::default());
    let tagger = Arc::new(FixedTagger::default());
    let scorer = Arc::new(FixedScorer::default());

    let context = Arc::new(AnalysisContext::new(
        summarizer.clone(),
        tagger.clone(),
        scorer.clone(),
    ));

    Fixture {
        summarizer,
        tagger,
        scorer,
        context,
    }
}

fn long_text() -> String {
    "The quarterly report shows a clear profit across every region. ".repeat(30)
}

#[tokio::test]
async fn given_blank_text_when_analyzing_then_returns_empty_result_without_model_calls() {
    let f = fixture();
    let analyzer = DocumentAnalyzer::new(f.context.clone(), AnalysisProfile::Financial);

    let result = analyzer.analyze("  \n\t ").await.unwrap();

    assert_eq!(result.summary.as_deref(), Some(""));
    assert!(result.persons.unwrap().is_empty());
    assert_eq!(result.sentiment, Some(SentimentScore::neutral()));
    assert_eq!(result.financial_status, Some(FinancialStatus::Unknown));
    assert_eq!(f.summarizer.calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.tagger.calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.scorer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_short_text_when_analyzing_then_text_is_its_own_summary() {
    let f = fixture();
    let analyzer = DocumentAnalyzer::new(f.context.clone(), AnalysisProfile::Entities);

    let result = analyzer.analyze("Jane Smith joined Acme Corp.").await.unwrap();

    assert_eq!(result.summary.as_deref(), Some("Jane Smith joined Acme Corp."));
    assert_eq!(f.summarizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_long_text_when_analyzing_then_summarizer_sees_truncated_input() {
    let f = fixture();
    let analyzer = DocumentAnalyzer::new(f.context.clone(), AnalysisProfile::Entities);

    let result = analyzer.analyze(&long_text()).await.unwrap();

    assert_eq!(result.summary.as_deref(), Some("model summary"));
    assert_eq!(f.summarizer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.summarizer.last_input_chars.load(Ordering::SeqCst), 1000);
}

#[tokio::test]
async fn given_custom_summary_limits_when_analyzing_then_limits_are_honored() {
    let summarizer = Arc::new(RecordingSummarizer::default());
    let context = AnalysisContext::new(
        summarizer.clone(),
        Arc::new(FixedTagger::default()),
        Arc::new(FixedScorer::default()),
    )
    .with_summary_limits(SummaryLimits {
        input_chars: 20,
        verbatim_chars: 5,
    });
    let analyzer = DocumentAnalyzer::new(Arc::new(context), AnalysisProfile::Entities);

    analyzer.analyze("Ünïcödé text that is long enough").await.unwrap();

    assert_eq!(summarizer.last_input_chars.load(Ordering::SeqCst), 20);
}

#[tokio::test]
async fn given_entities_profile_when_analyzing_then_only_core_fields_are_set() {
    let f = fixture();
    let analyzer = DocumentAnalyzer::new(f.context.clone(), AnalysisProfile::Entities);

    let result = analyzer.analyze(&long_text()).await.unwrap();

    let persons = result.persons.unwrap();
    assert_eq!(persons.len(), 1);
    assert!(persons.contains("Jane Smith"));
    assert_eq!(result.sentiment, Some(SentimentScore::new(0.5, 0.25)));
    assert!(result.organizations.is_none());
    assert!(result.contact_info.is_none());
    assert!(result.financial_status.is_none());
    assert!(result.statistical_insights.is_none());
}

#[tokio::test]
async fn given_financial_profile_when_analyzing_then_financial_fields_are_set() {
    let f = fixture();
    let analyzer = DocumentAnalyzer::new(f.context.clone(), AnalysisProfile::Financial);
    let text = format!("{} Reach us at ir@acme.test.", long_text());

    let result = analyzer.analyze(&text).await.unwrap();

    assert!(result.organizations.unwrap().contains("Acme Corp"));
    assert!(result.contact_info.unwrap().emails.contains("ir@acme.test"));
    assert_eq!(result.financial_status, Some(FinancialStatus::Profit));
    assert!(result.statistical_insights.is_none());
}

#[tokio::test]
async fn given_statistical_profile_when_analyzing_then_table_trends_are_reported() {
    let f = fixture();
    let analyzer = DocumentAnalyzer::new(f.context.clone(), AnalysisProfile::Statistical);
    let text = "Five year revenue overview for the board, figures in thousands of dollars.\n\
Year    Revenue\n\
2020    100\n\
2021    120\n\
2022    140\n";

    let result = analyzer.analyze(text).await.unwrap();

    let insights = result.statistical_insights.unwrap();
    assert!(
        insights
            .iter()
            .any(|s| s.starts_with("Revenue increased consistently")),
        "{insights:?}"
    );
    assert!(result.organizations.is_some());
    assert!(result.financial_status.is_some());
}

#[tokio::test]
async fn given_custom_keywords_when_analyzing_then_classifier_uses_them() {
    let context = AnalysisContext::new(
        Arc::new(RecordingSummarizer::default()),
        Arc::new(FixedTagger::default()),
        Arc::new(FixedScorer::default()),
    )
    .with_financial_keywords(FinancialKeywords::new(["windfall"], ["writedown"]));
    let analyzer = DocumentAnalyzer::new(Arc::new(context), AnalysisProfile::Financial);

    let result = analyzer.analyze("A writedown hit earnings.").await.unwrap();

    assert_eq!(result.financial_status, Some(FinancialStatus::Loss));
}

#[tokio::test]
async fn given_failing_summarizer_when_analyzing_then_returns_summarization_error() {
    let context = AnalysisContext::new(
        Arc::new(FailingSummarizer),
        Arc::new(FixedTagger::default()),
        Arc::new(FixedScorer::default()),
    );
    let analyzer = DocumentAnalyzer::new(Arc::new(context), AnalysisProfile::Statistical);

    let result = analyzer.analyze(&long_text()).await;

    assert!(matches!(result, Err(AnalysisError::Summarization(_))));
}
