use docsight::application::ports::Summarizer;
use docsight::infrastructure::nlp::{SummarizerFactory, SummarizerFactoryError};
use docsight::presentation::config::{SummarizerProvider, SummarizerSettings};

#[tokio::test]
async fn given_default_settings_when_creating_then_returns_working_extractive_summarizer() {
    let summarizer = SummarizerFactory::create(&SummarizerSettings::default(), 1).unwrap();

    let summary = summarizer
        .summarize("Profit rose. Profit rose again with profit everywhere. Costs fell.")
        .await
        .unwrap();

    assert_eq!(summary, "Profit rose.");
}

#[test]
fn given_openai_provider_without_key_when_creating_then_returns_missing_api_key() {
    let settings = SummarizerSettings {
        provider: SummarizerProvider::OpenAi,
        ..SummarizerSettings::default()
    };

    let result = SummarizerFactory::create(&settings, 3);

    assert!(matches!(result, Err(SummarizerFactoryError::MissingApiKey)));
}

#[test]
fn given_openai_provider_with_empty_key_when_creating_then_returns_missing_api_key() {
    let settings = SummarizerSettings {
        provider: SummarizerProvider::OpenAi,
        api_key: Some(String::new()),
        ..SummarizerSettings::default()
    };

    let result = SummarizerFactory::create(&settings, 3);

    assert!(matches!(result, Err(SummarizerFactoryError::MissingApiKey)));
}

#[test]
fn given_openai_provider_with_key_when_creating_then_succeeds() {
    let settings = SummarizerSettings {
        provider: SummarizerProvider::OpenAi,
        api_key: Some("sk-test".to_string()),
        ..SummarizerSettings::default()
    };

    assert!(SummarizerFactory::create(&settings, 3).is_ok());
}
