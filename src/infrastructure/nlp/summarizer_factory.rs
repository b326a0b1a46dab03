use std::sync::Arc;

use crate::application::ports::Summarizer;
use crate::presentation::config::{SummarizerProvider, SummarizerSettings};

use super::{ExtractiveSummarizer, OpenAiSummarizer};

#[derive(Debug, thiserror::Error)]
pub enum SummarizerFactoryError {
    #[error("missing API key: the OpenAI summarizer requires summarizer.api_key")]
    MissingApiKey,
    #[error("summarizer initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct SummarizerFactory;

impl SummarizerFactory {
    pub fn create(
        settings: &SummarizerSettings,
        max_sentences: usize,
    ) -> Result<Arc<dyn Summarizer>, SummarizerFactoryError> {
        match settings.provider {
            SummarizerProvider::Extractive => {
                tracing::info!(max_sentences, "Loading extractive summarizer");
                Ok(Arc::new(ExtractiveSummarizer::new(max_sentences)))
            }
            SummarizerProvider::OpenAi => {
                let key = settings
                    .api_key
                    .as_deref()
                    .filter(|k| !k.is_empty())
                    .ok_or(SummarizerFactoryError::MissingApiKey)?;
                tracing::info!(
                    model = %settings.model,
                    base_url = %settings.base_url,
                    "Loading OpenAI summarizer"
                );
                let summarizer = OpenAiSummarizer::new(&settings.base_url, &settings.model, key)
                    .map_err(|e| SummarizerFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(summarizer))
            }
        }
    }
}
