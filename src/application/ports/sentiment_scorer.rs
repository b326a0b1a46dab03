use async_trait::async_trait;

use crate::domain::SentimentScore;

#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<SentimentScore, SentimentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("sentiment scoring failed: {0}")]
    Failed(String),
}
