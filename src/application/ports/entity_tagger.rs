use async_trait::async_trait;

use crate::domain::Entity;

#[async_trait]
pub trait EntityTagger: Send + Sync {
    /// Returns every entity found in `text`, in document order, duplicates included.
    async fn tag(&self, text: &str) -> Result<Vec<Entity>, EntityTaggerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EntityTaggerError {
    #[error("entity tagging failed: {0}")]
    Failed(String),
}
