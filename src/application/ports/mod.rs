mod entity_tagger;
mod file_loader;
mod sentiment_scorer;
mod summarizer;

pub use entity_tagger::{EntityTagger, EntityTaggerError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use sentiment_scorer::{SentimentError, SentimentScorer};
pub use summarizer::{Summarizer, SummarizerError};
