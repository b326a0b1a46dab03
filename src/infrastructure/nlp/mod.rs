mod extractive_summarizer;
mod heuristic_entity_tagger;
mod lexicon_sentiment_scorer;
mod openai_summarizer;
mod stopwords;
mod summarizer_factory;

pub use extractive_summarizer::{DEFAULT_SUMMARY_SENTENCES, ExtractiveSummarizer};
pub use heuristic_entity_tagger::HeuristicEntityTagger;
pub use lexicon_sentiment_scorer::{LexiconSentimentScorer, SentimentLexicon};
pub use openai_summarizer::OpenAiSummarizer;
pub use summarizer_factory::{SummarizerFactory, SummarizerFactoryError};
