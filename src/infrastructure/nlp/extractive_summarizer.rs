use std::collections::HashMap;

use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::{Summarizer, SummarizerError};

use super::stopwords::is_stopword;

pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

const POSITION_WEIGHT: f64 = 0.25;

/// Picks the highest-scoring sentences of the input and returns them in document order.
///
/// A sentence scores the mean log term frequency of its non-stopword words,
/// plus a bonus that decays with its position in the text.
pub struct ExtractiveSummarizer {
    max_sentences: usize,
}

impl ExtractiveSummarizer {
    pub fn new(max_sentences: usize) -> Self {
        Self {
            max_sentences: max_sentences.max(1),
        }
    }

    fn split_sentences(text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|s| s.unicode_words().next().is_some())
            .collect()
    }

    fn content_words(sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .map(str::to_lowercase)
            .filter(|w| w.chars().count() > 1 && !is_stopword(w))
            .collect()
    }

    fn select(&self, sentences: &[String]) -> Vec<usize> {
        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for sentence in sentences {
            for word in Self::content_words(sentence) {
                *frequencies.entry(word).or_insert(0) += 1;
            }
        }

        let total = sentences.len() as f64;
        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(position, sentence)| {
                let words = Self::content_words(sentence);
                let term_score = if words.is_empty() {
                    0.0
                } else {
                    words
                        .iter()
                        .map(|w| 1.0 + (frequencies[w] as f64).ln())
                        .sum::<f64>()
                        / words.len() as f64
                };
                let position_score = POSITION_WEIGHT * (1.0 - position as f64 / total);
                (position, term_score + position_score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut chosen: Vec<usize> = scored
            .into_iter()
            .take(self.max_sentences)
            .map(|(position, _)| position)
            .collect();
        chosen.sort_unstable();
        chosen
    }
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_SENTENCES)
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        let sentences = Self::split_sentences(text);

        if sentences.len() <= self.max_sentences {
            return Ok(sentences.join(" "));
        }

        let summary = self
            .select(&sentences)
            .into_iter()
            .map(|i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(
            sentences = sentences.len(),
            kept = self.max_sentences,
            "Extractive summary built"
        );

        Ok(summary)
    }
}
