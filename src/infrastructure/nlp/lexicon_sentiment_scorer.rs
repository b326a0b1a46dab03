use std::collections::HashMap;

use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::{SentimentError, SentimentScorer};
use crate::domain::SentimentScore;

/// Polarity multiplier applied to a word preceded by a negator.
const NEGATION_FACTOR: f64 = -0.5;

/// `(word, polarity, subjectivity)`
const DEFAULT_ENTRIES: &[(&str, f64, f64)] = &[
    // General positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("outstanding", 0.9, 0.9),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("happy", 0.8, 1.0),
    ("pleased", 0.5, 0.9),
    ("glad", 0.5, 1.0),
    ("love", 0.5, 0.6),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("positive", 0.23, 0.55),
    ("success", 0.3, 0.6),
    ("successful", 0.75, 0.95),
    ("strong", 0.43, 0.73),
    ("impressive", 1.0, 1.0),
    ("satisfied", 0.5, 1.0),
    ("efficient", 0.5, 0.6),
    ("reliable", 0.5, 0.6),
    ("innovative", 0.5, 0.5),
    ("optimistic", 0.6, 0.7),
    ("confident", 0.5, 0.8),
    ("favorable", 0.6, 0.7),
    ("beneficial", 0.5, 0.5),
    ("healthy", 0.5, 0.5),
    ("stable", 0.2, 0.4),
    // Financial positive
    ("profit", 0.4, 0.3),
    ("profitable", 0.5, 0.4),
    ("gain", 0.4, 0.3),
    ("growth", 0.4, 0.3),
    ("growing", 0.3, 0.3),
    ("increase", 0.2, 0.2),
    ("increased", 0.2, 0.2),
    ("improve", 0.4, 0.4),
    ("improved", 0.4, 0.4),
    ("record", 0.3, 0.3),
    ("surplus", 0.3, 0.3),
    ("exceeded", 0.3, 0.4),
    ("outperform", 0.5, 0.5),
    ("recovery", 0.3, 0.3),
    // General negative
    ("bad", -0.7, 0.67),
    ("poor", -0.4, 0.6),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("unhappy", -0.6, 0.9),
    ("hate", -0.8, 0.9),
    ("negative", -0.3, 0.4),
    ("problem", -0.3, 0.4),
    ("difficult", -0.5, 1.0),
    ("weak", -0.38, 0.63),
    ("failure", -0.3, 0.3),
    ("failed", -0.5, 0.3),
    ("concern", -0.3, 0.4),
    ("concerning", -0.4, 0.5),
    ("risk", -0.2, 0.3),
    ("risky", -0.4, 0.5),
    ("uncertain", -0.3, 0.6),
    ("volatile", -0.3, 0.5),
    ("crisis", -0.6, 0.6),
    ("fraud", -0.8, 0.6),
    // Financial negative
    ("loss", -0.4, 0.3),
    ("losses", -0.4, 0.3),
    ("deficit", -0.4, 0.3),
    ("decline", -0.3, 0.3),
    ("declined", -0.3, 0.3),
    ("decrease", -0.2, 0.2),
    ("decreased", -0.2, 0.2),
    ("debt", -0.2, 0.2),
    ("downturn", -0.5, 0.4),
    ("recession", -0.5, 0.4),
    ("bankrupt", -0.8, 0.5),
    ("bankruptcy", -0.8, 0.5),
    ("layoffs", -0.5, 0.4),
    // Subjective but neutral
    ("think", 0.0, 0.5),
    ("believe", 0.0, 0.5),
    ("feel", 0.0, 0.6),
    ("opinion", 0.0, 0.8),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "cannot", "cant", "can't", "don't",
    "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont", "isn't", "isnt", "aren't",
    "arent", "wasn't", "wasnt", "weren't", "werent", "hardly", "barely",
];

const DEFAULT_INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("really", 1.2),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("so", 1.2),
    ("quite", 1.1),
    ("significantly", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.7),
];

#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<String, (f64, f64)>,
    intensifiers: HashMap<String, f64>,
}

impl SentimentLexicon {
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
            intensifiers: HashMap::new(),
        }
    }

    pub fn with_word(mut self, word: &str, polarity: f64, subjectivity: f64) -> Self {
        self.words
            .insert(word.to_lowercase(), (polarity, subjectivity));
        self
    }

    pub fn with_intensifier(mut self, word: &str, factor: f64) -> Self {
        self.intensifiers.insert(word.to_lowercase(), factor);
        self
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        let lexicon = DEFAULT_ENTRIES
            .iter()
            .fold(Self::empty(), |lexicon, (word, polarity, subjectivity)| {
                lexicon.with_word(word, *polarity, *subjectivity)
            });

        DEFAULT_INTENSIFIERS
            .iter()
            .fold(lexicon, |lexicon, (word, factor)| {
                lexicon.with_intensifier(word, *factor)
            })
    }
}

/// Averages the polarity and subjectivity of every lexicon hit in the text.
///
/// A hit directly preceded by an intensifier has its polarity scaled by the
/// factor. A hit preceded by a negator within the two previous words has its
/// polarity multiplied by -0.5.
#[derive(Default)]
pub struct LexiconSentimentScorer {
    lexicon: SentimentLexicon,
}

impl LexiconSentimentScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    pub fn score_text(&self, text: &str) -> SentimentScore {
        let words: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        for (index, word) in words.iter().enumerate() {
            let Some(&(polarity, subjectivity)) = self.lexicon.words.get(word) else {
                continue;
            };

            let factor = index
                .checked_sub(1)
                .and_then(|prev| self.lexicon.intensifiers.get(&words[prev]))
                .copied()
                .unwrap_or(1.0);

            let negated = words[index.saturating_sub(2)..index]
                .iter()
                .any(|w| NEGATIONS.contains(&w.as_str()));

            let mut adjusted = (polarity * factor).clamp(-1.0, 1.0);
            if negated {
                adjusted *= NEGATION_FACTOR;
            }

            polarity_sum += adjusted;
            subjectivity_sum += subjectivity;
            hits += 1;
        }

        if hits == 0 {
            return SentimentScore::neutral();
        }

        SentimentScore::new(polarity_sum / hits as f64, subjectivity_sum / hits as f64)
    }
}

#[async_trait]
impl SentimentScorer for LexiconSentimentScorer {
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    async fn score(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        Ok(self.score_text(text))
    }
}
