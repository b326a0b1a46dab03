use crate::domain::FinancialStatus;

pub const DEFAULT_PROFIT_KEYWORDS: &[&str] =
    &["profit", "net income", "gain", "surplus", "positive earnings"];

pub const DEFAULT_LOSS_KEYWORDS: &[&str] =
    &["loss", "deficit", "negative earnings", "expenditure exceeded"];

/// Keyword lists for the profit/loss membership test. Stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialKeywords {
    profit: Vec<String>,
    loss: Vec<String>,
}

impl FinancialKeywords {
    pub fn new<P, L>(profit: P, loss: L) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        Self {
            profit: normalize_keywords(profit),
            loss: normalize_keywords(loss),
        }
    }
}

impl Default for FinancialKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_PROFIT_KEYWORDS, DEFAULT_LOSS_KEYWORDS)
    }
}

fn normalize_keywords<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Plain substring membership on the lower-cased text, not a scored classifier.
pub fn classify_financial_status(text: &str, keywords: &FinancialKeywords) -> FinancialStatus {
    let lowered = text.to_lowercase();
    let profit = keywords.profit.iter().any(|k| lowered.contains(k.as_str()));
    let loss = keywords.loss.iter().any(|k| lowered.contains(k.as_str()));

    FinancialStatus::from_hits(profit, loss)
}
