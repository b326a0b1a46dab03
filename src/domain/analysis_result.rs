use std::collections::BTreeSet;

use serde::Serialize;

use super::analysis_profile::AnalysisProfile;
use super::contact_info::ContactInfo;
use super::financial_status::FinancialStatus;
use super::sentiment_score::SentimentScore;

/// Merged output of every analysis run over one document.
///
/// Keys the active profile does not produce stay `None` and are left out of
/// the serialized JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistical_insights: Option<Vec<String>>,
}

impl AnalysisResult {
    /// The fixed result for blank input under `profile`.
    pub fn empty(profile: AnalysisProfile) -> Self {
        Self {
            summary: Some(String::new()),
            persons: Some(BTreeSet::new()),
            organizations: profile
                .includes_organizations()
                .then(BTreeSet::new),
            contact_info: profile
                .includes_contact_info()
                .then(ContactInfo::default),
            sentiment: Some(SentimentScore::neutral()),
            financial_status: profile
                .includes_financial_status()
                .then_some(FinancialStatus::Unknown),
            statistical_insights: profile
                .includes_statistical_insights()
                .then(Vec::new),
        }
    }
}
