use std::fmt;

use serde::Deserialize;

/// Which set of analyses the analyzer runs.
///
/// `Entities` covers summary, persons and sentiment. `Financial` adds
/// organizations, contact info and the profit/loss classifier. `Statistical`
/// adds tabular trend insights on top of `Financial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisProfile {
    Entities,
    Financial,
    #[default]
    Statistical,
}

impl AnalysisProfile {
    pub fn includes_organizations(&self) -> bool {
        !matches!(self, AnalysisProfile::Entities)
    }

    pub fn includes_contact_info(&self) -> bool {
        !matches!(self, AnalysisProfile::Entities)
    }

    pub fn includes_financial_status(&self) -> bool {
        !matches!(self, AnalysisProfile::Entities)
    }

    pub fn includes_statistical_insights(&self) -> bool {
        matches!(self, AnalysisProfile::Statistical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisProfile::Entities => "entities",
            AnalysisProfile::Financial => "financial",
            AnalysisProfile::Statistical => "statistical",
        }
    }
}

impl fmt::Display for AnalysisProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
