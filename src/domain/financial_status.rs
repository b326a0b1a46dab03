use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialStatus {
    Profit,
    Loss,
    Both,
    Unknown,
}

impl FinancialStatus {
    pub fn from_hits(profit: bool, loss: bool) -> Self {
        match (profit, loss) {
            (true, false) => FinancialStatus::Profit,
            (false, true) => FinancialStatus::Loss,
            (true, true) => FinancialStatus::Both,
            (false, false) => FinancialStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialStatus::Profit => "profit",
            FinancialStatus::Loss => "loss",
            FinancialStatus::Both => "both",
            FinancialStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FinancialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
