use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CashFlowSummary, PerformanceRange, VolumeAnalysis};

/// Date range forwarded to the backend analysis endpoints. The backend owns
/// the period bucketing; an open bound means "from the beginning" / "until
/// today".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AnalysisQuery {
    pub fn between(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

/// Everything the dashboard landing page renders, assembled in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub distribution: Vec<PerformanceRange>,
    pub cash_flow: CashFlowSummary,
    pub volume: VolumeAnalysis,
}
