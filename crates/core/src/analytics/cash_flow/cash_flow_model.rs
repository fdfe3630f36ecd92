use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One period bucket of client cash flow, already aggregated by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRecord {
    pub period: String,
    #[serde(default)]
    pub deposits: Decimal,
    #[serde(default)]
    pub withdrawals: Decimal,
    #[serde(default)]
    pub net_flow: Decimal,
    #[serde(default)]
    pub transactions: u64,
}

/// Totals across all period buckets of a cash-flow analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    pub total_net_flow: Decimal,
    pub average_net_flow: Decimal,
    pub total_transactions: u64,
    pub period_count: usize,
}
