//! Cash-flow totals across period buckets.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

use super::{CashFlowRecord, CashFlowSummary};

/// Sums deposits, withdrawals, net flow and transaction counts across all
/// period buckets. The average net flow is zero for an empty slice.
pub fn summarize_cash_flow(records: &[CashFlowRecord]) -> CashFlowSummary {
    let mut summary = CashFlowSummary {
        period_count: records.len(),
        ..Default::default()
    };

    for record in records {
        summary.total_deposits += record.deposits;
        summary.total_withdrawals += record.withdrawals;
        summary.total_net_flow += record.net_flow;
        summary.total_transactions += record.transactions;
    }

    if summary.period_count > 0 {
        summary.average_net_flow =
            summary.total_net_flow / Decimal::from(summary.period_count as u64);
    }

    summary.total_deposits = summary.total_deposits.round_dp(DISPLAY_DECIMAL_PRECISION);
    summary.total_withdrawals = summary
        .total_withdrawals
        .round_dp(DISPLAY_DECIMAL_PRECISION);
    summary.total_net_flow = summary.total_net_flow.round_dp(DISPLAY_DECIMAL_PRECISION);
    summary.average_net_flow = summary.average_net_flow.round_dp(DISPLAY_DECIMAL_PRECISION);

    summary
}
