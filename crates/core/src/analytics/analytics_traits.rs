use async_trait::async_trait;

use crate::errors::Result;

use super::{AnalysisQuery, CashFlowRecord, PerformanceRecord, VolumeRecord};

/// Upstream source of the raw analysis slices, implemented by the connect
/// crate against the wallet backend REST API.
///
/// Each fetch produces an independent slice; implementations must be safe to
/// call concurrently.
#[async_trait]
pub trait AnalyticsDataSourceTrait: Send + Sync {
    /// Performance of every client wallet visible to the manager.
    async fn get_performance_wallets(&self) -> Result<Vec<PerformanceRecord>>;

    /// Cash-flow period buckets for the given date range.
    async fn get_cash_flow_analysis(&self, query: &AnalysisQuery) -> Result<Vec<CashFlowRecord>>;

    /// Per-asset, per-period traded volume for the given date range.
    async fn get_crypto_volume_analysis(&self, query: &AnalysisQuery)
        -> Result<Vec<VolumeRecord>>;
}
