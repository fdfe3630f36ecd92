//! Service assembling the dashboard analytics from the upstream slices.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;

use super::cash_flow::{summarize_cash_flow, CashFlowSummary};
use super::distribution::{distribute, PerformanceRange, RangeSize};
use super::volume::{analyze_volume, VolumeAnalysis};
use super::{AnalysisQuery, AnalyticsDataSourceTrait, DashboardOverview};

/// Trait for the analytics service.
#[async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Performance distribution of all client wallets.
    async fn get_performance_distribution(
        &self,
        range_size: RangeSize,
    ) -> Result<Vec<PerformanceRange>>;

    /// Cash-flow totals for the given date range.
    async fn get_cash_flow_summary(&self, query: &AnalysisQuery) -> Result<CashFlowSummary>;

    /// Volume totals and top-asset ranking for the given date range.
    async fn get_volume_analysis(&self, query: &AnalysisQuery) -> Result<VolumeAnalysis>;

    /// All three slices for the dashboard landing page, fetched concurrently.
    async fn get_dashboard_overview(
        &self,
        range_size: RangeSize,
        query: &AnalysisQuery,
    ) -> Result<DashboardOverview>;
}

/// Derives the dashboard analytics from an upstream data source. Holds no
/// mutable state and caches nothing; every call recomputes from fresh data.
pub struct AnalyticsService {
    source: Arc<dyn AnalyticsDataSourceTrait>,
}

impl AnalyticsService {
    pub fn new(source: Arc<dyn AnalyticsDataSourceTrait>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    async fn get_performance_distribution(
        &self,
        range_size: RangeSize,
    ) -> Result<Vec<PerformanceRange>> {
        let wallets = self.source.get_performance_wallets().await?;
        debug!("Distributing {} wallets", wallets.len());
        Ok(distribute(&wallets, range_size))
    }

    async fn get_cash_flow_summary(&self, query: &AnalysisQuery) -> Result<CashFlowSummary> {
        let records = self.source.get_cash_flow_analysis(query).await?;
        Ok(summarize_cash_flow(&records))
    }

    async fn get_volume_analysis(&self, query: &AnalysisQuery) -> Result<VolumeAnalysis> {
        let records = self.source.get_crypto_volume_analysis(query).await?;
        Ok(analyze_volume(&records))
    }

    async fn get_dashboard_overview(
        &self,
        range_size: RangeSize,
        query: &AnalysisQuery,
    ) -> Result<DashboardOverview> {
        // The slices are independent; the first failed fetch surfaces as the
        // error and the others are dropped.
        let (wallets, cash_flow, volume) = futures::try_join!(
            self.source.get_performance_wallets(),
            self.source.get_cash_flow_analysis(query),
            self.source.get_crypto_volume_analysis(query),
        )?;

        Ok(DashboardOverview {
            distribution: distribute(&wallets, range_size),
            cash_flow: summarize_cash_flow(&cash_flow),
            volume: analyze_volume(&volume),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::{CashFlowRecord, PerformanceRecord, VolumeRecord};

    use super::*;

    // --- Mock data source ---
    struct MockDataSource {
        wallets: Vec<PerformanceRecord>,
        cash_flow: Vec<CashFlowRecord>,
        volume: Vec<VolumeRecord>,
        fail_cash_flow: bool,
    }

    impl MockDataSource {
        fn new() -> Self {
            Self {
                wallets: vec![
                    PerformanceRecord {
                        user: "alice".to_string(),
                        manager: "m1".to_string(),
                        benchmark: "BTC".to_string(),
                        invested_amount: dec!(1000),
                        current_amount: dec!(1120),
                        performance: 12.0,
                    },
                    PerformanceRecord {
                        user: "bob".to_string(),
                        manager: "m1".to_string(),
                        benchmark: "BTC".to_string(),
                        invested_amount: dec!(2000),
                        current_amount: dec!(1900),
                        performance: -5.0,
                    },
                ],
                cash_flow: vec![CashFlowRecord {
                    period: "2026-07".to_string(),
                    deposits: dec!(500),
                    withdrawals: dec!(200),
                    net_flow: dec!(300),
                    transactions: 3,
                }],
                volume: vec![VolumeRecord {
                    asset_name: "Bitcoin".to_string(),
                    asset_symbol: "BTC".to_string(),
                    total_volume: dec!(2),
                    buy_volume: dec!(2),
                    sell_volume: dec!(0),
                    total_volume_value_usd: Some(dec!(100)),
                    total_volume_value_brl: Some(dec!(500)),
                    buy_volume_value_usd: Some(dec!(100)),
                    buy_volume_value_brl: Some(dec!(500)),
                    sell_volume_value_usd: None,
                    sell_volume_value_brl: None,
                    transactions: 4,
                }],
                fail_cash_flow: false,
            }
        }
    }

    #[async_trait]
    impl AnalyticsDataSourceTrait for MockDataSource {
        async fn get_performance_wallets(&self) -> Result<Vec<PerformanceRecord>> {
            Ok(self.wallets.clone())
        }

        async fn get_cash_flow_analysis(
            &self,
            _query: &AnalysisQuery,
        ) -> Result<Vec<CashFlowRecord>> {
            if self.fail_cash_flow {
                return Err(Error::Api("upstream unavailable".to_string()));
            }
            Ok(self.cash_flow.clone())
        }

        async fn get_crypto_volume_analysis(
            &self,
            _query: &AnalysisQuery,
        ) -> Result<Vec<VolumeRecord>> {
            Ok(self.volume.clone())
        }
    }

    #[tokio::test]
    async fn distribution_is_derived_from_fetched_wallets() {
        let service = AnalyticsService::new(Arc::new(MockDataSource::new()));

        let ranges = service
            .get_performance_distribution(RangeSize::Five)
            .await
            .unwrap();

        let total: usize = ranges.iter().map(|r| r.count).sum();
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn overview_assembles_all_three_slices() {
        let service = AnalyticsService::new(Arc::new(MockDataSource::new()));

        let overview = service
            .get_dashboard_overview(RangeSize::Ten, &AnalysisQuery::default())
            .await
            .unwrap();

        assert!(!overview.distribution.is_empty());
        assert_eq!(overview.cash_flow.total_net_flow, dec!(300));
        assert_eq!(overview.volume.top_assets.len(), 1);
        assert_eq!(overview.volume.summary.total_transactions, 4);
    }

    #[tokio::test]
    async fn overview_surfaces_the_first_failed_fetch() {
        let mut source = MockDataSource::new();
        source.fail_cash_flow = true;
        let service = AnalyticsService::new(Arc::new(source));

        let result = service
            .get_dashboard_overview(RangeSize::Ten, &AnalysisQuery::default())
            .await;

        assert!(matches!(result, Err(Error::Api(_))));
    }

    #[tokio::test]
    async fn failed_slice_does_not_affect_the_others() {
        let mut source = MockDataSource::new();
        source.fail_cash_flow = true;
        let service = AnalyticsService::new(Arc::new(source));

        let analysis = service
            .get_volume_analysis(&AnalysisQuery::default())
            .await
            .unwrap();
        assert_eq!(analysis.summary.total_volume, dec!(2));
    }
}
