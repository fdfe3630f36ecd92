//! Volume totals and the top-asset ranking.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, TOP_ASSETS_LIMIT};

use super::{AssetVolumeRanking, AssetVolumeSummary, VolumeAnalysis, VolumeRecord, VolumeSummary};

/// Flat additive totals over the ungrouped records. Missing value fields
/// count as zero.
pub fn summarize_volume(records: &[VolumeRecord]) -> VolumeSummary {
    let mut summary = VolumeSummary::default();

    for record in records {
        summary.total_volume += record.total_volume;
        summary.total_buy_volume += record.buy_volume;
        summary.total_sell_volume += record.sell_volume;
        summary.total_volume_value_usd += record.total_volume_value_usd.unwrap_or_default();
        summary.total_volume_value_brl += record.total_volume_value_brl.unwrap_or_default();
        summary.buy_volume_value_usd += record.buy_volume_value_usd.unwrap_or_default();
        summary.buy_volume_value_brl += record.buy_volume_value_brl.unwrap_or_default();
        summary.sell_volume_value_usd += record.sell_volume_value_usd.unwrap_or_default();
        summary.sell_volume_value_brl += record.sell_volume_value_brl.unwrap_or_default();
        summary.total_transactions += record.transactions;
    }

    summary
}

/// Groups records by asset name, additively accumulating every numeric field.
pub fn group_by_asset(records: &[VolumeRecord]) -> Vec<AssetVolumeSummary> {
    let mut by_asset: HashMap<String, AssetVolumeSummary> = HashMap::new();

    for record in records {
        let entry = by_asset
            .entry(record.asset_name.clone())
            .or_insert_with(|| AssetVolumeSummary {
                name: record.asset_name.clone(),
                symbol: record.asset_symbol.clone(),
                ..Default::default()
            });

        entry.total_volume += record.total_volume;
        entry.buy_volume += record.buy_volume;
        entry.sell_volume += record.sell_volume;
        entry.total_volume_value_usd += record.total_volume_value_usd.unwrap_or_default();
        entry.total_volume_value_brl += record.total_volume_value_brl.unwrap_or_default();
        entry.buy_volume_value_usd += record.buy_volume_value_usd.unwrap_or_default();
        entry.buy_volume_value_brl += record.buy_volume_value_brl.unwrap_or_default();
        entry.sell_volume_value_usd += record.sell_volume_value_usd.unwrap_or_default();
        entry.sell_volume_value_brl += record.sell_volume_value_brl.unwrap_or_default();
    }

    by_asset.into_values().collect()
}

/// Ranks assets descending by BRL traded value and keeps the top five.
///
/// Each entry's `percentage` is computed against the BRL total of the whole
/// asset set, so the returned shares sum to at most 100.
pub fn rank_assets(records: &[VolumeRecord]) -> Vec<AssetVolumeRanking> {
    let mut assets = group_by_asset(records);

    let grand_total_brl: Decimal = assets.iter().map(|a| a.total_volume_value_brl).sum();

    // Name as tie-breaker keeps the ranking deterministic.
    assets.sort_by(|a, b| {
        b.total_volume_value_brl
            .cmp(&a.total_volume_value_brl)
            .then_with(|| a.name.cmp(&b.name))
    });
    assets.truncate(TOP_ASSETS_LIMIT);

    assets
        .into_iter()
        .map(|asset| {
            let percentage = if grand_total_brl > Decimal::ZERO {
                (asset.total_volume_value_brl / grand_total_brl * dec!(100))
                    .round_dp(DISPLAY_DECIMAL_PRECISION)
            } else {
                Decimal::ZERO
            };

            AssetVolumeRanking {
                name: asset.name,
                symbol: asset.symbol,
                total_volume: asset.total_volume,
                total_volume_value_usd: asset.total_volume_value_usd,
                total_volume_value_brl: asset.total_volume_value_brl,
                buy_volume: asset.buy_volume,
                sell_volume: asset.sell_volume,
                percentage,
            }
        })
        .collect()
}

/// Bundles the flat summary and the top-asset ranking.
pub fn analyze_volume(records: &[VolumeRecord]) -> VolumeAnalysis {
    VolumeAnalysis {
        summary: summarize_volume(records),
        top_assets: rank_assets(records),
    }
}
