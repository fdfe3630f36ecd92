use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Traded volume of one asset over one period, as reported by the backend.
///
/// The value fields are optional on the wire; a missing value means the
/// backend had no price reference for that leg and is treated as zero.
/// The currency suffixes are uppercase on the wire (`totalVolumeValueUSD`),
/// hence the explicit renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRecord {
    pub asset_name: String,
    pub asset_symbol: String,
    #[serde(default)]
    pub total_volume: Decimal,
    #[serde(default)]
    pub buy_volume: Decimal,
    #[serde(default)]
    pub sell_volume: Decimal,
    #[serde(rename = "totalVolumeValueUSD")]
    pub total_volume_value_usd: Option<Decimal>,
    #[serde(rename = "totalVolumeValueBRL")]
    pub total_volume_value_brl: Option<Decimal>,
    #[serde(rename = "buyVolumeValueUSD")]
    pub buy_volume_value_usd: Option<Decimal>,
    #[serde(rename = "buyVolumeValueBRL")]
    pub buy_volume_value_brl: Option<Decimal>,
    #[serde(rename = "sellVolumeValueUSD")]
    pub sell_volume_value_usd: Option<Decimal>,
    #[serde(rename = "sellVolumeValueBRL")]
    pub sell_volume_value_brl: Option<Decimal>,
    #[serde(default)]
    pub transactions: u64,
}

/// Per-asset accumulation of volume records, grouped by asset name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetVolumeSummary {
    pub name: String,
    pub symbol: String,
    pub total_volume: Decimal,
    pub buy_volume: Decimal,
    pub sell_volume: Decimal,
    #[serde(rename = "totalVolumeValueUSD")]
    pub total_volume_value_usd: Decimal,
    #[serde(rename = "totalVolumeValueBRL")]
    pub total_volume_value_brl: Decimal,
    #[serde(rename = "buyVolumeValueUSD")]
    pub buy_volume_value_usd: Decimal,
    #[serde(rename = "buyVolumeValueBRL")]
    pub buy_volume_value_brl: Decimal,
    #[serde(rename = "sellVolumeValueUSD")]
    pub sell_volume_value_usd: Decimal,
    #[serde(rename = "sellVolumeValueBRL")]
    pub sell_volume_value_brl: Decimal,
}

/// One entry of the top-asset ranking. `percentage` is this asset's share of
/// the BRL traded value across the whole asset set, not just the top entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetVolumeRanking {
    pub name: String,
    pub symbol: String,
    pub total_volume: Decimal,
    #[serde(rename = "totalVolumeValueUSD")]
    pub total_volume_value_usd: Decimal,
    #[serde(rename = "totalVolumeValueBRL")]
    pub total_volume_value_brl: Decimal,
    pub buy_volume: Decimal,
    pub sell_volume: Decimal,
    pub percentage: Decimal,
}

/// Flat totals across all (ungrouped) volume records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSummary {
    pub total_volume: Decimal,
    pub total_buy_volume: Decimal,
    pub total_sell_volume: Decimal,
    #[serde(rename = "totalVolumeValueUSD")]
    pub total_volume_value_usd: Decimal,
    #[serde(rename = "totalVolumeValueBRL")]
    pub total_volume_value_brl: Decimal,
    #[serde(rename = "buyVolumeValueUSD")]
    pub buy_volume_value_usd: Decimal,
    #[serde(rename = "buyVolumeValueBRL")]
    pub buy_volume_value_brl: Decimal,
    #[serde(rename = "sellVolumeValueUSD")]
    pub sell_volume_value_usd: Decimal,
    #[serde(rename = "sellVolumeValueBRL")]
    pub sell_volume_value_brl: Decimal,
    pub total_transactions: u64,
}

/// The combined product the dashboard charts consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAnalysis {
    pub summary: VolumeSummary,
    pub top_assets: Vec<AssetVolumeRanking>,
}
