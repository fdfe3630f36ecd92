//! Unit tests for volume totals and the top-asset ranking.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn record(name: &str, symbol: &str, brl: Decimal) -> VolumeRecord {
    VolumeRecord {
        asset_name: name.to_string(),
        asset_symbol: symbol.to_string(),
        total_volume: dec!(1),
        buy_volume: dec!(0.6),
        sell_volume: dec!(0.4),
        total_volume_value_usd: Some(brl / dec!(5)),
        total_volume_value_brl: Some(brl),
        buy_volume_value_usd: Some(Decimal::ZERO),
        buy_volume_value_brl: Some(Decimal::ZERO),
        sell_volume_value_usd: Some(Decimal::ZERO),
        sell_volume_value_brl: Some(Decimal::ZERO),
        transactions: 2,
    }
}

#[test]
fn empty_input_yields_zero_summary_and_empty_ranking() {
    let analysis = analyze_volume(&[]);
    assert_eq!(analysis.summary, VolumeSummary::default());
    assert!(analysis.top_assets.is_empty());
}

#[test]
fn missing_value_fields_count_as_zero() {
    let mut bare = record("Bitcoin", "BTC", dec!(100));
    bare.buy_volume_value_usd = None;
    bare.sell_volume_value_brl = None;

    let summary = summarize_volume(&[bare.clone()]);
    assert_eq!(summary.buy_volume_value_usd, Decimal::ZERO);
    assert_eq!(summary.sell_volume_value_brl, Decimal::ZERO);
    assert_eq!(summary.total_volume_value_brl, dec!(100));

    let ranking = rank_assets(&[bare]);
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].percentage, dec!(100));
}

#[test]
fn summary_accumulates_ungrouped_records() {
    let records = vec![
        record("Bitcoin", "BTC", dec!(100)),
        record("Bitcoin", "BTC", dec!(50)),
        record("Ethereum", "ETH", dec!(30)),
    ];

    let summary = summarize_volume(&records);
    assert_eq!(summary.total_volume, dec!(3));
    assert_eq!(summary.total_buy_volume, dec!(1.8));
    assert_eq!(summary.total_sell_volume, dec!(1.2));
    assert_eq!(summary.total_volume_value_brl, dec!(180));
    assert_eq!(summary.total_volume_value_usd, dec!(36));
    assert_eq!(summary.total_transactions, 6);
}

#[test]
fn grouping_merges_periods_of_the_same_asset() {
    let records = vec![
        record("Bitcoin", "BTC", dec!(100)),
        record("Bitcoin", "BTC", dec!(50)),
        record("Ethereum", "ETH", dec!(30)),
    ];

    let mut groups = group_by_asset(&records);
    groups.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Bitcoin");
    assert_eq!(groups[0].total_volume_value_brl, dec!(150));
    assert_eq!(groups[0].total_volume, dec!(2));
    assert_eq!(groups[1].name, "Ethereum");
    assert_eq!(groups[1].total_volume_value_brl, dec!(30));
}

#[test]
fn ranking_keeps_the_five_largest_descending() {
    let records = vec![
        record("Bitcoin", "BTC", dec!(600)),
        record("Ethereum", "ETH", dec!(500)),
        record("Solana", "SOL", dec!(400)),
        record("Cardano", "ADA", dec!(300)),
        record("Polkadot", "DOT", dec!(200)),
        record("Monero", "XMR", dec!(100)),
    ];

    let ranking = rank_assets(&records);
    assert_eq!(ranking.len(), 5);

    let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Bitcoin", "Ethereum", "Solana", "Cardano", "Polkadot"]
    );

    for pair in ranking.windows(2) {
        assert!(pair[0].total_volume_value_brl >= pair[1].total_volume_value_brl);
    }

    // Shares are computed against the full set, Monero included, so the top
    // five sum to strictly less than 100 here.
    let share_sum: Decimal = ranking.iter().map(|r| r.percentage).sum();
    assert!(share_sum < dec!(100));
    assert_eq!(ranking[0].percentage, dec!(28.57));
}

#[test]
fn zero_grand_total_yields_zero_percentages() {
    let mut worthless = record("Dust", "DST", Decimal::ZERO);
    worthless.total_volume_value_brl = None;

    let ranking = rank_assets(&[worthless]);
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].percentage, Decimal::ZERO);
}
