//! Partitions client wallets into fixed-width performance ranges.
//!
//! Pure and total: structurally valid input never panics, non-finite
//! performance values are silently discarded, and the result is recomputed
//! from scratch on every call (inputs are hundreds of wallets at most).

use log::debug;

use crate::constants::DEFAULT_OVERFLOW_LIMIT;

use super::{PerformanceRange, PerformanceRecord, RangeSize};

/// Red family, lightest nearest zero, darkest at the most negative range.
const NEGATIVE_GRADIENT: [&str; 9] = [
    "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d",
    "#681717",
];

/// Green/teal family, lightest nearest zero, darkest at the most positive range.
const POSITIVE_GRADIENT: [&str; 15] = [
    "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488", "#0f766e", "#115e59",
    "#134e4a", "#0c4a42", "#0a3b35", "#083229", "#06291f", "#042016", "#03170e",
];

/// Builds the performance distribution with the default overflow limit.
pub fn distribute(records: &[PerformanceRecord], range_size: RangeSize) -> Vec<PerformanceRange> {
    distribute_with_limit(records, range_size, DEFAULT_OVERFLOW_LIMIT)
}

/// Builds the performance distribution of `records` over contiguous ranges of
/// width `range_size`.
///
/// Range membership is left-exclusive, right-inclusive: a wallet at exactly
/// 5.0% with a 5-point range falls into `(0, 5]`, not `(5, 10]`. Wallets
/// beyond `±overflow_limit` are collapsed into open-ended underflow/overflow
/// ranges. The zero range `(0, range_size]` is always present, empty if the
/// data never reaches it. Ranges are ordered from most negative to most
/// positive.
pub fn distribute_with_limit(
    records: &[PerformanceRecord],
    range_size: RangeSize,
    overflow_limit: f64,
) -> Vec<PerformanceRange> {
    let step = range_size.step();

    let finite: Vec<&PerformanceRecord> = records
        .iter()
        .filter(|r| r.performance.is_finite())
        .collect();
    if finite.is_empty() {
        return Vec::new();
    }

    let min = finite
        .iter()
        .map(|r| r.performance)
        .fold(f64::INFINITY, f64::min);
    let max = finite
        .iter()
        .map(|r| r.performance)
        .fold(f64::NEG_INFINITY, f64::max);

    // All wallets at the same value: one range holds everything. Also guards
    // the grid construction below against a zero-width span.
    if min == max {
        let start = (min / step).floor() * step;
        let end = start + step;
        let clients: Vec<String> = finite.iter().map(|r| r.user.clone()).collect();
        return vec![PerformanceRange {
            label: range_label(start, end),
            range_start: start,
            range_end: end,
            count: clients.len(),
            clients,
            color: range_color(start, end, step),
        }];
    }

    let mut lo = (min / step).floor() * step;
    let hi = (max / step).ceil() * step;

    // With left-exclusive membership, a minimum sitting exactly on a grid
    // line would fall out of the first range; open the grid one step lower.
    if lo == min {
        lo -= step;
    }

    // Clamp boundary aligned to the grid so zero stays on a range edge.
    let clamp = ((overflow_limit / step).floor() * step).max(step);

    let grid_lo = lo.max(-clamp);
    let grid_hi = hi.min(clamp);

    let mut ranges: Vec<PerformanceRange> = Vec::new();

    if lo < -clamp {
        ranges.push(make_range(f64::NEG_INFINITY, -clamp, &finite, step));
    }

    let mut start = grid_lo;
    while start < grid_hi {
        ranges.push(make_range(start, start + step, &finite, step));
        start += step;
    }

    if hi > clamp {
        ranges.push(make_range(clamp, f64::INFINITY, &finite, step));
    }

    // The dashboard always anchors the chart on the zero range.
    if !ranges.iter().any(|r| r.range_start == 0.0) {
        let position = ranges
            .iter()
            .position(|r| r.range_start > 0.0)
            .unwrap_or(ranges.len());
        ranges.insert(position, make_range(0.0, step, &finite, step));
    }

    debug!(
        "Distributed {} wallets over {} ranges (step {})",
        finite.len(),
        ranges.len(),
        step
    );

    ranges
}

fn make_range(
    start: f64,
    end: f64,
    records: &[&PerformanceRecord],
    step: f64,
) -> PerformanceRange {
    let clients: Vec<String> = records
        .iter()
        .filter(|r| r.performance > start && r.performance <= end)
        .map(|r| r.user.clone())
        .collect();

    PerformanceRange {
        label: range_label(start, end),
        range_start: start,
        range_end: end,
        count: clients.len(),
        clients,
        color: range_color(start, end, step),
    }
}

fn range_label(start: f64, end: f64) -> String {
    if start.is_infinite() {
        return format!("< {}%", fmt_pct(end));
    }
    if end.is_infinite() {
        return format!("> {}%", fmt_pct(start));
    }
    format!("{}% to {}%", fmt_pct(start), fmt_pct(end))
}

// Grid boundaries are integral multiples of the step, so drop the fraction.
fn fmt_pct(value: f64) -> String {
    format!("{}", value as i64)
}

/// Picks the gradient entry for a range, indexed by its distance from zero in
/// units of `step` and clamped to the darkest entry once the gradient is
/// exhausted. Open-ended ranges take the darkest entry of their side.
fn range_color(start: f64, end: f64, step: f64) -> String {
    if end <= 0.0 {
        let index = if start.is_infinite() {
            NEGATIVE_GRADIENT.len() - 1
        } else {
            (((-end) / step).round() as usize).min(NEGATIVE_GRADIENT.len() - 1)
        };
        NEGATIVE_GRADIENT[index].to_string()
    } else {
        let index = if end.is_infinite() {
            POSITIVE_GRADIENT.len() - 1
        } else {
            ((start.max(0.0) / step).round() as usize).min(POSITIVE_GRADIENT.len() - 1)
        };
        POSITIVE_GRADIENT[index].to_string()
    }
}
