use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Performance of a single client wallet, as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub user: String,
    pub manager: String,
    pub benchmark: String,
    pub invested_amount: Decimal,
    pub current_amount: Decimal,
    /// Percentage return of the wallet. May arrive non-finite from upstream
    /// division; the distribution discards such entries.
    pub performance: f64,
}

/// Width of a distribution range, in percentage points.
///
/// The dashboard only offers these four widths, so anything else is rejected
/// at the edge rather than silently producing odd grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[derive(Default)]
pub enum RangeSize {
    #[default]
    Five,
    Ten,
    Fifteen,
    Twenty,
}

impl RangeSize {
    /// Range width as a float, for grid arithmetic.
    pub fn step(&self) -> f64 {
        match self {
            RangeSize::Five => 5.0,
            RangeSize::Ten => 10.0,
            RangeSize::Fifteen => 15.0,
            RangeSize::Twenty => 20.0,
        }
    }
}

impl TryFrom<u8> for RangeSize {
    type Error = ValidationError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            5 => Ok(RangeSize::Five),
            10 => Ok(RangeSize::Ten),
            15 => Ok(RangeSize::Fifteen),
            20 => Ok(RangeSize::Twenty),
            other => Err(ValidationError::UnsupportedRangeSize(other)),
        }
    }
}

impl From<RangeSize> for u8 {
    fn from(value: RangeSize) -> Self {
        value.step() as u8
    }
}

/// One range of the performance distribution, with the clients that fall
/// inside it. Derived data, recomputed on every call; carries no identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRange {
    pub label: String,
    /// Exclusive lower bound. `-inf` for the underflow range.
    pub range_start: f64,
    /// Inclusive upper bound. `+inf` for the overflow range.
    pub range_end: f64,
    pub count: usize,
    pub clients: Vec<String>,
    pub color: String,
}
