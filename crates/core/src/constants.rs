/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Absolute performance (in percent) beyond which wallets are collapsed
/// into the open-ended underflow/overflow ranges of a distribution.
pub const DEFAULT_OVERFLOW_LIMIT: f64 = 100.0;

/// Number of assets surfaced by the volume ranking.
pub const TOP_ASSETS_LIMIT: usize = 5;
