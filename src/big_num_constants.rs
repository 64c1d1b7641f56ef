/// Decimal digits held by one list digit.
pub const POWER: u32 = 9;

/// Radix of a list digit, `10^POWER`.
pub const BASE: i64 = 10_i64.pow(POWER);

/// Values in `0..=MAX_CONSTANT` (and their negations) are served from the cache.
pub const MAX_CONSTANT: usize = 16;
