/// Decimal precision for display-boundary rounding
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Months per year, used when annualizing monthly figures
pub const MONTHS_PER_YEAR: u32 = 12;

/// Default interval between auto-save passes, in seconds
pub const AUTO_SAVE_INTERVAL_SECS: u64 = 30;

/// Source tag stamped on records written by this engine
pub const DEFAULT_RECORD_SOURCE: &str = "app";

/// Prefix shared by all user-defined field keys
pub const CUSTOM_FIELD_PREFIX: &str = "custom_";
