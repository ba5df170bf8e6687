//! Field widths and value bounds.

/// Digits in the year field.
pub const YEAR_DIGITS: usize = 4;

/// Digits in every other fixed-width field (month, day, hour, minute,
/// second, offset hour, offset minute).
pub const FIELD_DIGITS: usize = 2;

/// Maximum number of fractional-second digits that carry precision.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Smallest accepted year.
pub const MIN_YEAR: u32 = 1;

/// Largest accepted year.
pub const MAX_YEAR: u32 = 9999;

/// Largest accepted offset hour. An offset of 24 hours is excluded.
pub const MAX_OFFSET_HOURS: u32 = 23;

pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
