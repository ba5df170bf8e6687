//! Parser configuration.

/// What to do with fractional-second digits beyond microsecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExcessFraction {
    /// Drop digits past the sixth. `.1234567` reads as 123456 microseconds.
    #[default]
    Truncate,
    /// Fail with [`ParseError::FractionTooLong`].
    ///
    /// [`ParseError::FractionTooLong`]: crate::ParseError::FractionTooLong
    Reject,
}

/// Options for [`parse_datetime_with`].
///
/// [`parse_datetime_with`]: crate::parse_datetime_with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Handling of fractional seconds longer than six digits.
    pub excess_fraction: ExcessFraction,
}

impl ParseOptions {
    /// Creates default options (excess fraction digits are truncated).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject more than six fractional digits.
    pub fn strict() -> Self {
        Self {
            excess_fraction: ExcessFraction::Reject,
        }
    }
}
