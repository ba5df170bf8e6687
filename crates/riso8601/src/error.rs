//! Error types for date-time parsing.

use std::fmt;

use thiserror::Error;

/// The two classes of parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not match the date-time grammar: wrong digit counts,
    /// missing `T`, a dangling `.`, trailing characters, early end of input.
    Malformed,
    /// The input is well formed but a field is outside its calendar or
    /// clock range.
    InvalidValue,
}

impl ErrorKind {
    /// Returns a short lowercase name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Malformed => "malformed",
            ErrorKind::InvalidValue => "invalid value",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date-time field that can carry an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Calendar year, 1 through 9999.
    Year,
    /// Month of the year, 1 through 12.
    Month,
    /// Day of the month, bounded by the month length.
    Day,
    /// Hour of the day, 0 through 23.
    Hour,
    /// Minute of the hour, 0 through 59.
    Minute,
    /// Second of the minute, 0 through 59.
    Second,
    /// Hours of the UTC offset, 0 through 23.
    OffsetHour,
    /// Minutes of the UTC offset, 0 through 59.
    OffsetMinute,
}

impl Field {
    /// Returns the field name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::OffsetHour => "offset hour",
            Field::OffsetMinute => "offset minute",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text cannot be parsed into a [`ParsedDateTime`].
///
/// Positions are byte offsets into the original input.
///
/// [`ParsedDateTime`]: crate::ParsedDateTime
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    // === Malformed ===
    #[error("unexpected end of input at byte {position}: expected {expected}")]
    UnexpectedEnd {
        position: usize,
        expected: &'static str,
    },

    #[error("unexpected character {found:?} at byte {position}: expected {expected}")]
    UnexpectedChar {
        position: usize,
        found: char,
        expected: &'static str,
    },

    #[error("fractional seconds marker at byte {position} is not followed by a digit")]
    EmptyFraction { position: usize },

    #[error("fractional seconds at byte {position} have {digits} digits (maximum 6)")]
    FractionTooLong { position: usize, digits: usize },

    #[error("unexpected trailing input at byte {position}: {rest:?}")]
    TrailingInput { position: usize, rest: String },

    // === InvalidValue ===
    #[error("{field} value {value} is out of range")]
    InvalidValue { field: Field, value: u32 },
}

impl ParseError {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidValue { .. } => ErrorKind::InvalidValue,
            _ => ErrorKind::Malformed,
        }
    }

    /// Returns the offending field for value errors.
    pub fn field(&self) -> Option<Field> {
        match self {
            ParseError::InvalidValue { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Returns the byte offset at which a structural error was detected.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEnd { position, .. }
            | ParseError::UnexpectedChar { position, .. }
            | ParseError::EmptyFraction { position }
            | ParseError::FractionTooLong { position, .. }
            | ParseError::TrailingInput { position, .. } => Some(*position),
            ParseError::InvalidValue { .. } => None,
        }
    }

    pub(crate) fn invalid(field: Field, value: u32) -> Self {
        ParseError::InvalidValue { field, value }
    }
}
