//! riso8601: strict parsing of ISO-8601 combined date-time text.
//!
//! This crate turns text such as `2014-01-09T21:48:30.99999+00:30` into a
//! validated [`ParsedDateTime`], or a [`ParseError`] saying exactly what was
//! wrong with it.
//!
//! # Quick Start
//!
//! ```rust
//! use riso8601::{parse_datetime, ErrorKind, Field};
//!
//! let dt = parse_datetime("2014-01-09T21:48:30.99999+00:30").unwrap();
//! assert_eq!((dt.year(), dt.month(), dt.day()), (2014, 1, 9));
//! assert_eq!(dt.microsecond(), 999_990);
//! assert_eq!(dt.offset_seconds(), Some(1800));
//!
//! // Basic format, no seconds, no offset
//! let dt = parse_datetime("20140109T2148").unwrap();
//! assert!(dt.is_naive());
//! assert_eq!(dt.second(), 0);
//!
//! let err = parse_datetime("2014-13-01T00:00:00").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidValue);
//! assert_eq!(err.field(), Some(Field::Month));
//! ```
//!
//! # Accepted Forms
//!
//! - Date: `YYYY-MM-DD` or `YYYYMMDD`; each `-` is independently optional.
//! - A literal, upper-case `T`.
//! - Time: `hh:mm`, optionally followed by `:ss` and then `.f` with one or
//!   more fraction digits. Each `:` is independently optional.
//! - Offset: nothing (naive), `Z`, `±hh`, `±hh:mm` or `±hhmm`.
//!
//! Fractions longer than six digits are truncated to microseconds unless
//! [`ParseOptions::strict`] is used. Leap seconds (`:60`) are rejected.
//!
//! # Modules
//!
//! - [`scan`]: Index-based scanner
//! - [`parse`]: Structural field extraction
//! - [`validate`]: Calendar and clock range checks
//! - [`datetime`]: The result type
//! - [`error`]: Error types
//! - [`options`]: Parser configuration
//! - [`limits`]: Field widths and bounds
//!
//! # Logging
//!
//! Rejections are emitted as `tracing` events at `debug` level, accepted
//! input at `trace`. The crate never installs a subscriber.

pub mod datetime;
pub mod error;
pub mod limits;
pub mod options;
pub mod parse;
pub mod scan;
pub mod validate;

pub use datetime::ParsedDateTime;
pub use error::{ErrorKind, Field, ParseError};
pub use options::{ExcessFraction, ParseOptions};
pub use validate::{days_in_month, is_leap_year};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses ISO-8601 date-time text with default options.
///
/// No whitespace is trimmed. See the [crate docs](crate) for accepted forms.
pub fn parse_datetime(text: &str) -> Result<ParsedDateTime, ParseError> {
    parse_datetime_with(text, &ParseOptions::default())
}

/// Parses ISO-8601 date-time text with the given options.
pub fn parse_datetime_with(
    text: &str,
    options: &ParseOptions,
) -> Result<ParsedDateTime, ParseError> {
    let result = parse::extract(text, options).and_then(|fields| {
        validate::validate(&fields)?;
        Ok(ParsedDateTime::assemble(&fields))
    });
    match &result {
        Ok(dt) => tracing::trace!(input = text, parsed = %dt, "parsed date-time"),
        Err(err) => tracing::debug!(input = text, kind = %err.kind(), error = %err, "rejected date-time"),
    }
    result
}
