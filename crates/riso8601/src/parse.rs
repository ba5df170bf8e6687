//! Field extraction.
//!
//! Grammar accepted (each `[x]` is independently optional):
//!
//! ```text
//! datetime = date "T" time [offset]
//! date     = YYYY ["-"] MM ["-"] DD
//! time     = hh [":"] mm [[":"] ss ["." 1*DIGIT]]
//! offset   = "Z" | ("+" | "-") hh [[":"] mm]
//! ```
//!
//! Extraction is purely structural. Field values are range checked later by
//! [`crate::validate`].

use crate::error::ParseError;
use crate::limits::{FIELD_DIGITS, MAX_FRACTION_DIGITS, YEAR_DIGITS};
use crate::options::{ExcessFraction, ParseOptions};
use crate::scan::Scanner;

/// Unvalidated fields pulled out of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawFields {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
    pub offset: Option<RawOffset>,
}

/// An offset designator as written: `Z` is all zeros with `negative: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawOffset {
    pub negative: bool,
    pub hours: u32,
    pub minutes: u32,
}

/// Extracts every field of `input`, failing on the first structural error.
pub fn extract(input: &str, options: &ParseOptions) -> Result<RawFields, ParseError> {
    let mut scanner = Scanner::new(input);
    let mut fields = RawFields::default();

    parse_date(&mut scanner, &mut fields)?;
    scanner.expect(b'T', "'T' between date and time")?;
    parse_time(&mut scanner, &mut fields, options)?;
    fields.offset = parse_offset(&mut scanner)?;

    Ok(fields)
}

fn parse_date(s: &mut Scanner<'_>, fields: &mut RawFields) -> Result<(), ParseError> {
    fields.year = s.digits(YEAR_DIGITS, "4-digit year")?;
    s.eat(b'-');
    fields.month = s.digits(FIELD_DIGITS, "2-digit month")?;
    s.eat(b'-');
    fields.day = s.digits(FIELD_DIGITS, "2-digit day")?;
    Ok(())
}

fn parse_time(
    s: &mut Scanner<'_>,
    fields: &mut RawFields,
    options: &ParseOptions,
) -> Result<(), ParseError> {
    fields.hour = s.digits(FIELD_DIGITS, "2-digit hour")?;
    s.eat(b':');
    fields.minute = s.digits(FIELD_DIGITS, "2-digit minute")?;

    // Seconds are present if either a ':' or a digit follows the minute.
    if s.eat(b':') || s.peek_digit() {
        fields.second = s.digits(FIELD_DIGITS, "2-digit second")?;
    } else {
        return Ok(());
    }

    let marker = s.position();
    if s.eat(b'.') {
        fields.microsecond = parse_fraction(s, marker, options)?;
    }
    Ok(())
}

/// Reads the digits after a `.` and scales them to microseconds.
fn parse_fraction(
    s: &mut Scanner<'_>,
    marker: usize,
    options: &ParseOptions,
) -> Result<u32, ParseError> {
    let (value, digits) = s.digit_run(MAX_FRACTION_DIGITS);
    if digits == 0 {
        return Err(ParseError::EmptyFraction { position: marker });
    }
    if digits > MAX_FRACTION_DIGITS && options.excess_fraction == ExcessFraction::Reject {
        return Err(ParseError::FractionTooLong {
            position: marker,
            digits,
        });
    }
    let significant = digits.min(MAX_FRACTION_DIGITS);
    Ok(value * 10u32.pow((MAX_FRACTION_DIGITS - significant) as u32))
}

fn parse_offset(s: &mut Scanner<'_>) -> Result<Option<RawOffset>, ParseError> {
    let negative = match s.peek() {
        None => return Ok(None),
        Some(b'Z') => {
            s.eat(b'Z');
            expect_end(s)?;
            return Ok(Some(RawOffset::default()));
        }
        Some(b'+') => false,
        Some(b'-') => true,
        Some(_) => return Err(trailing(s)),
    };
    s.eat(if negative { b'-' } else { b'+' });

    let hours = s.digits(FIELD_DIGITS, "2-digit offset hour")?;
    let minutes = if s.eat(b':') || s.peek_digit() {
        s.digits(FIELD_DIGITS, "2-digit offset minute")?
    } else {
        0
    };
    expect_end(s)?;

    Ok(Some(RawOffset {
        negative,
        hours,
        minutes,
    }))
}

fn expect_end(s: &Scanner<'_>) -> Result<(), ParseError> {
    if s.is_empty() { Ok(()) } else { Err(trailing(s)) }
}

fn trailing(s: &Scanner<'_>) -> ParseError {
    ParseError::TrailingInput {
        position: s.position(),
        rest: s.remaining().to_string(),
    }
}
