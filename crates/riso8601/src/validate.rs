//! Calendar and clock validation of extracted fields.
//!
//! Checks run in a fixed order and stop at the first violation: year, month,
//! day, hour, minute, second, offset hour, offset minute.

use crate::error::{Field, ParseError};
use crate::limits::{MAX_OFFSET_HOURS, MAX_YEAR, MIN_YEAR};
use crate::parse::RawFields;

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in `month` (1-indexed), or 0 for an invalid month.
pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Validates every field, reporting the first one out of range.
pub fn validate(fields: &RawFields) -> Result<(), ParseError> {
    check(Field::Year, fields.year, MIN_YEAR, MAX_YEAR)?;
    check(Field::Month, fields.month, 1, 12)?;
    check(Field::Day, fields.day, 1, days_in_month(fields.year, fields.month))?;
    check(Field::Hour, fields.hour, 0, 23)?;
    check(Field::Minute, fields.minute, 0, 59)?;
    // 60 is rejected: leap seconds are not represented.
    check(Field::Second, fields.second, 0, 59)?;
    if let Some(offset) = fields.offset {
        check(Field::OffsetHour, offset.hours, 0, MAX_OFFSET_HOURS)?;
        check(Field::OffsetMinute, offset.minutes, 0, 59)?;
    }
    Ok(())
}

#[inline]
fn check(field: Field, value: u32, min: u32, max: u32) -> Result<(), ParseError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParseError::invalid(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::RawOffset;

    fn fields(year: u32, month: u32, day: u32) -> RawFields {
        RawFields {
            year,
            month,
            day,
            ..RawFields::default()
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2014));
        assert!(!is_leap_year(1900));
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2014, 2), 28);
        assert_eq!(days_in_month(2014, 13), 0);
    }

    #[test]
    fn test_valid() {
        assert!(validate(&fields(2020, 2, 29)).is_ok());
        assert!(validate(&fields(1, 1, 1)).is_ok());
        assert!(validate(&fields(9999, 12, 31)).is_ok());
    }

    #[test]
    fn test_calendar_errors() {
        assert_eq!(validate(&fields(0, 1, 1)), Err(ParseError::invalid(Field::Year, 0)));
        assert_eq!(validate(&fields(2014, 0, 1)), Err(ParseError::invalid(Field::Month, 0)));
        assert_eq!(validate(&fields(2014, 13, 1)), Err(ParseError::invalid(Field::Month, 13)));
        assert_eq!(validate(&fields(2014, 10, 0)), Err(ParseError::invalid(Field::Day, 0)));
        assert_eq!(validate(&fields(2014, 10, 32)), Err(ParseError::invalid(Field::Day, 32)));
        assert_eq!(validate(&fields(2014, 2, 29)), Err(ParseError::invalid(Field::Day, 29)));
        assert_eq!(validate(&fields(2014, 4, 31)), Err(ParseError::invalid(Field::Day, 31)));
    }

    #[test]
    fn test_first_failure_wins() {
        let raw = RawFields {
            hour: 24,
            minute: 60,
            second: 60,
            ..fields(2014, 10, 32)
        };
        assert_eq!(validate(&raw), Err(ParseError::invalid(Field::Day, 32)));

        let raw = RawFields {
            hour: 24,
            second: 60,
            ..fields(2014, 10, 1)
        };
        assert_eq!(validate(&raw), Err(ParseError::invalid(Field::Hour, 24)));
    }

    #[test]
    fn test_clock_errors() {
        let base = fields(2014, 10, 1);
        assert_eq!(
            validate(&RawFields { minute: 60, ..base }),
            Err(ParseError::invalid(Field::Minute, 60))
        );
        assert_eq!(
            validate(&RawFields { second: 60, ..base }),
            Err(ParseError::invalid(Field::Second, 60))
        );
        assert!(validate(&RawFields { hour: 23, minute: 59, second: 59, ..base }).is_ok());
    }

    #[test]
    fn test_offset_errors() {
        let with_offset = |hours, minutes| RawFields {
            offset: Some(RawOffset {
                negative: true,
                hours,
                minutes,
            }),
            ..fields(2014, 10, 1)
        };
        assert!(validate(&with_offset(23, 59)).is_ok());
        assert_eq!(
            validate(&with_offset(24, 0)),
            Err(ParseError::invalid(Field::OffsetHour, 24))
        );
        assert_eq!(
            validate(&with_offset(5, 60)),
            Err(ParseError::invalid(Field::OffsetMinute, 60))
        );
    }
}
