//! The parsed date-time value.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::limits::{
    MAX_FRACTION_DIGITS, MICROS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::parse::RawFields;

/// A validated calendar date and time of day with an optional UTC offset.
///
/// Values are only produced by [`parse_datetime`](crate::parse_datetime) and
/// friends, so every accessor returns an in-range value. A value with no
/// offset is *naive*; an offset of zero is a definite UTC offset and is not
/// the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedDateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
    offset: Option<i32>,
}

impl ParsedDateTime {
    /// Builds the value from fields that have already passed validation.
    pub(crate) fn assemble(fields: &RawFields) -> Self {
        let offset = fields.offset.map(|o| {
            let magnitude = o.hours as i64 * SECONDS_PER_HOUR + o.minutes as i64 * SECONDS_PER_MINUTE;
            let sign = if o.negative { -1 } else { 1 };
            (sign * magnitude) as i32
        });
        Self {
            year: fields.year as u16,
            month: fields.month as u8,
            day: fields.day as u8,
            hour: fields.hour as u8,
            minute: fields.minute as u8,
            second: fields.second as u8,
            microsecond: fields.microsecond,
            offset,
        }
    }

    /// Year, 1 through 9999.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month, 1 through 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, 1 through the length of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour, 0 through 23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0 through 59.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second, 0 through 59. Leap seconds are never produced.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Fractional seconds in whole microseconds, 0 through 999999.
    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// UTC offset in seconds, or `None` for a naive value.
    pub fn offset_seconds(&self) -> Option<i32> {
        self.offset
    }

    /// Returns true if the value carries no UTC offset.
    pub fn is_naive(&self) -> bool {
        self.offset.is_none()
    }

    /// Days from 1970-01-01 to this date in the proleptic Gregorian calendar.
    pub fn days_since_epoch(&self) -> i64 {
        date_to_days(self.year as i64, self.month as i64, self.day as i64)
    }

    /// Microseconds since the Unix epoch, reading the wall-clock fields as if
    /// they were UTC and ignoring any offset.
    pub fn local_epoch_micros(&self) -> i64 {
        let seconds = self.days_since_epoch() * SECONDS_PER_DAY
            + self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64;
        seconds * MICROS_PER_SECOND + self.microsecond as i64
    }

    /// Microseconds since the Unix epoch of the instant this value denotes.
    ///
    /// Returns `None` for naive values, which do not identify an instant.
    pub fn epoch_micros(&self) -> Option<i64> {
        // local time = UTC + offset
        self.offset
            .map(|offset| self.local_epoch_micros() - offset as i64 * MICROS_PER_SECOND)
    }
}

/// Howard Hinnant's `days_from_civil`.
fn date_to_days(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let m = if month <= 2 { month + 9 } else { month - 3 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doy = (153 * m + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Strips trailing zeros from a non-zero microsecond count, returning the
/// remaining digits and how many fraction places they occupy.
fn trim_fraction(microsecond: u32) -> (u32, usize) {
    let (mut digits, mut width) = (microsecond, MAX_FRACTION_DIGITS);
    while width > 1 && digits % 10 == 0 {
        digits /= 10;
        width -= 1;
    }
    (digits, width)
}

impl fmt::Display for ParsedDateTime {
    /// Writes the extended form, e.g. `2014-01-09T21:48:30.99999+00:30`.
    ///
    /// A zero fraction is omitted and a zero offset is written as `Z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.microsecond != 0 {
            let (digits, width) = trim_fraction(self.microsecond);
            write!(f, ".{:0width$}", digits, width = width)?;
        }
        match self.offset {
            None => Ok(()),
            Some(0) => f.write_str("Z"),
            Some(offset) => {
                let sign = if offset < 0 { '-' } else { '+' };
                let minutes = offset.unsigned_abs() / 60;
                write!(f, "{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
            }
        }
    }
}

impl FromStr for ParsedDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_datetime(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::ParsedDateTime;

    impl Serialize for ParsedDateTime {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for ParsedDateTime {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct DateTimeVisitor;

            impl Visitor<'_> for DateTimeVisitor {
                type Value = ParsedDateTime;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str("an ISO-8601 date-time string")
                }

                fn visit_str<E: de::Error>(self, value: &str) -> Result<ParsedDateTime, E> {
                    crate::parse_datetime(value).map_err(E::custom)
                }
            }

            deserializer.deserialize_str(DateTimeVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_datetime;

    #[test]
    fn test_accessors() {
        let dt = parse_datetime("2014-01-09T21:48:30.99999+00:30").unwrap();
        assert_eq!(
            (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), dt.second()),
            (2014, 1, 9, 21, 48, 30)
        );
        assert_eq!(dt.microsecond(), 999_990);
        assert_eq!(dt.offset_seconds(), Some(1800));
        assert!(!dt.is_naive());
    }

    #[test]
    fn test_negative_offset_with_minutes() {
        let dt = parse_datetime("2014-01-09T21:48-05:30").unwrap();
        assert_eq!(dt.offset_seconds(), Some(-19_800));
    }

    #[test]
    fn test_naive_vs_utc() {
        let naive = parse_datetime("2014-01-09T21:48").unwrap();
        let utc = parse_datetime("2014-01-09T21:48Z").unwrap();
        assert!(naive.is_naive());
        assert_eq!(utc.offset_seconds(), Some(0));
        assert_ne!(naive, utc);
    }

    #[test]
    fn test_days_since_epoch() {
        assert_eq!(parse_datetime("1970-01-01T00:00").unwrap().days_since_epoch(), 0);
        assert_eq!(parse_datetime("2024-03-15T00:00").unwrap().days_since_epoch(), 19797);
        assert_eq!(parse_datetime("1969-12-31T00:00").unwrap().days_since_epoch(), -1);
        assert_eq!(parse_datetime("0001-01-01T00:00").unwrap().days_since_epoch(), -719_162);
    }

    #[test]
    fn test_epoch_micros() {
        let dt = parse_datetime("2024-03-15T14:30:00.123456Z").unwrap();
        assert_eq!(dt.epoch_micros(), Some(1_710_513_000_123_456));

        let shifted = parse_datetime("2024-03-15T14:30:00+05:30").unwrap();
        let utc = parse_datetime("2024-03-15T09:00:00Z").unwrap();
        assert_eq!(shifted.epoch_micros(), utc.epoch_micros());
        assert_eq!(shifted.local_epoch_micros(), 1_710_513_000_000_000);

        let naive = parse_datetime("1969-12-31T23:59:59").unwrap();
        assert_eq!(naive.epoch_micros(), None);
        assert_eq!(naive.local_epoch_micros(), -1_000_000);
    }

    #[test]
    fn test_display() {
        let cases = [
            ("20140109T2148", "2014-01-09T21:48:00"),
            ("2014-01-09T21:48:30.5", "2014-01-09T21:48:30.5"),
            ("2014-01-09T21:48:30.000", "2014-01-09T21:48:30"),
            ("2014-01-09T21:48:30.000001", "2014-01-09T21:48:30.000001"),
            ("2014-01-09T21:48-00:00", "2014-01-09T21:48:00Z"),
            ("2014-01-09T21:48+12", "2014-01-09T21:48:00+12:00"),
            ("2014-01-09T21:48-0030", "2014-01-09T21:48:00-00:30"),
            ("0001-01-01T00:00Z", "0001-01-01T00:00:00Z"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_datetime(input).unwrap().to_string(), expected, "{input}");
        }
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(super::trim_fraction(500_000), (5, 1));
        assert_eq!(super::trim_fraction(999_990), (99_999, 5));
        assert_eq!(super::trim_fraction(1), (1, 6));
        assert_eq!(super::trim_fraction(10), (1, 5));
        assert_eq!(super::trim_fraction(120_300), (1203, 4));
    }

    #[test]
    fn test_display_fraction_keeps_leading_zeros() {
        let cases = [
            ("2014-01-09T21:48:30.000010", "2014-01-09T21:48:30.00001"),
            ("2014-01-09T21:48:30.0203", "2014-01-09T21:48:30.0203"),
            ("2014-01-09T21:48:30.999999", "2014-01-09T21:48:30.999999"),
            ("2014-01-09T21:48:30.1", "2014-01-09T21:48:30.1"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_datetime(input).unwrap().to_string(), expected, "{input}");
        }
    }

    #[test]
    fn test_from_str() {
        let dt: super::ParsedDateTime = "2020-02-29T12:00Z".parse().unwrap();
        assert_eq!((dt.month(), dt.day()), (2, 29));
        assert!("2014-02-29T12:00Z".parse::<super::ParsedDateTime>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let dt = parse_datetime("2014-01-09T21:48:30.5+01:00").unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2014-01-09T21:48:30.5+01:00\"");
        let back: super::ParsedDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
        assert!(serde_json::from_str::<super::ParsedDateTime>("\"2014-13-01T00:00\"").is_err());
    }
}
