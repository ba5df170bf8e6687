//! Index-based scanner over date-time text.
//!
//! The scanner never allocates: it walks the input bytes with a cursor and
//! only advances when a read succeeds. Every byte it consumes is ASCII, so the
//! cursor always sits on a `char` boundary of the original string.

use crate::error::ParseError;

/// Cursor over the input text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unconsumed input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns true if all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the byte at the cursor without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Returns true if the byte at the cursor is an ASCII digit.
    #[inline]
    pub fn peek_digit(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_digit())
    }

    /// Consumes `literal` if it is the next byte.
    #[inline]
    pub fn eat(&mut self, literal: u8) -> bool {
        if self.peek() == Some(literal) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes `literal` or fails with a structural error.
    pub fn expect(&mut self, literal: u8, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(literal) {
            Ok(())
        } else {
            Err(self.unexpected_at(self.pos, expected))
        }
    }

    /// Reads exactly `width` ASCII digits as a number.
    #[inline]
    pub fn digits(&mut self, width: usize, expected: &'static str) -> Result<u32, ParseError> {
        let bytes = self.input.as_bytes();
        let mut value = 0u32;
        for i in self.pos..self.pos + width {
            match bytes.get(i) {
                Some(b) if b.is_ascii_digit() => value = value * 10 + u32::from(b - b'0'),
                _ => return Err(self.unexpected_at(i, expected)),
            }
        }
        self.pos += width;
        Ok(value)
    }

    /// Reads a run of zero or more ASCII digits.
    ///
    /// Returns the value of the first `max_value_digits` digits and the total
    /// number of digits consumed. Digits beyond `max_value_digits` are
    /// consumed and counted but do not contribute to the value.
    pub fn digit_run(&mut self, max_value_digits: usize) -> (u32, usize) {
        let bytes = self.input.as_bytes();
        let mut value = 0u32;
        let mut count = 0usize;
        while let Some(b) = bytes.get(self.pos + count).filter(|b| b.is_ascii_digit()) {
            if count < max_value_digits {
                value = value * 10 + u32::from(b - b'0');
            }
            count += 1;
        }
        self.pos += count;
        (value, count)
    }

    /// Builds the structural error for whatever sits at `position`.
    pub fn unexpected_at(&self, position: usize, expected: &'static str) -> ParseError {
        match self.input.get(position..).and_then(|rest| rest.chars().next()) {
            Some(found) => ParseError::UnexpectedChar {
                position,
                found,
                expected,
            },
            None => ParseError::UnexpectedEnd { position, expected },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_digits() {
        let mut s = Scanner::new("2014-01");
        assert_eq!(s.digits(4, "year").unwrap(), 2014);
        assert_eq!(s.position(), 4);
        assert!(s.eat(b'-'));
        assert_eq!(s.digits(2, "month").unwrap(), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn test_digits_do_not_advance_on_failure() {
        let mut s = Scanner::new("1x");
        let err = s.digits(2, "hour").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedChar {
                position: 1,
                found: 'x',
                expected: "hour",
            }
        );
        assert_eq!(s.position(), 0);

        let mut s = Scanner::new("1");
        assert_eq!(
            s.digits(2, "hour").unwrap_err(),
            ParseError::UnexpectedEnd {
                position: 1,
                expected: "hour",
            }
        );
    }

    #[test]
    fn test_non_ascii_reported_as_char() {
        let mut s = Scanner::new("2014\u{2013}01");
        s.digits(4, "year").unwrap();
        assert!(!s.eat(b'-'));
        let err = s.expect(b'T', "'T'").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedChar {
                position: 4,
                found: '\u{2013}',
                expected: "'T'",
            }
        );
    }

    #[test]
    fn test_digit_run() {
        let mut s = Scanner::new("123456789Z");
        assert_eq!(s.digit_run(6), (123_456, 9));
        assert_eq!(s.remaining(), "Z");

        let mut s = Scanner::new("Z");
        assert_eq!(s.digit_run(6), (0, 0));
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn test_peek() {
        let s = Scanner::new("5");
        assert!(s.peek_digit());
        assert_eq!(s.peek(), Some(b'5'));
        assert!(!Scanner::new("").peek_digit());
    }
}
