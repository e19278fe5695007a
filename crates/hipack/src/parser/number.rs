//! Number literal lexing: sign, hex/octal/decimal dispatch, and the
//! fractional/exponent tail shared by decimal floats.
//!
//! The grammar's numeric sub-state is the four flags a reference lexer
//! would track — `has_sign`, `is_hex`/`is_octal`, `dot_seen`, `exp_seen` — though here
//! they show up as which branch of the dispatch we're in rather than as
//! fields on the parser, since each branch only ever needs to know its own
//! history. Overflow is always a hard error: this parser does not mirror
//! the reference implementation's silent 32-bit truncation.

use hipack_util::{ErrorKind, ParseError};

use super::{is_whitespace, Parser};
use crate::io::CharSource;
use crate::value::Value;

impl<S: CharSource> Parser<S> {
    pub(super) fn parse_number(&mut self) -> Result<Value, ParseError> {
        let negative = match self.cursor.current_byte() {
            Some(b'+') => {
                self.cursor.bump();
                false
            },
            Some(b'-') => {
                self.cursor.bump();
                true
            },
            _ => false,
        };

        if self.cursor.current_byte() == Some(b'0') {
            self.cursor.bump();
            match self.cursor.current_byte() {
                Some(b'x') | Some(b'X') => {
                    self.cursor.bump();
                    return self.parse_radix_integer(16, negative);
                },
                Some(b @ b'1'..=b'7') => {
                    let _ = b;
                    return self.parse_radix_integer(8, negative);
                },
                Some(b'.') | Some(b'e') | Some(b'E') => {
                    let mut text = vec![b'0'];
                    let is_float = self.lex_fraction_and_exponent(&mut text)?;
                    return self.finish_decimal(text, negative, is_float);
                },
                _ => {
                    let mut text = vec![b'0'];
                    self.consume_decimal_digits(&mut text);
                    let is_float = self.lex_fraction_and_exponent(&mut text)?;
                    return self.finish_decimal(text, negative, is_float);
                },
            }
        }

        if !matches!(self.cursor.current_byte(), Some(b) if b.is_ascii_digit()) {
            return Err(self.error(ErrorKind::InvalidNumericValue));
        }
        let mut text = Vec::new();
        self.consume_decimal_digits(&mut text);
        let is_float = self.lex_fraction_and_exponent(&mut text)?;
        self.finish_decimal(text, negative, is_float)
    }

    fn consume_decimal_digits(&mut self, text: &mut Vec<u8>) {
        while let Some(b) = self.cursor.current_byte() {
            if b.is_ascii_digit() {
                text.push(b);
                self.cursor.bump();
            } else {
                break;
            }
        }
    }

    /// Consumes an optional `.digits` fraction and an optional
    /// `(e|E)[+-]digits` exponent, appending to `text`. Returns whether
    /// either was present (making the literal a float).
    fn lex_fraction_and_exponent(&mut self, text: &mut Vec<u8>) -> Result<bool, ParseError> {
        let mut is_float = false;

        if self.cursor.current_byte() == Some(b'.') {
            text.push(b'.');
            self.cursor.bump();
            is_float = true;
            self.consume_decimal_digits(text);
        }

        if matches!(self.cursor.current_byte(), Some(b'e') | Some(b'E')) {
            text.push(self.cursor.current_byte().unwrap());
            self.cursor.bump();
            is_float = true;

            if matches!(self.cursor.current_byte(), Some(b'+') | Some(b'-')) {
                text.push(self.cursor.current_byte().unwrap());
                self.cursor.bump();
            }

            let mut exponent_digits = 0;
            while let Some(b) = self.cursor.current_byte() {
                if b.is_ascii_digit() {
                    text.push(b);
                    self.cursor.bump();
                    exponent_digits += 1;
                } else {
                    break;
                }
            }
            if exponent_digits == 0 {
                return Err(self.error(ErrorKind::InvalidNumericValue));
            }
        }

        Ok(is_float)
    }

    /// A decimal integer or float may contain at most one `.` and one
    /// exponent; anything from the numeric character class left over after
    /// lexing those means the literal was malformed (e.g. a second `.` or
    /// a stray hex letter in a decimal context).
    fn finish_decimal(&mut self, text: Vec<u8>, negative: bool, is_float: bool) -> Result<Value, ParseError> {
        if self.has_trailing_numeric_garbage() {
            return Err(self.error(ErrorKind::InvalidNumericValue));
        }
        if text.is_empty() {
            return Err(self.error(ErrorKind::InvalidNumericValue));
        }
        let token = std::str::from_utf8(&text).expect("numeric token is ASCII");

        if is_float {
            let magnitude: f64 = token.parse().map_err(|_| self.error(ErrorKind::InvalidNumericValue))?;
            Ok(Value::float(if negative { -magnitude } else { magnitude }))
        } else {
            let magnitude: i64 = token.parse().map_err(|_| self.error(ErrorKind::InvalidNumericValue))?;
            let signed = if negative { -magnitude } else { magnitude };
            i32::try_from(signed)
                .map(Value::integer)
                .map_err(|_| self.error(ErrorKind::InvalidNumericValue))
        }
    }

    fn parse_radix_integer(&mut self, radix: u32, negative: bool) -> Result<Value, ParseError> {
        let mut digits = Vec::new();
        while let Some(b) = self.cursor.current_byte() {
            if (b as char).is_digit(radix) {
                digits.push(b);
                self.cursor.bump();
            } else {
                break;
            }
        }
        if digits.is_empty() {
            return Err(self.error(ErrorKind::InvalidNumericValue));
        }
        // Hex and octal literals may not contain '.' or an exponent.
        if matches!(self.cursor.current_byte(), Some(b'.') | Some(b'e') | Some(b'E')) {
            return Err(self.error(ErrorKind::InvalidNumericValue));
        }
        let token = std::str::from_utf8(&digits).expect("radix digits are ASCII");
        let magnitude =
            i64::from_str_radix(token, radix).map_err(|_| self.error(ErrorKind::InvalidNumericValue))?;
        let signed = if negative { -magnitude } else { magnitude };
        i32::try_from(signed)
            .map(Value::integer)
            .map_err(|_| self.error(ErrorKind::InvalidNumericValue))
    }

    /// After a number has been fully lexed, a byte that would itself have
    /// been eligible to extend a numeric token (digit, extra `.`, a stray
    /// hex letter, or a misplaced sign) means the literal was malformed
    /// rather than simply followed by unrelated input.
    fn has_trailing_numeric_garbage(&self) -> bool {
        match self.cursor.current_byte() {
            Some(b) => {
                !is_whitespace(b)
                    && matches!(b, b'.' | b'+' | b'-' | b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
            },
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::SliceSource;
    use crate::parser::Parser;

    fn parse_value(input: &str) -> Result<Value, ParseError> {
        let mut parser = Parser::new(SliceSource::new(input.as_bytes()));
        parser.parse_number()
    }

    #[test]
    fn decimal_integer() {
        assert_eq!(parse_value("42").unwrap(), Value::integer(42));
        assert_eq!(parse_value("0").unwrap(), Value::integer(0));
        assert_eq!(parse_value("-7").unwrap(), Value::integer(-7));
    }

    #[test]
    fn hex_and_octal() {
        assert_eq!(parse_value("0xFF").unwrap(), Value::integer(255));
        assert_eq!(parse_value("017").unwrap(), Value::integer(15));
    }

    #[test]
    fn float_with_exponent() {
        let v = parse_value("3.14e0").unwrap();
        assert_eq!(v.as_float().unwrap(), 3.14);
    }

    #[test]
    fn empty_hex_body_is_invalid() {
        assert_eq!(parse_value("0x").unwrap_err().kind, ErrorKind::InvalidNumericValue);
    }

    #[test]
    fn int32_boundaries_round_trip() {
        assert_eq!(parse_value("2147483647").unwrap(), Value::integer(i32::MAX));
        assert_eq!(parse_value("-2147483648").unwrap(), Value::integer(i32::MIN));
    }

    #[test]
    fn int32_overflow_is_invalid() {
        assert_eq!(parse_value("2147483648").unwrap_err().kind, ErrorKind::InvalidNumericValue);
    }

    #[test]
    fn double_dot_is_invalid() {
        assert_eq!(parse_value("1.2.3").unwrap_err().kind, ErrorKind::InvalidNumericValue);
    }
}
