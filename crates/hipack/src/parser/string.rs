//! String literal lexing: quoted bodies and backslash escapes.

use hipack_util::{ErrorKind, ParseError};

use super::Parser;
use crate::io::{CharIn, CharSource};
use crate::string::HiString;
use crate::value::Value;

impl<S: CharSource> Parser<S> {
    pub(super) fn parse_string_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.bump(); // opening quote
        let mut bytes = Vec::new();
        loop {
            match self.cursor.current() {
                CharIn::IoError => return Err(self.error(ErrorKind::Io)),
                CharIn::Eof => return Err(self.error(ErrorKind::UnterminatedString)),
                CharIn::Byte(b'"') => {
                    self.cursor.bump();
                    break;
                },
                CharIn::Byte(b'\\') => {
                    self.cursor.bump();
                    bytes.push(self.parse_escape()?);
                },
                CharIn::Byte(b) => {
                    bytes.push(b);
                    self.cursor.bump();
                },
            }
        }
        Ok(Value::string(HiString::from_bytes(bytes)))
    }

    /// Parses one escape body, with the cursor positioned right after the
    /// backslash. `\"`, `\\`, `\n`, `\r`, `\t` map to their fixed byte;
    /// anything else is read as two hex digits giving the literal byte
    /// value, and anything that is neither is an error.
    fn parse_escape(&mut self) -> Result<u8, ParseError> {
        match self.cursor.current() {
            CharIn::IoError => Err(self.error(ErrorKind::Io)),
            CharIn::Eof => Err(self.error(ErrorKind::InvalidEscapeSequence)),
            CharIn::Byte(b) => match b {
                b'"' => {
                    self.cursor.bump();
                    Ok(b'"')
                },
                b'\\' => {
                    self.cursor.bump();
                    Ok(b'\\')
                },
                b'n' => {
                    self.cursor.bump();
                    Ok(0x0A)
                },
                b'r' => {
                    self.cursor.bump();
                    Ok(0x0D)
                },
                b't' => {
                    self.cursor.bump();
                    Ok(0x09)
                },
                // Anything else is read as two hex digits. Both bytes are
                // fetched before either is validated, so a malformed first
                // digit (e.g. a raw newline) is still reported only after
                // the second byte has been consumed, not before.
                high => {
                    self.cursor.bump();
                    match self.cursor.current() {
                        CharIn::IoError => Err(self.error(ErrorKind::Io)),
                        CharIn::Eof => Err(self.error(ErrorKind::InvalidEscapeSequence)),
                        CharIn::Byte(low) => {
                            if !(high as char).is_ascii_hexdigit() || !(low as char).is_ascii_hexdigit() {
                                return Err(self.error(ErrorKind::InvalidEscapeSequence));
                            }
                            self.cursor.bump();
                            let high_digit = (high as char).to_digit(16).expect("checked is_ascii_hexdigit") as u8;
                            let low_digit = (low as char).to_digit(16).expect("checked is_ascii_hexdigit") as u8;
                            Ok((high_digit << 4) | low_digit)
                        },
                    }
                },
            },
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
        parser.parse_string_value()
    }

    #[test]
    fn empty_string_is_canonical() {
        let v = parse_value("\"\"").unwrap();
        assert_eq!(v.as_string().unwrap().as_str(), Some(""));
    }

    #[test]
    fn scenario_five_escape_mix() {
        // x: "a\tb\n\41" -> "a<TAB>b<NL>A"
        let v = parse_value("\"a\\tb\\n\\41\"").unwrap();
        assert_eq!(v.as_string().unwrap().as_bytes(), b"a\tb\nA");
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(parse_value("\"abc").unwrap_err().kind, ErrorKind::UnterminatedString);
    }

    #[test]
    fn invalid_escape_is_an_error() {
        assert_eq!(parse_value("\"\\q\"").unwrap_err().kind, ErrorKind::InvalidEscapeSequence);
    }

    #[test]
    fn truncated_hex_escape_is_an_error() {
        assert_eq!(parse_value("\"\\4\"").unwrap_err().kind, ErrorKind::InvalidEscapeSequence);
    }
}
