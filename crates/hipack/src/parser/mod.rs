//! Recursive-descent parser for HiPack documents.
//!
//! The parser is organized the way a hand-written scanner naturally falls
//! apart: this module holds the `Parser` struct, the top-level grammar, key
//! and separator handling, annotation chains, and whitespace/comment
//! skipping — the glue that is shared by every value kind. Each literal
//! kind gets its own focused file:
//!
//! - [`number`] — integer and float lexing (sign, hex, octal, exponent)
//! - [`string`] — string bodies and backslash escapes
//! - [`collection`] — lists and dicts, including item terminators
//!
//! Throughout, the parser keeps exactly one byte of lookahead (via
//! [`Cursor`]) and reports at most one error per invocation: the first one
//! it detects.

mod collection;
mod number;
mod string;

use hipack_util::{ErrorKind, ParseError, Position};

use crate::annotations::Annotations;
use crate::cursor::Cursor;
use crate::dict::Dict;
use crate::io::{CharIn, CharSource};
use crate::value::Value;

/// Parses a complete HiPack document from `source`, returning the top-level
/// dict or the first error the parser ran into.
pub fn parse<S: CharSource>(source: S) -> Result<Dict, ParseError> {
    Parser::new(source).parse()
}

pub struct Parser<S> {
    cursor: Cursor<S>,
}

impl<S: CharSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Parser {
            cursor: Cursor::new(source),
        }
    }

    /// Entry point: a document is either a single brace-wrapped dict, with
    /// no trailing bytes required after the closing `}`, or a bare
    /// sequence of `key: value` items running to end of input. Both
    /// produce an equivalent top-level dict.
    pub fn parse(&mut self) -> Result<Dict, ParseError> {
        self.skip_whitespace_and_comments()?;
        match self.cursor.current() {
            CharIn::IoError => Err(self.error(ErrorKind::Io)),
            CharIn::Byte(b'{') => {
                self.cursor.bump();
                self.parse_dict_items(Some(b'}'), ErrorKind::UnterminatedMessage)
            },
            _ => self.parse_dict_items(None, ErrorKind::UnterminatedMessage),
        }
    }

    /// Dispatches to the right literal parser based on the leading byte.
    ///
    /// EOF where a value is expected falls through to `parse_number`, same
    /// as any other byte that isn't a quote, bracket, brace, or boolean
    /// lead: the number lexer's own zero-length-token check is what turns
    /// that into `invalid numeric value`, rather than a separate EOF case
    /// here reporting a message of its own.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.cursor.current() {
            CharIn::IoError => Err(self.error(ErrorKind::Io)),
            CharIn::Byte(b'"') => self.parse_string_value(),
            CharIn::Byte(b'[') => self.parse_list_value(),
            CharIn::Byte(b'{') => self.parse_dict_value(),
            CharIn::Byte(b'T') | CharIn::Byte(b't') | CharIn::Byte(b'F') | CharIn::Byte(b'f') => {
                self.parse_bool_value()
            },
            CharIn::Eof | CharIn::Byte(_) => self.parse_number(),
        }
    }

    fn parse_bool_value(&mut self) -> Result<Value, ParseError> {
        let first = self.cursor.current_byte().expect("dispatched on a boolean lead byte");
        self.cursor.bump();
        let rest: &[u8] = match first {
            b'T' | b't' => b"rue",
            b'F' | b'f' => b"alse",
            _ => unreachable!(),
        };
        for &expected in rest {
            match self.cursor.current_byte() {
                Some(b) if b == expected => self.cursor.bump(),
                _ => return Err(self.error(ErrorKind::InvalidBooleanValue)),
            }
        }
        Ok(Value::bool(matches!(first, b'T' | b't')))
    }

    /// A key is one or more bytes that aren't whitespace or one of the
    /// structural delimiters. Keys are taken verbatim — no escapes — so
    /// this doubles as the lexical rule for annotation names.
    fn parse_key(&mut self) -> Result<String, ParseError> {
        let mut bytes = Vec::new();
        loop {
            match self.cursor.current() {
                CharIn::IoError => return Err(self.error(ErrorKind::Io)),
                CharIn::Byte(b) if !is_key_excluded(b) => {
                    bytes.push(b);
                    self.cursor.bump();
                },
                _ => break,
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Consumes the separator between a key and its value: a colon
    /// (optionally followed by whitespace), whitespace alone, or nothing
    /// at all when the value's own opening `{`/`[` serves as separator.
    fn consume_separator(&mut self) -> Result<(), ParseError> {
        let skipped_ws = self.skip_whitespace_and_comments()?;
        match self.cursor.current() {
            CharIn::IoError => Err(self.error(ErrorKind::Io)),
            CharIn::Byte(b':') => {
                self.cursor.bump();
                self.skip_whitespace_and_comments()?;
                Ok(())
            },
            CharIn::Byte(b'{') | CharIn::Byte(b'[') => Ok(()),
            _ => {
                if skipped_ws {
                    Ok(())
                } else {
                    Err(self.error(ErrorKind::MissingSeparator))
                }
            },
        }
    }

    /// Consumes zero or more `:NAME` annotation groups preceding a value.
    fn parse_annotations(&mut self) -> Result<Annotations, ParseError> {
        let mut annotations = Annotations::new();
        loop {
            match self.cursor.current() {
                CharIn::IoError => return Err(self.error(ErrorKind::Io)),
                CharIn::Byte(b':') => {
                    self.cursor.bump();
                    let name = self.parse_key()?;
                    if name.is_empty() {
                        return Err(self.error(ErrorKind::MissingDictionaryKey));
                    }
                    if !annotations.add(name) {
                        return Err(self.error(ErrorKind::DuplicateAnnotation));
                    }
                    self.skip_whitespace_and_comments()?;
                },
                _ => break,
            }
        }
        Ok(annotations)
    }

    /// Parses the annotation chain and the value it decorates together,
    /// since both sit between the separator and the item terminator.
    fn parse_annotated_value(&mut self) -> Result<Value, ParseError> {
        let annotations = self.parse_annotations()?;
        let value = self.parse_value()?;
        Ok(value.with_annotations(annotations))
    }

    /// Skips whitespace and `#` comments, which are transparent to every
    /// higher-level lexing rule. Returns whether anything was consumed, so
    /// callers can tell a whitespace separator from no separator at all.
    fn skip_whitespace_and_comments(&mut self) -> Result<bool, ParseError> {
        let mut skipped = false;
        loop {
            match self.cursor.current() {
                CharIn::IoError => return Err(self.error(ErrorKind::Io)),
                CharIn::Byte(b) if is_whitespace(b) => {
                    self.cursor.bump();
                    skipped = true;
                },
                CharIn::Byte(b'#') => {
                    skipped = true;
                    self.cursor.bump();
                    loop {
                        match self.cursor.current() {
                            CharIn::IoError => return Err(self.error(ErrorKind::Io)),
                            CharIn::Byte(b'\n') | CharIn::Eof => break,
                            CharIn::Byte(_) => self.cursor.bump(),
                        }
                    }
                },
                _ => break,
            }
        }
        Ok(skipped)
    }

    fn position(&self) -> Position {
        self.cursor.position()
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.position())
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, 0x09 | 0x0A | 0x0D | 0x20)
}

fn is_key_excluded(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b'[' | b']' | b'{' | b'}' | b':' | b',')
}
