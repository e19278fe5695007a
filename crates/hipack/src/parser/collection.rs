//! List and dict value parsing, including the item-terminator grammar the
//! two share: a comma, whitespace, or an immediate closing delimiter.

use hipack_util::{ErrorKind, ParseError};

use super::Parser;
use crate::dict::Dict;
use crate::io::{CharIn, CharSource};
use crate::value::Value;

impl<S: CharSource> Parser<S> {
    pub(super) fn parse_list_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.bump(); // '['
        let mut items = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            match self.cursor.current() {
                CharIn::IoError => return Err(self.error(ErrorKind::Io)),
                CharIn::Eof => return Err(self.error(ErrorKind::UnterminatedList)),
                CharIn::Byte(b']') => {
                    self.cursor.bump();
                    break;
                },
                _ => {
                    let item = self.parse_annotated_value()?;
                    items.push(item);
                    self.consume_item_terminator(Some(b']'), ErrorKind::UnterminatedList)?;
                },
            }
        }
        Ok(Value::list(items))
    }

    pub(super) fn parse_dict_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.bump(); // '{'
        let dict = self.parse_dict_items(Some(b'}'), ErrorKind::UnterminatedDict)?;
        Ok(Value::dict(dict))
    }

    /// Parses `key: value` entries until `end_byte` is seen (or, when
    /// `end_byte` is `None`, until end of input). Shared by the top-level
    /// document and every nested dict; only the byte that closes the dict
    /// and the error reported for a premature EOF differ between the two.
    pub(super) fn parse_dict_items(
        &mut self,
        end_byte: Option<u8>,
        unterminated_kind: ErrorKind,
    ) -> Result<Dict, ParseError> {
        let mut dict = Dict::new();
        loop {
            self.skip_whitespace_and_comments()?;
            match self.cursor.current() {
                CharIn::IoError => return Err(self.error(ErrorKind::Io)),
                CharIn::Eof => {
                    return if end_byte.is_some() {
                        Err(self.error(unterminated_kind))
                    } else {
                        Ok(dict)
                    };
                },
                CharIn::Byte(b) if Some(b) == end_byte => {
                    self.cursor.bump();
                    break;
                },
                _ => {
                    let key = self.parse_key()?;
                    if key.is_empty() {
                        return Err(self.error(ErrorKind::MissingDictionaryKey));
                    }
                    self.consume_separator()?;
                    let value = self.parse_annotated_value()?;
                    dict.set(key, value);
                    self.consume_item_terminator(end_byte, unterminated_kind)?;
                },
            }
        }
        Ok(dict)
    }

    /// Consumes the boundary between one item and the next: a comma,
    /// whitespace, or the closing delimiter itself sitting immediately
    /// after the item with nothing between them.
    fn consume_item_terminator(&mut self, end_byte: Option<u8>, unterminated: ErrorKind) -> Result<(), ParseError> {
        let skipped_ws = self.skip_whitespace_and_comments()?;
        match self.cursor.current() {
            CharIn::IoError => Err(self.error(ErrorKind::Io)),
            CharIn::Eof => {
                if end_byte.is_some() {
                    Err(self.error(unterminated))
                } else {
                    Ok(())
                }
            },
            CharIn::Byte(b',') => {
                self.cursor.bump();
                Ok(())
            },
            CharIn::Byte(b) if Some(b) == end_byte => Ok(()),
            _ => {
                if skipped_ws {
                    Ok(())
                } else {
                    Err(self.error(ErrorKind::UnexpectedInput))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::SliceSource;
    use crate::parser::{parse, Parser};

    fn parse_value(input: &str) -> Result<Value, ParseError> {
        let mut parser = Parser::new(SliceSource::new(input.as_bytes()));
        parser.parse_value()
    }

    #[test]
    fn empty_list() {
        let v = parse_value("[]").unwrap();
        assert_eq!(v.as_list().unwrap().len(), 0);
    }

    #[test]
    fn list_with_mixed_terminators() {
        let v = parse_value("[1, 2 3]").unwrap();
        let items: Vec<_> = v.as_list().unwrap().iter().map(|x| x.as_integer().unwrap()).collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn nested_list_of_dicts() {
        let v = parse_value("[{a: 1} {b: 2}]").unwrap();
        let items = v.as_list().unwrap();
        assert_eq!(items[0].as_dict().unwrap().get("a").unwrap().as_integer(), Some(1));
        assert_eq!(items[1].as_dict().unwrap().get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn unterminated_list_is_an_error() {
        let err = parse_value("[1, 2").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnterminatedList);
    }

    #[test]
    fn implicit_separator_before_brace() {
        let dict = parse(SliceSource::new(b"inner{a: 1}")).unwrap();
        assert_eq!(dict.get("inner").unwrap().as_dict().unwrap().get("a").unwrap().as_integer(), Some(1));
    }

    #[test]
    fn implicit_separator_before_bracket() {
        let dict = parse(SliceSource::new(b"items[1 2]")).unwrap();
        let items = dict.get("items").unwrap().as_list().unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn missing_dictionary_key_is_an_error() {
        let err = parse(SliceSource::new(b"{: 1}")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingDictionaryKey);
    }
}
