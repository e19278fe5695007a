//! Textual writer: the inverse of [`crate::parser`].
//!
//! Two modes share one recursive emitter: [`Mode::Indented`] breaks onto a
//! new line per item with two spaces of indent per nesting level;
//! [`Mode::Compact`] emits no optional whitespace at all. Both produce
//! output the parser accepts back to an equal value.

use std::io;

use crate::annotations::Annotations;
use crate::dict::Dict;
use crate::io::CharSink;
use crate::value::{Value, ValueData};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Indented,
    Compact,
}

pub struct Writer<'s, S> {
    sink: &'s mut S,
    mode: Mode,
    depth: usize,
}

impl<'s, S: CharSink> Writer<'s, S> {
    pub fn new(sink: &'s mut S, mode: Mode) -> Self {
        Writer { sink, mode, depth: 0 }
    }

    /// Writes `dict` as a top-level document: its items with no enclosing
    /// braces. Any sink failure aborts immediately, leaving whatever was
    /// already pushed to the sink in place.
    pub fn write(&mut self, dict: &Dict) -> io::Result<()> {
        self.write_items(dict)
    }

    fn write_items(&mut self, dict: &Dict) -> io::Result<()> {
        for (key, value) in dict.iter() {
            self.write_indent()?;
            self.sink.put_str(key.as_bytes())?;
            self.write_separator(value)?;
            self.write_annotations(&value.annotations)?;
            self.write_value(value)?;
            self.sink.put_char(b',')?;
            self.write_newline()?;
        }
        Ok(())
    }

    /// `:` for scalar values; nothing for list/dict values, whose opening
    /// bracket is itself the separator.
    fn write_separator(&mut self, value: &Value) -> io::Result<()> {
        match &value.data {
            ValueData::List(_) | ValueData::Dict(_) => Ok(()),
            _ => self.sink.put_char(b':'),
        }
    }

    /// A trailing space follows each annotation name even in compact mode:
    /// without it, the name and whatever the value's leading byte lexes as
    /// (e.g. another key byte) would merge into one token on re-parse.
    fn write_annotations(&mut self, annotations: &Annotations) -> io::Result<()> {
        for name in annotations.iter() {
            self.sink.put_char(b':')?;
            self.sink.put_str(name.as_bytes())?;
            self.sink.put_char(b' ')?;
        }
        Ok(())
    }

    fn write_value(&mut self, value: &Value) -> io::Result<()> {
        match &value.data {
            ValueData::Integer(v) => self.sink.put_str(v.to_string().as_bytes()),
            ValueData::Float(v) => self.write_float(*v),
            ValueData::Bool(v) => self.sink.put_str(if *v { b"True" } else { b"False" }),
            ValueData::String(v) => self.write_string(v.as_bytes()),
            ValueData::List(items) => self.write_list(items),
            ValueData::Dict(dict) => self.write_dict(dict),
        }
    }

    /// Rust's `{}` formatting of `f64` is already shortest-round-trip; the
    /// only adjustment needed is appending `.0` when the result would
    /// otherwise read back as an integer.
    fn write_float(&mut self, v: f64) -> io::Result<()> {
        let rendered = v.to_string();
        if rendered.contains(['.', 'e', 'E']) {
            self.sink.put_str(rendered.as_bytes())
        } else {
            self.sink.put_str(rendered.as_bytes())?;
            self.sink.put_str(b".0")
        }
    }

    fn write_string(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.put_char(b'"')?;
        for &b in bytes {
            match b {
                0x09 => self.sink.put_str(b"\\t")?,
                0x0A => self.sink.put_str(b"\\n")?,
                0x0D => self.sink.put_str(b"\\r")?,
                b'"' => self.sink.put_str(b"\\\"")?,
                b'\\' => self.sink.put_str(b"\\\\")?,
                b if b < 0x20 => {
                    self.sink.put_str(format!("\\{:02x}", b).as_bytes())?;
                },
                b => self.sink.put_char(b)?,
            }
        }
        self.sink.put_char(b'"')
    }

    fn write_list(&mut self, items: &[Value]) -> io::Result<()> {
        self.sink.put_char(b'[')?;
        if items.is_empty() {
            return self.sink.put_char(b']');
        }
        self.depth += 1;
        self.write_newline()?;
        for item in items {
            self.write_indent()?;
            self.write_annotations(&item.annotations)?;
            self.write_value(item)?;
            self.sink.put_char(b',')?;
            self.write_newline()?;
        }
        self.depth -= 1;
        self.write_indent()?;
        self.sink.put_char(b']')
    }

    fn write_dict(&mut self, dict: &Dict) -> io::Result<()> {
        self.sink.put_char(b'{')?;
        if dict.is_empty() {
            return self.sink.put_char(b'}');
        }
        self.depth += 1;
        self.write_newline()?;
        self.write_items(dict)?;
        self.depth -= 1;
        self.write_indent()?;
        self.sink.put_char(b'}')
    }

    fn write_indent(&mut self) -> io::Result<()> {
        if self.mode == Mode::Indented {
            for _ in 0..self.depth {
                self.sink.put_str(b"  ")?;
            }
        }
        Ok(())
    }

    fn write_newline(&mut self) -> io::Result<()> {
        if self.mode == Mode::Indented {
            self.sink.put_char(b'\n')?;
        }
        Ok(())
    }
}

/// Convenience entry point mirroring [`crate::parser::parse`]: writes
/// `dict` to `sink` in `mode`, returning whether the write succeeded.
pub fn write<S: CharSink>(sink: &mut S, dict: &Dict, mode: Mode) -> bool {
    Writer::new(sink, mode).write(dict).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::BufferSink;
    use crate::parser::parse;
    use crate::value::Value;

    fn render(dict: &Dict, mode: Mode) -> String {
        let mut sink = BufferSink::new();
        assert!(write(&mut sink, dict, mode));
        String::from_utf8(sink.into_bytes()).unwrap()
    }

    #[test]
    fn empty_dict_writes_as_nothing_at_top_level() {
        let dict = Dict::new();
        assert_eq!(render(&dict, Mode::Compact), "");
    }

    #[test]
    fn scalars_use_colon_separator_lists_and_dicts_do_not() {
        let mut dict = Dict::new();
        dict.set("a", Value::integer(1));
        dict.set("b", Value::list(vec![]));
        let out = render(&dict, Mode::Compact);
        assert_eq!(out, "a:1,b[],");
    }

    #[test]
    fn floats_get_a_trailing_dot_zero_when_bare() {
        let mut dict = Dict::new();
        dict.set("n", Value::float(3.0));
        assert_eq!(render(&dict, Mode::Compact), "n:3.0,");
    }

    #[test]
    fn strings_escape_control_and_structural_bytes() {
        let mut dict = Dict::new();
        dict.set("s", Value::string("a\tb\n\"c\""));
        assert_eq!(render(&dict, Mode::Compact), "s:\"a\\tb\\n\\\"c\\\"\",");
    }

    #[test]
    fn annotations_emit_as_colon_chains() {
        let mut value = Value::bool(true);
        value.annotations.add("secret");
        let mut dict = Dict::new();
        dict.set("flag", value);
        assert_eq!(render(&dict, Mode::Compact), "flag::secret True,");
    }

    #[test]
    fn indented_mode_breaks_nested_containers_onto_new_lines() {
        let mut inner = Dict::new();
        inner.set("a", Value::integer(1));
        let mut dict = Dict::new();
        dict.set("outer", Value::dict(inner));
        let out = render(&dict, Mode::Indented);
        assert_eq!(out, "outer{\n  a:1,\n},\n");
    }

    #[test]
    fn scenario_seven_round_trip_both_modes() {
        let mut dict = Dict::new();
        dict.set("msg", Value::string("héllo"));
        dict.set(
            "xs",
            Value::list(vec![Value::bool(true), Value::bool(false), Value::integer(-7)]),
        );
        for mode in [Mode::Compact, Mode::Indented] {
            let rendered = render(&dict, mode);
            let reparsed = parse(crate::io::SliceSource::new(rendered.as_bytes())).unwrap();
            assert_eq!(reparsed, dict);
        }
    }
}
