//! A codec for HiPack, a human-editable, JSON-like textual data format with
//! six value kinds and optional per-value annotations.
//!
//! The crate is split the way the format naturally decomposes:
//!
//! - [`io`] — the pull/push I/O abstraction the parser and writer build on
//! - [`value`], [`dict`], [`annotations`], [`string`] — the in-memory value
//!   model
//! - [`parser`] — the recursive-descent textual parser
//! - [`writer`] — the textual writer, in indented or compact mode
//!
//! ```
//! use hipack::{parse_str, write_string, Mode};
//!
//! let dict = parse_str("name: \"Ada\"\nage: 36\n").unwrap();
//! assert_eq!(dict.get("age").unwrap().as_integer(), Some(36));
//!
//! let rendered = write_string(&dict, Mode::Compact);
//! assert_eq!(parse_str(&rendered).unwrap(), dict);
//! ```

pub mod annotations;
pub mod cursor;
pub mod dict;
pub mod io;
pub mod parser;
pub mod string;
pub mod value;
pub mod writer;

pub use annotations::Annotations;
pub use dict::Dict;
pub use hipack_util::{ErrorKind, ParseError, Position, IO_ERROR_SENTINEL};
pub use parser::parse;
pub use string::HiString;
pub use value::{Value, ValueData};
pub use writer::{write, Mode, Writer};

use crate::io::{BufferSink, SliceSource};

/// Parses a complete document held in memory as a `&str`.
pub fn parse_str(input: &str) -> Result<Dict, ParseError> {
    parse(SliceSource::new(input.as_bytes()))
}

/// Renders `dict` to an owned `String` in `mode`. Writing to an in-memory
/// buffer cannot fail, so this has no error path.
pub fn write_string(dict: &Dict, mode: Mode) -> String {
    let mut sink = BufferSink::new();
    write(&mut sink, dict, mode);
    String::from_utf8_lossy(sink.as_bytes()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_example_round_trips() {
        let dict = parse_str("name: \"Ada\"\nage: 36\n").unwrap();
        let rendered = write_string(&dict, Mode::Compact);
        assert_eq!(parse_str(&rendered).unwrap(), dict);
    }
}
