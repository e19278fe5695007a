//! Character source and sink: the pull/push I/O abstraction the parser and
//! writer are built on.
//!
//! The parser never holds the whole input in memory as a buffer it indexes
//! into; it asks a [`CharSource`] for one byte at a time. Symmetrically the
//! writer pushes bytes one at a time into a [`CharSink`]. This keeps the
//! core codec agnostic to where bytes come from or go — a file, a socket, an
//! in-memory buffer — and lets callers plug in their own transport without
//! the parser or writer depending on `std::io` directly at the trait level.

use std::io::{self, Read, Write};

/// One read from a [`CharSource`]: a byte, end-of-input, or an I/O failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharIn {
    Byte(u8),
    Eof,
    IoError,
}

/// A pull-style byte source.
///
/// Implementations are free to block; the parser suspends by blocking on
/// this call and has no internal buffering beyond the one-byte lookahead it
/// keeps itself; see [`crate::parser`].
pub trait CharSource {
    fn next_char(&mut self) -> CharIn;
}

/// Reads from an in-memory byte slice. The natural source for parsing a
/// `&str` or `Vec<u8>` already resident in memory.
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceSource { bytes, position: 0 }
    }
}

impl<'a> CharSource for SliceSource<'a> {
    fn next_char(&mut self) -> CharIn {
        match self.bytes.get(self.position) {
            Some(&b) => {
                self.position += 1;
                CharIn::Byte(b)
            },
            None => CharIn::Eof,
        }
    }
}

/// Adapts any [`std::io::Read`] into a [`CharSource`]. This is the
/// standard-library-backed implementation the format spec expects to be
/// supplied "by convention" for reading from files, pipes, or sockets.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> CharIn {
        let mut byte = [0u8; 1];
        match self.reader.read(&mut byte) {
            Ok(0) => CharIn::Eof,
            Ok(_) => CharIn::Byte(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => self.next_char(),
            Err(_) => CharIn::IoError,
        }
    }
}

/// A push-style byte sink. `put_char` mirrors the C original's `int`
/// return (negative means failure) as a `Result` so callers can use `?`.
pub trait CharSink {
    fn put_char(&mut self, byte: u8) -> io::Result<()>;

    /// Writes every byte of `bytes` in order, stopping at the first failure.
    fn put_str(&mut self, bytes: &[u8]) -> io::Result<()> {
        for &b in bytes {
            self.put_char(b)?;
        }
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a [`CharSink`].
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }
}

impl<W: Write> CharSink for WriterSink<W> {
    fn put_char(&mut self, byte: u8) -> io::Result<()> {
        self.writer.write_all(&[byte])
    }

    fn put_str(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }
}

/// Accumulates written bytes into an owned buffer. Handy for tests and for
/// round-tripping entirely in memory.
#[derive(Default)]
pub struct BufferSink {
    buf: Vec<u8>,
}

impl BufferSink {
    pub fn new() -> Self {
        BufferSink::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl CharSink for BufferSink {
    fn put_char(&mut self, byte: u8) -> io::Result<()> {
        self.buf.push(byte);
        Ok(())
    }

    fn put_str(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buf.extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_yields_bytes_then_eof() {
        let mut src = SliceSource::new(b"ab");
        assert_eq!(src.next_char(), CharIn::Byte(b'a'));
        assert_eq!(src.next_char(), CharIn::Byte(b'b'));
        assert_eq!(src.next_char(), CharIn::Eof);
        assert_eq!(src.next_char(), CharIn::Eof);
    }

    #[test]
    fn reader_source_yields_bytes_then_eof() {
        let mut src = ReaderSource::new(&b"xy"[..]);
        assert_eq!(src.next_char(), CharIn::Byte(b'x'));
        assert_eq!(src.next_char(), CharIn::Byte(b'y'));
        assert_eq!(src.next_char(), CharIn::Eof);
    }

    #[test]
    fn buffer_sink_collects_bytes() {
        let mut sink = BufferSink::new();
        sink.put_str(b"hi").unwrap();
        assert_eq!(sink.into_bytes(), b"hi");
    }
}
