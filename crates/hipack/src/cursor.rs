//! One-byte-lookahead cursor over a [`CharSource`].
//!
//! The parser never looks more than one byte past what it has already
//! consumed. `Cursor` is where that lookahead lives: it eagerly pulls the
//! next byte from the source on construction and after every [`bump`], so
//! [`current`] is always a cheap read of already-fetched state.

use crate::io::{CharIn, CharSource};
use hipack_util::Position;

pub struct Cursor<S> {
    source: S,
    lookahead: CharIn,
    position: Position,
}

impl<S: CharSource> Cursor<S> {
    pub fn new(mut source: S) -> Self {
        let lookahead = source.next_char();
        Cursor {
            source,
            lookahead,
            position: Position::START,
        }
    }

    /// The byte the cursor is sitting on, or `None` at end of input.
    pub fn current(&self) -> CharIn {
        self.lookahead
    }

    /// Convenience for the common case of matching on a plain byte; returns
    /// `None` at EOF or on I/O error, so callers who only care about byte
    /// values can use this instead of matching the full `CharIn`.
    pub fn current_byte(&self) -> Option<u8> {
        match self.lookahead {
            CharIn::Byte(b) => Some(b),
            CharIn::Eof | CharIn::IoError => None,
        }
    }

    /// The position of the byte currently under the cursor (or, at EOF,
    /// the position of the last byte consumed).
    pub fn position(&self) -> Position {
        self.position
    }

    /// Consumes the current byte and pulls the next one into view.
    ///
    /// The line/column update applies to the byte that was just fetched,
    /// not the one being left behind: a newline updates `position` the
    /// moment it becomes the lookahead, not on the bump that consumes it.
    ///
    /// Does nothing at EOF or after an I/O error; callers must check
    /// [`current`] before relying on progress being made.
    pub fn bump(&mut self) {
        if let CharIn::Byte(_) = self.lookahead {
            self.lookahead = self.source.next_char();
            if let CharIn::Byte(b) = self.lookahead {
                self.position.advance(b);
            }
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.lookahead, CharIn::Eof)
    }

    pub fn is_io_error(&self) -> bool {
        matches!(self.lookahead, CharIn::IoError)
    }
}
