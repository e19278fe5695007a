//! Shared foundation types for the HiPack codec.
//!
//! This crate carries the small set of types that both the parser and the
//! writer need but that belong to neither: source positions and the parse
//! error taxonomy. Keeping them here means a future third consumer (a
//! schema checker, say) can depend on `hipack-util` without pulling in the
//! parser or writer implementations.

mod error;
mod position;

pub use error::{ErrorKind, ParseError, IO_ERROR_SENTINEL};
pub use position::Position;
