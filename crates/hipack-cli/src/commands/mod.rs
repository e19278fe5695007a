//! Shared helpers for the HiPack command-line tools.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hipack::io::ReaderSource;
use hipack::{Dict, Value};

use crate::error::{CliError, Result};

/// Parses a HiPack document straight from a file handle, streaming it
/// through [`ReaderSource`] rather than reading the whole file into memory
/// first.
pub fn read_dict(path: &Path) -> Result<Dict> {
    let file = File::open(path)?;
    let source = ReaderSource::new(BufReader::new(file));
    hipack::parse(source).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Walks a sequence of dict keys or list indices starting from a top-level
/// dict, the way `hipack-get PATH KEY...` addresses a nested value. A
/// segment that parses as an unsigned integer indexes into a list; any
/// other segment looks up a dict key.
pub fn navigate<'a>(dict: &'a Dict, key_path: &[String]) -> Option<&'a Value> {
    let mut segments = key_path.iter();
    let mut value = dict.get(segments.next()?)?;

    for segment in segments {
        value = match segment.parse::<usize>() {
            Ok(index) => value.as_list()?.get(index)?,
            Err(_) => value.as_dict()?.get(segment)?,
        };
    }
    Some(value)
}
