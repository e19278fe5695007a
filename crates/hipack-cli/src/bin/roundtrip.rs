//! `hipack-roundtrip [-c] PATH` — reads a document, writes it to a temp
//! file, re-reads that, and asserts the two values are equal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hipack::io::WriterSink;
use hipack::Mode;
use hipack_cli::commands::read_dict;
use hipack_cli::error::{CliError, Result};

/// Verifies that writing a document and re-reading it reproduces an equal
/// value, under either writer mode.
#[derive(Parser, Debug)]
#[command(name = "hipack-roundtrip", version, about)]
struct Args {
    /// Round-trip through compact output instead of indented
    #[arg(short, long)]
    compact: bool,

    /// HiPack document to read
    path: PathBuf,
}

fn main() -> ExitCode {
    hipack_cli::init_logging();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => {
            println!("ok");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("hipack-roundtrip: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let original = read_dict(&args.path)?;
    let mode = if args.compact { Mode::Compact } else { Mode::Indented };

    let temp = tempfile::NamedTempFile::new()?;
    {
        let mut sink = WriterSink::new(temp.reopen()?);
        if !hipack::write(&mut sink, &original, mode) {
            return Err(CliError::Write);
        }
    }
    tracing::debug!(temp = %temp.path().display(), "wrote round-trip copy");

    let reparsed = read_dict(temp.path())?;
    if reparsed != original {
        return Err(CliError::RoundTripMismatch { path: args.path.clone() });
    }
    Ok(())
}
