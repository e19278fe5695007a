//! `hipack-cat [-c] PATH` — reads a HiPack document and re-emits it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hipack::Mode;
use hipack_cli::commands::read_dict;
use hipack_cli::error::Result;

/// Reads a HiPack document and writes it back out, indented by default.
#[derive(Parser, Debug)]
#[command(name = "hipack-cat", version, about)]
struct Args {
    /// Emit compact output instead of indented
    #[arg(short, long)]
    compact: bool,

    /// HiPack document to read
    path: PathBuf,
}

fn main() -> ExitCode {
    hipack_cli::init_logging();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hipack-cat: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<()> {
    tracing::debug!(path = %args.path.display(), "reading document");
    let dict = read_dict(&args.path)?;
    let mode = if args.compact { Mode::Compact } else { Mode::Indented };
    print!("{}", hipack::write_string(&dict, mode));
    Ok(())
}
