//! `hipack-get PATH KEY...` — walks a sequence of dict keys or list indices
//! and prints the value found there.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hipack::{Mode, Dict, Value};
use hipack_cli::commands::{navigate, read_dict};
use hipack_cli::error::{CliError, Result};

/// Prints the value reached by walking `KEY...` through a HiPack document.
/// Each key is either a dict key or, if it parses as an integer, a list
/// index.
#[derive(Parser, Debug)]
#[command(name = "hipack-get", version, about)]
struct Args {
    /// HiPack document to read
    path: PathBuf,

    /// Dict keys or list indices to walk, in order
    #[arg(required = true)]
    key_path: Vec<String>,
}

fn main() -> ExitCode {
    hipack_cli::init_logging();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hipack-get: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<()> {
    tracing::debug!(path = %args.path.display(), key_path = ?args.key_path, "walking document");
    let dict = read_dict(&args.path)?;
    let value = navigate(&dict, &args.key_path).ok_or_else(|| CliError::KeyNotFound {
        path: args.path.clone(),
        key_path: args.key_path.clone(),
    })?;
    print_value(value);
    Ok(())
}

fn print_value(value: &Value) {
    match value.as_dict() {
        Some(dict) => print!("{}", hipack::write_string(dict, Mode::Indented)),
        None => println!("{}", render_scalar_or_list(value)),
    }
}

fn render_scalar_or_list(value: &Value) -> String {
    // Wrap any non-dict result in a single-entry dict so the writer's
    // existing scalar/list rendering is reused rather than duplicated here,
    // then strip the synthetic "_" key, its separator, and the trailing
    // item comma back off.
    let mut wrapper = Dict::new();
    wrapper.set("_", value.clone());
    let rendered = hipack::write_string(&wrapper, Mode::Compact);
    let without_key = rendered.strip_prefix('_').unwrap_or(&rendered);
    let without_separator = without_key.strip_prefix(':').unwrap_or(without_key);
    without_separator.trim_end_matches(',').to_string()
}
